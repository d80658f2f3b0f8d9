use crate::wiki::client::{ArticleSource, FetchError};
use crate::wiki::extract::parse_page;
use crate::wiki::Article;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

#[derive(Error, Debug)]
pub enum TopicError {
    #[error("no topic given")]
    EmptyTopic,
    #[error(transparent)]
    Transport(#[from] FetchError),
    #[error("{url} has no article heading")]
    MissingTitle { url: String },
    #[error("{url} has no paragraphs")]
    NoParagraphs { url: String },
}

/// Normalizes free text to the article slug convention: trimmed, lowercased
/// with the first letter capitalized, words joined by underscores.
pub fn topic_slug(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut chars = lowered.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    capitalized.split_whitespace().collect::<Vec<_>>().join("_")
}

pub fn article_url(base_url: &str, slug: &str) -> String {
    format!("{}/{slug}", base_url.trim_end_matches('/'))
}

/// Fetches and extracts the article for a user-entered topic.
pub async fn resolve<S>(source: &S, base_url: &str, raw: &str) -> Result<Article, TopicError>
where
    S: ArticleSource + ?Sized,
{
    let slug = topic_slug(raw);
    if slug.is_empty() {
        return Err(TopicError::EmptyTopic);
    }

    let url = article_url(base_url, &slug);
    let markup = source.fetch(&url).await?;
    let page = parse_page(&markup);

    let Some(title) = page.title else {
        return Err(TopicError::MissingTitle { url });
    };
    if page.paragraphs.is_empty() {
        return Err(TopicError::NoParagraphs { url });
    }

    tracing::info!(
        "loaded \"{title}\" from {url}: {} paragraph(s)",
        page.paragraphs.len()
    );

    Ok(Article {
        title,
        paragraphs: page.paragraphs,
    })
}
