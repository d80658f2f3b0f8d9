pub mod client;
pub mod extract;
pub mod topic;

pub use client::{ArticleSource, FetchError, HttpSource};
pub use topic::{DEFAULT_BASE_URL, TopicError, article_url, resolve, topic_slug};

/// Article text as scraped from the encyclopedia. Paragraph positions are
/// stable, empty paragraphs included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Article {
    pub fn paragraph(&self, id: usize) -> Option<&str> {
        self.paragraphs.get(id).map(String::as_str)
    }
}
