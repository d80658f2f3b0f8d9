use crate::support::{FakeSource, SKY_PAGE, SKY_URL};
use bellows::wiki::{DEFAULT_BASE_URL, TopicError, article_url, resolve, topic_slug};

#[test]
fn test_topic_slug_single_word() {
    assert_eq!(topic_slug("python"), "Python");
    assert_eq!(topic_slug("  PYTHON \n"), "Python");
}

#[test]
fn test_topic_slug_phrase() {
    assert_eq!(
        topic_slug("Python (programming language)"),
        "Python_(programming_language)"
    );
    assert_eq!(topic_slug("new   YORK city"), "New_york_city");
    assert_eq!(topic_slug("élan vital"), "Élan_vital");
}

#[test]
fn test_topic_slug_blank() {
    assert_eq!(topic_slug(""), "");
    assert_eq!(topic_slug("   "), "");
}

#[test]
fn test_article_url() {
    assert_eq!(
        article_url(DEFAULT_BASE_URL, "Python"),
        "https://en.wikipedia.org/wiki/Python"
    );
    assert_eq!(
        article_url("https://en.wikipedia.org/wiki", "Python"),
        "https://en.wikipedia.org/wiki/Python"
    );
}

#[tokio::test]
async fn test_resolve_builds_article() {
    let source = FakeSource::default().with_page(SKY_URL, SKY_PAGE);
    let requests = source.requests();

    let article = resolve(&source, DEFAULT_BASE_URL, " sky ").await.unwrap();

    assert_eq!(article.title, "Sky");
    assert_eq!(
        article.paragraphs,
        vec![
            "The sky is blue. It looks bright at noon.".to_string(),
            String::new(),
            "Grass is green.".to_string(),
        ]
    );
    assert_eq!(*requests.lock().unwrap(), vec![SKY_URL.to_string()]);
}

#[tokio::test]
async fn test_resolve_empty_topic_does_not_fetch() {
    let source = FakeSource::default();
    let requests = source.requests();

    let err = resolve(&source, DEFAULT_BASE_URL, "  ").await.unwrap_err();

    assert!(matches!(err, TopicError::EmptyTopic));
    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_resolve_transport_failure() {
    let source = FakeSource::default();
    let err = resolve(&source, DEFAULT_BASE_URL, "nowhere").await.unwrap_err();

    assert!(matches!(err, TopicError::Transport(_)));
    assert_eq!(
        err.to_string(),
        "https://en.wikipedia.org/wiki/Nowhere returned HTTP 404"
    );
}

#[tokio::test]
async fn test_resolve_page_without_heading() {
    let url = "https://en.wikipedia.org/wiki/Headless";
    let source = FakeSource::default().with_page(url, "<p>Some text.</p>");

    let err = resolve(&source, DEFAULT_BASE_URL, "headless").await.unwrap_err();
    assert!(matches!(err, TopicError::MissingTitle { .. }));
}

#[tokio::test]
async fn test_resolve_page_without_paragraphs() {
    let url = "https://en.wikipedia.org/wiki/Empty";
    let source = FakeSource::default().with_page(url, "<h1>Empty</h1><div>No blocks.</div>");

    let err = resolve(&source, DEFAULT_BASE_URL, "empty").await.unwrap_err();
    assert!(matches!(err, TopicError::NoParagraphs { .. }));
}
