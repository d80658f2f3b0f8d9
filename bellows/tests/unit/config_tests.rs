use bellows::config::{BellowsConfig, ConfigError};
use bellows::wiki::DEFAULT_BASE_URL;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = BellowsConfig::default();
    assert_eq!(config.wiki.base_url, DEFAULT_BASE_URL);
    assert!(config.wiki.user_agent.starts_with("bellows/"));
    assert!(config.wiki.timeout_secs.is_none());
    assert_eq!(config.chat.greeting_pause(), Duration::ZERO);
}

#[test]
fn test_parse_config() {
    let toml_str = r#"
        [wiki]
        base_url = "https://simple.wikipedia.org/wiki/"
        timeout_secs = 10

        [chat]
        greeting_pause_ms = 250
    "#;
    let config: BellowsConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.wiki.base_url, "https://simple.wikipedia.org/wiki/");
    assert_eq!(config.wiki.timeout_secs, Some(10));
    assert!(config.wiki.user_agent.starts_with("bellows/"));
    assert_eq!(config.chat.greeting_pause(), Duration::from_millis(250));
}

#[test]
fn test_parse_empty_config() {
    let config: BellowsConfig = toml::from_str("").unwrap();
    assert_eq!(config.wiki.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_missing_explicit_file() {
    let path = std::env::temp_dir().join("bellows-does-not-exist.toml");
    let err = BellowsConfig::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_load_explicit_file() {
    let path = std::env::temp_dir().join(format!("bellows-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[wiki]\nuser_agent = \"test-agent/1.0\"\n").unwrap();

    let config = BellowsConfig::load(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.wiki.user_agent, "test-agent/1.0");
    assert_eq!(config.wiki.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_invalid_toml() {
    let path = std::env::temp_dir().join(format!("bellows-invalid-{}.toml", std::process::id()));
    std::fs::write(&path, "[wiki\nbase_url = ").unwrap();

    let err = BellowsConfig::from_file(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_base_url_override() {
    let config = BellowsConfig::default().with_base_url(Some("http://localhost:8080/wiki".into()));
    assert_eq!(config.wiki.base_url, "http://localhost:8080/wiki");

    let config = BellowsConfig::default().with_base_url(None);
    assert_eq!(config.wiki.base_url, DEFAULT_BASE_URL);
}
