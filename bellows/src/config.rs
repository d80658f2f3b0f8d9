use crate::wiki::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const LOCAL_CONFIG_FILE: &str = ".bellows.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(String),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BellowsConfig {
    pub wiki: WikiConfig,
    pub chat: ChatConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub greeting_pause_ms: u64,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!(
                "bellows/{} (+https://github.com/lorehaven/forge)",
                env!("CARGO_PKG_VERSION")
            ),
            timeout_secs: None,
        }
    }
}

impl ChatConfig {
    pub const fn greeting_pause(&self) -> Duration {
        Duration::from_millis(self.greeting_pause_ms)
    }
}

impl BellowsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(format!("{home}/.config/bellows/config.toml")))
    }

    /// Loads the explicit path if given, otherwise the first existing file of
    /// `./.bellows.toml` and the global config, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE))
            .chain(Self::global_config_path());
        for path in candidates {
            if path.is_file() {
                tracing::debug!("loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.wiki.base_url = url;
        }
        self
    }
}
