//! Game configuration loaded from TOML and the environment.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Environment variable that overrides [`TriviaConfig::api_base_url`].
pub const API_URL_ENV: &str = "STRICTLY_TRIVIA_API_URL";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    /// Base URL of the jservice-compatible trivia API.
    api_base_url: String,

    /// Per-request timeout in seconds.
    #[getter(copy)]
    request_timeout_secs: u64,

    /// File the TUI writes its logs to.
    log_file: PathBuf,
}

#[instrument]
fn default_api_base_url() -> String {
    "https://jservice.io".to_string()
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: 10,
            log_file: PathBuf::from("strictly_trivia.log"),
        }
    }
}

impl TriviaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(api_base_url = %config.api_base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file is missing.
    ///
    /// The [`API_URL_ENV`] environment variable and `api_url_override`
    /// are applied on top, in that order.
    #[instrument(skip(path))]
    pub fn resolve(path: &Path, api_url_override: Option<String>) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            warn!(path = %path.display(), "Config file not found, using defaults");
            Self::default()
        };

        config.apply_api_url_overrides(std::env::var(API_URL_ENV).ok(), api_url_override);
        config.validate()?;
        Ok(config)
    }

    /// Applies the environment URL, then the command-line URL, over the file value.
    fn apply_api_url_overrides(&mut self, from_env: Option<String>, from_cli: Option<String>) {
        if let Some(url) = from_env {
            info!(url = %url, "Using API URL from environment");
            self.api_base_url = url;
        }
        if let Some(url) = from_cli {
            info!(url = %url, "Using API URL from command line");
            self.api_base_url = url;
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ConfigError::new(format!(
                "api_base_url must start with http:// or https://, got {:?}",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::new("request_timeout_secs must be > 0"));
        }
        Ok(())
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns a copy with a different base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
