use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "No summarization endpoint configured. Pass --endpoint, set SUMMARIST_ENDPOINT, \
         or add `url` under [endpoint] in {path}"
    )]
    MissingEndpoint { path: PathBuf },

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/summarist/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("summarist").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. Validation is left to the
    /// caller so that overrides can be applied first.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load, apply the endpoint override, and validate.
    ///
    /// `endpoint_override` comes from the command line or the environment
    /// and takes precedence over the file.
    pub fn resolve(path: &Path, endpoint_override: Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        if let Some(url) = endpoint_override.filter(|url| !url.trim().is_empty()) {
            config.endpoint.url = Some(url);
        }
        config.validate(path)?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - An endpoint URL is present and is an http(s) URL
    /// - Timeouts are positive and the connect timeout fits in the total
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        self.endpoint_url(path)?;

        let endpoint = &self.endpoint;
        if endpoint.timeout_seconds == 0 || endpoint.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }
        if endpoint.connect_timeout_seconds > endpoint.timeout_seconds {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "connect_timeout_seconds ({}) exceeds timeout_seconds ({})",
                    endpoint.connect_timeout_seconds, endpoint.timeout_seconds
                ),
            });
        }

        Ok(())
    }

    /// Parsed endpoint URL.
    pub fn endpoint_url(&self, path: &Path) -> Result<Url, ConfigError> {
        let raw = self
            .endpoint
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEndpoint {
                path: path.to_path_buf(),
            })?;

        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }
}
