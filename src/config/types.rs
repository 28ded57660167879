use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::summary::SummaryLength;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub panes: PanesConfig,
}

/// Where and how to reach the summarization endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Full URL of the summarize route. No default: it is deployment-specific.
    #[serde(default)]
    pub url: Option<String>,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Initial values for the summarizer pane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Length option selected on startup.
    #[serde(default)]
    pub length: SummaryLength,
}

/// Text shown on the static panes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanesConfig {
    #[serde(default = "default_about")]
    pub about: String,
    #[serde(default = "default_contact")]
    pub contact: String,
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_about() -> String {
    "Summarist generates summaries for large blocks of text. \
     Pick a short, medium or detailed summary and submit your text."
        .to_string()
}

fn default_contact() -> String {
    "For queries or feedback, reach out to the maintainers of your \
     summarization service."
        .to_string()
}

fn default_profile() -> String {
    "Built by people who like their reading lists shorter.".to_string()
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for PanesConfig {
    fn default() -> Self {
        Self {
            about: default_about(),
            contact: default_contact(),
            profile: default_profile(),
        }
    }
}
