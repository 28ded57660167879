//! Configuration: TOML file plus endpoint override from flag or environment.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, EndpointConfig, PanesConfig};

/// Environment variable that supplies the endpoint URL.
pub const ENDPOINT_ENV: &str = "SUMMARIST_ENDPOINT";
