//! Configuration management for the AIBS client.
//!
//! This module provides configuration loading, validation, and access through a singleton pattern.
//! Configuration comes from an optional JSON file merged over the defaults, then the
//! `AIBS_BASE_URL` environment variable, then an explicit base URL from the caller.

pub mod schema;

pub use schema::{ClientConfig, BASE_URL_ENV};

use log::debug;
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::RwLock;
use thiserror::Error;

/// Global configuration instance.
///
/// This is lazily initialized on first access and replaced by [`load`].
static CONFIG: Lazy<RwLock<ClientConfig>> = Lazy::new(|| RwLock::new(ClientConfig::default()));

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("API prefix must start with '/': {0}")]
    InvalidApiPrefix(String),

    #[error("Invalid default header: {0}")]
    InvalidHeader(String),

    #[error("Cannot read configuration file: {0}")]
    Read(String),

    #[error("Cannot parse configuration: {0}")]
    Parse(String),
}

/// Loads, validates, and installs the global configuration.
///
/// Sources, lowest precedence first:
/// 1. built-in defaults
/// 2. the JSON file at `path`, if given
/// 3. the `AIBS_BASE_URL` environment variable
/// 4. `base_url`, if given
///
/// # Example
///
/// ```no_run
/// use aibs_client::config::load;
/// use aibs_client::ApiClient;
///
/// let config = load(None, Some("http://aibs.local:5000"))?;
/// assert_eq!(config.base_url, "http://aibs.local:5000");
///
/// let _client = ApiClient::from_global_config()?;
/// # Ok::<(), aibs_client::ClientError>(())
/// ```
pub fn load(path: Option<&Path>, base_url: Option<&str>) -> Result<ClientConfig, ConfigError> {
    let mut config = match path {
        Some(path) => ClientConfig::default().merge(&read_config_file(path)?),
        None => ClientConfig::default(),
    }
    .with_env_overrides();

    if let Some(base_url) = base_url {
        config.base_url = base_url.to_string();
    }

    config.validate()?;
    debug!("Using AIBS backend at {}", config.base_url);
    set_config(config.clone());

    Ok(config)
}

/// Reads a JSON file holding a bare configuration object. A file that does
/// not parse is an error.
fn read_config_file(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Gets the current global configuration.
///
/// If configuration has not been loaded yet, returns the default configuration.
pub fn get_config() -> ClientConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| ClientConfig::default())
}

/// Resets the configuration to defaults.
pub fn reset_config() {
    set_config(ClientConfig::default());
}

fn set_config(config: ClientConfig) {
    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config;
    }
}
