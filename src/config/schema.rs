//! Configuration schema for the AIBS client.
//!
//! This module defines the configuration structure and validation logic for
//! every user-configurable client setting.

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Environment variable that overrides [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "AIBS_BASE_URL";

/// Main configuration structure for the client.
///
/// Read from a JSON file holding a bare configuration object. Missing
/// settings fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Origin of the backend, e.g. `http://localhost:5000`.
    ///
    /// Must be an absolute `http` or `https` URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fixed prefix under which every endpoint lives. Defaults to `/api`.
    ///
    /// Must start with `/`.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// `User-Agent` sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to follow HTTP redirects. Defaults to true.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,

    /// Maximum number of redirects to follow. Defaults to 10.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,

    /// Headers added to every request.
    ///
    /// Defaults to `Accept: application/json`. User-supplied headers are
    /// merged over the defaults.
    #[serde(default = "default_headers")]
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            user_agent: default_user_agent(),
            follow_redirects: default_follow_redirects(),
            max_redirects: default_max_redirects(),
            default_headers: default_headers(),
        }
    }
}

impl ClientConfig {
    /// Creates a default configuration pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        if url.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl(format!(
                "{}: missing host",
                self.base_url
            )));
        }

        if !self.api_prefix.starts_with('/') {
            return Err(ConfigError::InvalidApiPrefix(self.api_prefix.clone()));
        }

        for (name, value) in &self.default_headers {
            if reqwest::header::HeaderName::from_bytes(name.as_bytes()).is_err()
                || reqwest::header::HeaderValue::from_str(value).is_err()
            {
                return Err(ConfigError::InvalidHeader(name.clone()));
            }
        }

        Ok(())
    }

    /// Absolute URL of the API base path, e.g. `http://localhost:5000/api`.
    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                ConfigError::InvalidBaseUrl(format!("{}: cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(self.api_prefix.split('/').filter(|s| !s.is_empty()));
        url.set_query(None);
        url.set_fragment(None);

        Ok(url)
    }

    /// Merges `other` over this configuration.
    ///
    /// Scalar settings are taken from `other`; default headers are combined,
    /// with `other` winning on conflicts.
    pub fn merge(&self, other: &ClientConfig) -> Self {
        let mut default_headers = self.default_headers.clone();
        for (name, value) in &other.default_headers {
            default_headers.retain(|k, _| !k.eq_ignore_ascii_case(name));
            default_headers.insert(name.clone(), value.clone());
        }

        Self {
            base_url: other.base_url.clone(),
            api_prefix: other.api_prefix.clone(),
            user_agent: other.user_agent.clone(),
            follow_redirects: other.follow_redirects,
            max_redirects: other.max_redirects,
            default_headers,
        }
    }

    /// Applies the `AIBS_BASE_URL` environment override, if set and not
    /// blank.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                self.base_url = base_url.trim().to_string();
            }
        }
        self
    }
}

// Default value functions for serde

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_user_agent() -> String {
    format!("aibs-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirects() -> u32 {
    10
}

fn default_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}
