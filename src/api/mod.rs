//! Endpoint functions for the AIBS backend.
//!
//! [`ApiClient`] has one method per backend operation, grouped by resource in
//! the sub-modules. Every method takes the caller's [`Session`] and issues
//! exactly one request.
//!
//! Two flavours exist for each operation:
//!
//! - the raw method (`get_listings`, `login`, ...) returns the backend's JSON
//!   in an [`ApiResponse`] whatever the status code;
//! - the typed companion (`listings`, `login_typed`, ...) decodes it into an
//!   [`ApiOutcome`](crate::models::ApiOutcome).
//!
//! # Examples
//!
//! ```no_run
//! use aibs_client::{ApiClient, ClientConfig, QueryParams, Session};
//!
//! # async fn example() -> Result<(), aibs_client::ClientError> {
//! let client = ApiClient::new(ClientConfig::new("http://localhost:5000"))?;
//! let session = Session::new();
//!
//! let params = QueryParams::new().with("category", "tools").with("page", "2");
//! let response = client.get_listings(&session, &params).await?;
//! println!("{} {}", response.status_code, response.body);
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod auth;
pub mod listings;
pub mod supplies;
pub mod transactions;

use crate::config::{get_config, ClientConfig, ConfigError};
use crate::executor::{execute_request, ClientError};
use crate::models::{ApiRequest, ApiResponse};
use crate::session::Session;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use url::Url;

/// Client for the AIBS REST API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    api_base: Url,
}

impl ApiClient {
    /// Creates a client from a configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let redirect = if config.follow_redirects {
            Policy::limited(config.max_redirects as usize)
        } else {
            Policy::none()
        };

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(header_map(&config)?)
            .redirect(redirect)
            .build()
            .map_err(|e| ClientError::HttpClient(e.to_string()))?;

        Self::with_http_client(config, http)
    }

    /// Creates a client from the global configuration.
    pub fn from_global_config() -> Result<Self, ClientError> {
        Self::new(get_config())
    }

    /// Creates a client around an existing `reqwest::Client`.
    ///
    /// The configured user agent, default headers, and redirect policy are
    /// not applied to `http`. Its own cookie store must be disabled, or
    /// credentials will be sent twice.
    pub fn with_http_client(
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self, ClientError> {
        let api_base = config.api_base_url()?;
        Ok(Self {
            http,
            config,
            api_base,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL every endpoint path is resolved against.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Issues an arbitrary request below the API base path.
    pub async fn send(
        &self,
        request: ApiRequest,
        session: &Session,
    ) -> Result<ApiResponse, ClientError> {
        execute_request(&self.http, &self.api_base, &request, session).await
    }
}

fn header_map(config: &ClientConfig) -> Result<HeaderMap, ConfigError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.default_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeader(name.clone()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| ConfigError::InvalidHeader(name.as_str().to_string()))?;
        headers.insert(name, value);
    }
    Ok(headers)
}
