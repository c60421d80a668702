//! Client error types.
//!
//! Only failures that prevent a JSON value from being produced are errors
//! here. An HTTP error status is not: the server's JSON body is handed back
//! as a normal [`ApiResponse`](crate::models::ApiResponse).

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while issuing a request or decoding its response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed: DNS resolution, connection refused,
    /// reset, or an IO failure while reading the body.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The base URL or a derived request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body is not JSON, or does not match the expected shape.
    #[error("Invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// A query parameter value is not a flat scalar.
    #[error("Invalid query parameter `{key}`: {reason}")]
    Query { key: String, reason: String },

    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be constructed. No request was sent.
    #[error("Cannot build HTTP client: {0}")]
    HttpClient(String),

    /// Reading or writing a persisted session failed.
    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted session could not be encoded or decoded.
    #[error("Invalid session file: {0}")]
    SessionStore(String),
}

impl ClientError {
    /// Creates a [`ClientError::Query`] for the given parameter key.
    pub fn query(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ClientError::Query {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the request failed at the network level.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// Returns `true` if the response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode(_))
    }
}
