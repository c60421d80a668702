//! HTTP response data models.
//!
//! [`ApiResponse`] carries the decoded JSON body exactly as the backend sent
//! it, whatever the status code. [`ApiOutcome`] is the typed view on top: it
//! decides success or failure and decodes the success payload.

use crate::executor::ClientError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A decoded response from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code (e.g., 200, 401, 500).
    pub status_code: u16,

    /// Response headers. Repeated headers keep the last value.
    pub headers: HashMap<String, String>,

    /// The parsed JSON body, unmodified.
    pub body: Value,
}

impl ApiResponse {
    /// Creates a response with the given status and body and no headers.
    pub fn new(status_code: u16, body: Value) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body,
        }
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Checks if the response status indicates a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Checks if the response status indicates a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// Canonical reason phrase for the status code, e.g. "Unauthorized".
    pub fn status_text(&self) -> &'static str {
        reqwest::StatusCode::from_u16(self.status_code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown")
    }

    /// The `error` field of an error-shaped body, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }

    /// Gets a header value, ignoring the case of the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Consumes the response and returns the raw JSON body.
    pub fn into_body(self) -> Value {
        self.body
    }

    /// Classifies the response and decodes a success payload into `T`.
    ///
    /// The call failed if the status is not 2xx or the body carries an
    /// `error` string. Otherwise the body must decode as `T`.
    pub fn into_outcome<T: DeserializeOwned>(self) -> Result<ApiOutcome<T>, ClientError> {
        if !self.is_success() || self.error_message().is_some() {
            let message = self
                .error_message()
                .map(str::to_string)
                .unwrap_or_else(|| self.status_text().to_string());
            return Ok(ApiOutcome::Failure(ApiFailure {
                status_code: self.status_code,
                message,
            }));
        }

        Ok(ApiOutcome::Success(serde_json::from_value(self.body)?))
    }
}

/// An application-level failure reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message} (HTTP {status_code})")]
pub struct ApiFailure {
    pub status_code: u16,
    pub message: String,
}

/// Typed result of one API call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure(ApiFailure),
}

impl<T> ApiOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            ApiOutcome::Success(value) => Some(value),
            ApiOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Failure(failure) => Some(failure),
        }
    }

    /// Converts into a `Result`, so callers can use `?` on failures.
    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            ApiOutcome::Success(value) => Ok(value),
            ApiOutcome::Failure(failure) => Err(failure),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(value) => ApiOutcome::Success(f(value)),
            ApiOutcome::Failure(failure) => ApiOutcome::Failure(failure),
        }
    }
}
