//! HTTP request descriptor.
//!
//! An [`ApiRequest`] names an endpoint relative to the API base path, the
//! method, optional query parameters, and an optional JSON body. It is
//! resolved against the configured base URL only when it is executed.

use crate::executor::ClientError;
use crate::query::QueryParams;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use url::Url;
use uuid::Uuid;

/// HTTP request method used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - read a resource or collection
    GET,
    /// HTTP POST method - create a resource or perform an action
    POST,
    /// HTTP PUT method - update a resource
    PUT,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
        }
    }

    /// Parses a method name, ignoring case.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
        }
    }
}

/// A single call against the backend API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRequest {
    /// Unique identifier used to correlate log lines for this call.
    pub id: String,

    /// HTTP method.
    pub method: HttpMethod,

    /// Path segments below the API base path, e.g. `["listings", "7"]`.
    ///
    /// Each segment is percent-encoded on its own when the URL is built.
    pub segments: Vec<String>,

    /// Extra request headers. Session cookies are added by the executor.
    pub headers: HashMap<String, String>,

    /// Query parameters; empty means no query string at all.
    pub query: QueryParams,

    /// Optional JSON body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request for the given method and path segments.
    pub fn new<I, S>(method: HttpMethod, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Uuid::new_v4().to_string(),
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            headers: HashMap::new(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::GET, segments)
    }

    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::POST, segments)
    }

    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::PUT, segments)
    }

    /// Sets the query parameters.
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Sets a JSON body and the matching `Content-Type` header.
    pub fn with_json(mut self, body: Value) -> Self {
        self.add_header("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(body);
        self
    }

    /// Serializes `data` as the JSON body.
    pub fn with_json_from<T: Serialize + ?Sized>(self, data: &T) -> Result<Self, ClientError> {
        Ok(self.with_json(serde_json::to_value(data)?))
    }

    /// Adds a header to the request.
    pub fn add_header(&mut self, name: String, value: String) {
        self.headers.insert(name, value);
    }

    /// Checks if the request carries a body.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Gets the Content-Type header value if present.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.as_str())
    }

    /// Path below the API base, e.g. `/listings/7`, unencoded. For logs.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Builds the absolute URL for this request below `api_base`.
    pub fn resolve(&self, api_base: &Url) -> Result<Url, ClientError> {
        let mut url = api_base.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(self.segments.iter());

        if self.query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.query.encode()));
        }
        Ok(url)
    }
}
