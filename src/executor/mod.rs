//! HTTP request executor.
//!
//! Turns an [`ApiRequest`] into exactly one `reqwest` call, attaches the
//! session cookies, stores any cookies the server sets, and decodes the body
//! as JSON. The status code is recorded but never turned into an error.

pub mod error;

pub use error::ClientError;

use crate::models::request::ApiRequest;
use crate::models::response::ApiResponse;
use crate::session::Session;
use log::debug;
use reqwest::header::COOKIE;
use std::collections::HashMap;
use url::Url;

/// Executes a request below `api_base` and returns the decoded response.
///
/// Fails only if the request cannot be sent or the body is not JSON.
pub async fn execute_request(
    client: &reqwest::Client,
    api_base: &Url,
    request: &ApiRequest,
    session: &Session,
) -> Result<ApiResponse, ClientError> {
    let url = request.resolve(api_base)?;
    debug!("[{}] {} {}", request.id, request.method, url);

    let cookies = session.cookie_header(&url);
    let mut req_builder = client.request(request.method.into(), url);

    for (name, value) in &request.headers {
        req_builder = req_builder.header(name, value);
    }

    if let Some(cookies) = cookies {
        req_builder = req_builder.header(COOKIE, cookies);
    }

    if let Some(body) = &request.body {
        req_builder = req_builder.body(serde_json::to_vec(body)?);
    }

    let response = req_builder.send().await?;

    let status_code = response.status().as_u16();
    session.store_response_cookies(response.headers(), response.url());

    let mut headers = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(value_str) = value.to_str() {
            headers.insert(name.as_str().to_string(), value_str.to_string());
        }
    }

    let bytes = response.bytes().await?;
    debug!(
        "[{}] {} {} -> {} ({} bytes)",
        request.id,
        request.method,
        request.path(),
        status_code,
        bytes.len()
    );

    let body = serde_json::from_slice(&bytes)?;

    Ok(ApiResponse {
        status_code,
        headers,
        body,
    })
}
