//! Integration tests module for the AIBS client
//!
//! Every test starts a `wiremock` server standing in for the backend and
//! points an [`ApiClient`] at it.

pub mod auth_test;
pub mod listings_test;
pub mod transport_test;

use aibs_client::{ApiClient, ClientConfig};
use std::sync::Once;
use wiremock::{MockServer, Request};

static INIT: Once = Once::new();

/// Initialize test environment (run once)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Starts a mock backend and a client pointed at it.
pub async fn setup() -> (MockServer, ApiClient) {
    init_test_env();
    let server = MockServer::start().await;
    let client = ApiClient::new(ClientConfig::new(server.uri())).expect("valid client config");
    (server, client)
}

/// All requests the mock backend has seen so far.
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
}

/// Case-insensitive header lookup on a recorded request.
pub fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
