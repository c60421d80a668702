//! Transport and decode failures.

use super::{init_test_env, setup};
use aibs_client::models::UserType;
use aibs_client::{ApiClient, ClientConfig, QueryParams, Session};
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// A client pointed at a local port nothing listens on.
fn unreachable_client() -> ApiClient {
    init_test_env();
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    ApiClient::new(ClientConfig::new(format!("http://127.0.0.1:{}", port))).unwrap()
}

#[tokio::test]
async fn test_unreachable_server_fails_every_operation() {
    let client = unreachable_client();
    let session = Session::new();
    let params = QueryParams::new();
    let body = json!({});

    let results = vec![
        client
            .signup(&session, "a", "a@example.com", "pw", UserType::Farmer)
            .await,
        client
            .login(&session, "a@example.com", "pw", UserType::Farmer)
            .await,
        client.get_current_user(&session).await,
        client.get_listings(&session, &params).await,
        client.create_listing(&session, &body).await,
        client.update_listing(&session, 1, &body).await,
        client.get_supplies(&session, &params).await,
        client.create_supply(&session, &body).await,
        client.get_transactions(&session, &params).await,
        client.create_transaction(&session, &body).await,
        client.get_users(&session).await,
        client.update_user(&session, 1, &body).await,
        client.get_admin_stats(&session).await,
    ];

    for result in results {
        let err = result.unwrap_err();
        assert!(err.is_transport(), "Expected transport error, got {}", err);
    }
}

#[tokio::test]
async fn test_logout_transport_failure_keeps_session() {
    let client = unreachable_client();
    let session = Session::from_cookies(client.api_base(), [("session", "abc")]);

    let err = client.logout(&session).await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(session.cookie("session"), Some("abc".to_string()));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/listings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .get_listings(&Session::new(), &QueryParams::new())
        .await
        .unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_empty_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_admin_stats(&Session::new()).await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_typed_decode_of_unexpected_shape_fails() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"farmers": "many"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.admin_stats(&Session::new()).await.unwrap_err();
    assert!(err.is_decode());
}
