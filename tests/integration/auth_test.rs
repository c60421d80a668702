//! Auth endpoint tests: request shape and session lifecycle.

use super::{header_value, received, setup};
use aibs_client::models::UserType;
use aibs_client::{ApiOutcome, Session};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_signup_posts_json_body() {
    let (server, client) = setup().await;
    let reply = json!({
        "success": true,
        "user": {"id": 7, "name": "Asha", "email": "asha@example.com", "type": "Farmer"}
    });

    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Asha",
            "email": "asha@example.com",
            "password": "secret",
            "type": "Farmer"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new();
    let response = client
        .signup(&session, "Asha", "asha@example.com", "secret", UserType::Farmer)
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, reply);
    assert_eq!(received(&server).await.len(), 1);
}

#[tokio::test]
async fn test_login_stores_session_cookie() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "ravi@example.com",
            "password": "pw",
            "type": "Vendor"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=vendor-token; HttpOnly; Path=/")
                .set_body_json(json!({
                    "success": true,
                    "user": {"id": 2, "name": "Ravi", "email": "ravi@example.com", "type": "Vendor"}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new();
    let outcome = client
        .login_typed(&session, "ravi@example.com", "pw", UserType::Vendor)
        .await
        .unwrap();

    let auth = outcome.success().expect("login should succeed");
    assert_eq!(auth.user.id, 2);
    assert_eq!(auth.user.user_type, UserType::Vendor);
    assert_eq!(session.cookie("session"), Some("vendor-token".to_string()));
}

#[tokio::test]
async fn test_login_failure_is_returned_not_raised() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let session = Session::new();
    let response = client
        .login(&session, "nobody@example.com", "wrong", UserType::Farmer)
        .await
        .expect("HTTP 401 is not a client error");
    assert_eq!(response.status_code, 401);
    assert_eq!(response.body, json!({"error": "Invalid credentials"}));

    let outcome = client
        .login_typed(&session, "nobody@example.com", "wrong", UserType::Farmer)
        .await
        .unwrap();
    match outcome {
        ApiOutcome::Failure(failure) => {
            assert_eq!(failure.status_code, 401);
            assert_eq!(failure.message, "Invalid credentials");
        }
        ApiOutcome::Success(_) => panic!("Expected a failure outcome"),
    }
    assert!(session.is_empty());
}

#[tokio::test]
async fn test_session_cookie_sent_on_later_calls() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("cookie", "session=farmer-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "name": "Asha", "email": "asha@example.com", "type": "Farmer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::from_cookies(client.api_base(), [("session", "farmer-token")]);
    let user = client
        .current_user(&session)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(user.name, "Asha");
}

#[tokio::test]
async fn test_get_current_user_sends_no_body_or_content_type() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Not authenticated"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new();
    let response = client.get_current_user(&session).await.unwrap();
    assert_eq!(response.error_message(), Some("Not authenticated"));

    let requests = received(&server).await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
    assert_eq!(header_value(&requests[0], "content-type"), None);
    assert_eq!(header_value(&requests[0], "cookie"), None);
    assert_eq!(
        header_value(&requests[0], "accept"),
        Some("application/json".to_string())
    );
}

#[tokio::test]
async fn test_logout_posts_without_body_and_clears_session() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::from_cookies(client.api_base(), [("session", "abc")]);
    let ack = client
        .logout_typed(&session)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert!(ack.success);
    assert!(session.is_empty());

    let requests = received(&server).await;
    assert!(requests[0].body.is_empty());
    assert_eq!(header_value(&requests[0], "content-type"), None);
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=admin-token; Path=/")
                .set_body_json(json!({
                    "success": true,
                    "user": {"id": 1, "name": "Admin", "email": "admin@aibs.com", "type": "Admin"}
                })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .and(header("cookie", "session=admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activeUsers": 0, "blockedUsers": 0, "farmers": 0, "vendors": 0,
            "totalTransactions": 0, "successfulTransactions": 0, "totalRevenue": 0,
            "pendingTransactions": 0, "failedTransactions": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let session = Session::new();
    client
        .login(&session, "admin@aibs.com", "admin123", UserType::Admin)
        .await
        .unwrap();
    let stats = client.admin_stats(&session).await.unwrap();
    assert!(stats.is_success());

    client.logout(&session).await.unwrap();
    assert!(session.is_empty());

    let requests = received(&server).await;
    let logout = requests.last().unwrap();
    assert_eq!(logout.url.path(), "/api/auth/logout");
    assert_eq!(
        header_value(logout, "cookie"),
        Some("session=admin-token".to_string())
    );
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body["type"], "Admin");
}

#[tokio::test]
async fn test_cookie_without_path_is_scoped_to_auth_endpoints() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=scoped")
                .set_body_json(json!({
                    "success": true,
                    "user": {"id": 7, "name": "Asha", "email": "asha@example.com", "type": "Farmer"}
                })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let session = Session::new();
    client
        .login(&session, "asha@example.com", "secret", UserType::Farmer)
        .await
        .unwrap();
    client.get_current_user(&session).await.unwrap();
    client
        .get_listings(&session, &aibs_client::QueryParams::new())
        .await
        .unwrap();

    let requests = received(&server).await;
    assert_eq!(requests[1].url.path(), "/api/auth/me");
    assert_eq!(
        header_value(&requests[1], "cookie"),
        Some("session=scoped".to_string())
    );
    assert_eq!(requests[2].url.path(), "/api/listings");
    assert_eq!(header_value(&requests[2], "cookie"), None);
}
