//! Listing endpoint tests.

use super::{header_value, received, setup};
use aibs_client::models::{ListingFilter, ListingStatus, ListingUpdate, NewListing};
use aibs_client::{QueryParams, Session};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn listing_row(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "farmer_id": 3,
        "farmer_name": "Asha",
        "crop": "Rice",
        "quantity_kg": 50.0,
        "price_per_kg": 30.0,
        "status": status,
        "accepted_by": null,
        "created_at": "2024-03-01 09:15:00",
        "accepted_at": null
    })
}

#[tokio::test]
async fn test_get_listings_with_params() {
    let (server, client) = setup().await;
    let reply = json!([listing_row(1, "Pending")]);

    Mock::given(method("GET"))
        .and(path("/api/listings"))
        .and(query_param("category", "tools"))
        .and(query_param("page", "2"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::from_cookies(client.api_base(), [("session", "abc")]);
    let params = QueryParams::new().with("category", "tools").with("page", "2");
    let response = client.get_listings(&session, &params).await.unwrap();

    assert_eq!(response.body, reply);

    let requests = received(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("category=tools&page=2"));
    assert_eq!(header_value(&requests[0], "content-type"), None);
}

#[tokio::test]
async fn test_get_listings_without_params_has_no_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/listings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .get_listings(&Session::new(), &QueryParams::new())
        .await
        .unwrap();
    assert_eq!(response.body, json!([]));
    assert_eq!(received(&server).await[0].url.query(), None);
}

#[tokio::test]
async fn test_typed_listings_with_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/listings"))
        .and(query_param("status", "Accepted"))
        .and(query_param("farmer_id", "3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([listing_row(4, "Accepted"), listing_row(2, "Accepted")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let filter = ListingFilter {
        status: Some(ListingStatus::Accepted),
        farmer_id: Some(3),
    };
    let listings = client
        .listings(&Session::new(), &filter)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].id, 4);
    assert!(listings.iter().all(|l| l.status == ListingStatus::Accepted));
}

#[tokio::test]
async fn test_create_listing_round_trips_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/listings"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"crop": "Wheat", "quantityKg": 120.0, "pricePerKg": 24.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "id": 11})))
        .expect(1)
        .mount(&server)
        .await;

    let listing = NewListing {
        crop: "Wheat".to_string(),
        quantity_kg: 120.0,
        price_per_kg: 24.5,
    };
    let created = client
        .create_listing_typed(&Session::new(), &listing)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(created.id, 11);

    let sent: NewListing = received(&server).await[0].body_json().unwrap();
    assert_eq!(sent, listing);
}

#[tokio::test]
async fn test_create_listing_forwards_arbitrary_json() {
    let (server, client) = setup().await;
    let data = json!({"crop": "Millet", "notes": {"organic": true}, "tags": ["a", "b"]});

    Mock::given(method("POST"))
        .and(path("/api/listings"))
        .and(body_json(data.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "id": 12})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.create_listing(&Session::new(), &data).await.unwrap();
    assert_eq!(response.body["id"], 12);
}

#[tokio::test]
async fn test_unauthorized_create_returns_error_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/listings"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .create_listing(&Session::new(), &json!({"crop": "Rice"}))
        .await
        .unwrap();
    assert!(response.is_client_error());
    assert_eq!(response.body, json!({"error": "Unauthorized"}));
}

#[tokio::test]
async fn test_update_listing_puts_to_id_path() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/listings/42"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"status": "Accepted"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let ack = client
        .update_listing_typed(&Session::new(), 42, &ListingUpdate::status(ListingStatus::Accepted))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert!(ack.success);
}
