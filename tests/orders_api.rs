//! Router-level tests for the order endpoints.
//!
//! Each test builds the full application router over a fresh in-memory
//! store and drives it through tower's `oneshot`, so routing, extraction,
//! validation and persistence are all exercised together.

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use allmart_server::DbService;
use allmart_server::core::server::build_app;
use allmart_server::core::{Config, ServerState};

async fn test_app() -> Router {
    let db = DbService::new_in_memory()
        .await
        .expect("in-memory database");
    let config = Config {
        work_dir: "/tmp/allmart-test".to_string(),
        http_port: 0,
        environment: "development".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
    };
    build_app().with_state(ServerState::with_db(config, db.db))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn plain_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn order_payload(phone: &str, total: f64) -> Value {
    json!({
        "orderNumber": "AM-1001",
        "customerInfo": { "name": "Nadia", "phone": phone },
        "items": [{ "productId": "products:p1", "qty": 2 }],
        "grandTotal": total,
    })
}

async fn create_order(app: &Router, phone: &str, total: f64) -> String {
    let (status, body) = send(
        app,
        json_request(Method::POST, "/orders", order_payload(phone, total)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["orderId"].as_str().expect("orderId").to_string()
}

#[tokio::test]
async fn create_order_persists_a_pending_order() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/orders", order_payload("0170000001", 99.5)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Order created successfully");
    assert_eq!(body["orderNumber"], "AM-1001");
    let order_id = body["orderId"].as_str().expect("orderId");
    assert!(order_id.starts_with("orders:"));

    let (status, order) = send(&app, plain_request(Method::GET, &format!("/orders/{order_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["status"], "pending");
    assert_eq!(order["grandTotal"], 99.5);
    assert_eq!(order["createdAt"], order["updatedAt"]);
    assert!(order.get("shippedAt").is_none());
}

#[tokio::test]
async fn create_order_rejects_missing_required_fields() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/orders", json!({ "grandTotal": 10.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: customerInfo and items are required"
    );

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/orders",
            json!({
                "customerInfo": { "phone": "0170000001" },
                "items": [{ "qty": 1 }],
                "grandTotal": 0,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid grand total");
}

#[tokio::test]
async fn shipped_transition_stamps_timestamp_and_tracking() {
    let app = test_app().await;
    let order_id = create_order(&app, "0170000001", 50.0).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/orders/{order_id}"),
            json!({ "status": "shipped", "trackingNumber": "TRK-42" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order status updated to shipped successfully");
    let result = &body["result"];
    assert_eq!(result["status"], "shipped");
    assert_eq!(result["trackingNumber"], "TRK-42");
    assert!(result["shippedAt"].is_i64());
    assert!(result.get("deliveredAt").is_none());
}

#[tokio::test]
async fn invalid_status_is_rejected_and_order_unchanged() {
    let app = test_app().await;
    let order_id = create_order(&app, "0170000001", 50.0).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/orders/{order_id}"),
            json!({ "status": "bogus" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid status. Must be one of: pending, confirmed, shipped, delivered, cancelled, returned"
    );

    let (_, order) = send(&app, plain_request(Method::GET, &format!("/orders/{order_id}"))).await;
    assert_eq!(order["status"], "pending");
}

#[tokio::test]
async fn malformed_order_id_is_rejected_before_lookup() {
    let app = test_app().await;

    for request in [
        plain_request(Method::GET, "/orders/not-an-id"),
        json_request(
            Method::PATCH,
            "/orders/not-an-id",
            json!({ "status": "shipped" }),
        ),
        plain_request(Method::DELETE, "/orders/not-an-id"),
    ] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid orders ID");
    }
}

#[tokio::test]
async fn delete_of_absent_order_is_not_found() {
    let app = test_app().await;

    let (status, _) = send(&app, plain_request(Method::DELETE, "/orders/abc123")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn customer_scoped_listing_filters_by_phone() {
    let app = test_app().await;
    create_order(&app, "0170000001", 10.0).await;
    create_order(&app, "0170000002", 20.0).await;
    create_order(&app, "0170000001", 30.0).await;

    let (status, body) = send(
        &app,
        plain_request(Method::GET, "/orders/customer/0170000001"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().expect("order list");
    assert_eq!(orders.len(), 2);
    for order in orders {
        assert_eq!(order["customerInfo"]["phone"], "0170000001");
    }
}

#[tokio::test]
async fn stats_reflect_status_counts_and_delivered_revenue() {
    let app = test_app().await;
    create_order(&app, "0170000001", 40.0).await;
    let delivered = create_order(&app, "0170000002", 120.5).await;

    let (status, _) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/orders/{delivered}"),
            json!({ "status": "delivered" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, stats) = send(&app, plain_request(Method::GET, "/orders-stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalOrders"], 2);
    assert_eq!(stats["pendingOrders"], 1);
    assert_eq!(stats["deliveredOrders"], 1);
    assert_eq!(stats["shippedOrders"], 0);
    assert_eq!(stats["totalRevenue"], 120.5);
}

#[tokio::test]
async fn logout_expires_the_token_cookie() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(plain_request(Method::GET, "/logout"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie")
        .to_str()
        .expect("cookie string");
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("Max-Age=0"));
    // development config keeps the cookie same-site
    assert!(cookie.contains("SameSite=Strict"));
}

#[tokio::test]
async fn banner_upload_validates_required_fields() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/banners", json!({ "url": "https://a/b.png" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid banner data");

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/banners",
            json!({
                "url": "https://a/b.png",
                "heading": "Summer sale",
                "description": "Up to 40% off",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Banner uploaded successfully");
    assert_eq!(body["result"]["heading"], "Summer sale");
    assert!(body["result"]["timestamp"].is_i64());
}
