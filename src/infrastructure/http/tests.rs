//! Router 级别测试（内存 SQLite）

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::{build_router, AppState};
use crate::infrastructure::persistence::sqlite::{
    test_pool, SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository,
};

async fn app() -> Router {
    let pool = test_pool().await;
    let state = AppState::new(
        Arc::new(SqliteCustomerRepository::new(pool.clone())),
        Arc::new(SqliteProductRepository::new(pool.clone())),
        Arc::new(SqliteOrderRepository::new(pool)),
    );
    build_router(Arc::new(state))
}

struct TestResponse {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        location,
        body,
    }
}

fn customer_body(email: &str) -> Value {
    json!({
        "name": "John Doe",
        "email": email,
        "phone": "123456789",
        "birthDate": "1990-01-01"
    })
}

fn product_body(slug: &str, price: f64) -> Value {
    json!({
        "title": format!("Product {}", slug),
        "description": "desc",
        "slug": slug,
        "price": price
    })
}

#[tokio::test]
async fn test_ping() {
    let app = app().await;
    let res = send(&app, Method::GET, "/v1/ping", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
}

#[tokio::test]
async fn test_customer_lifecycle() {
    let app = app().await;

    let created = send(
        &app,
        Method::POST,
        "/v1/customers",
        Some(customer_body("john@example.com")),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_str().unwrap().to_string();
    assert_eq!(created.location.as_deref(), Some(format!("/v1/customers/{}", id).as_str()));
    assert_eq!(created.body["birthDate"], "1990-01-01");

    let fetched = send(&app, Method::GET, &format!("/v1/customers/{}", id), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    let listed = send(&app, Method::GET, "/v1/customers", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["customers"].as_array().unwrap().len(), 1);

    let mut update = customer_body("john@example.com");
    update["name"] = json!("Johnny");
    let updated = send(&app, Method::PUT, &format!("/v1/customers/{}", id), Some(update)).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["name"], "Johnny");

    let deleted = send(&app, Method::DELETE, &format!("/v1/customers/{}", id), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = send(&app, Method::DELETE, &format!("/v1/customers/{}", id), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body, json!({ "error": "Customer not found" }));
}

#[tokio::test]
async fn test_customer_validation_and_conflict() {
    let app = app().await;

    let mut missing = customer_body("john@example.com");
    missing["phone"] = Value::Null;
    let res = send(&app, Method::POST, "/v1/customers", Some(missing)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, json!({ "error": "Phone is required" }));

    send(&app, Method::POST, "/v1/customers", Some(customer_body("john@example.com"))).await;
    let res = send(&app, Method::POST, "/v1/customers", Some(customer_body("john@example.com"))).await;
    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.body, json!({ "error": "Email already in use" }));
}

#[tokio::test]
async fn test_bad_input_uses_error_body() {
    let app = app().await;

    let res = send(&app, Method::GET, "/v1/customers/not-a-uuid", None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["error"].is_string());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_missing_resources_are_not_found() {
    let app = app().await;
    let id = uuid::Uuid::new_v4();

    let res = send(&app, Method::GET, &format!("/v1/products/{}", id), None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({ "error": "Product not found" }));

    let res = send(&app, Method::GET, &format!("/v1/orders/{}", id), None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({ "error": "Order not found" }));

    let res = send(&app, Method::DELETE, &format!("/v1/products/{}", id), None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_price_rules() {
    let app = app().await;

    let res = send(&app, Method::POST, "/v1/products", Some(product_body("free", 0.0))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, json!({ "error": "Price must be greater than zero" }));

    let res = send(&app, Method::POST, "/v1/products", Some(product_body("spray", 19.5))).await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["price"], json!(19.5));

    let listed = send(&app, Method::GET, "/v1/products", None).await;
    assert_eq!(listed.body["products"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_order_flow() {
    let app = app().await;

    let customer = send(&app, Method::POST, "/v1/customers", Some(customer_body("john@example.com"))).await;
    let p1 = send(&app, Method::POST, "/v1/products", Some(product_body("p1", 10.0))).await;
    let p2 = send(&app, Method::POST, "/v1/products", Some(product_body("p2", 20.0))).await;
    let customer_id = customer.body["id"].clone();
    let p1_id = p1.body["id"].clone();
    let p2_id = p2.body["id"].clone();

    let created = send(
        &app,
        Method::POST,
        "/v1/orders",
        Some(json!({
            "customerId": customer_id,
            "lines": [
                { "productId": p1_id, "quantity": 2 },
                { "productId": p2_id, "quantity": 1 }
            ]
        })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["totalAmount"], json!(40.0));
    assert_eq!(created.body["customerName"], "John Doe");
    assert_eq!(created.body["lines"][0]["total"], json!(20.0));
    assert_eq!(created.body["lines"][1]["productTitle"], "Product p2");

    let id = created.body["id"].as_str().unwrap();
    assert_eq!(created.location.as_deref(), Some(format!("/v1/orders/{}", id).as_str()));

    let fetched = send(&app, Method::GET, &format!("/v1/orders/{}", id), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["totalAmount"], json!(40.0));
    assert_eq!(fetched.body["lines"].as_array().unwrap().len(), 2);

    // 被订单引用的客户不能删除
    let res = send(
        &app,
        Method::DELETE,
        &format!("/v1/customers/{}", customer_id.as_str().unwrap()),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_order_rejections() {
    let app = app().await;
    let customer = send(&app, Method::POST, "/v1/customers", Some(customer_body("john@example.com"))).await;
    let p1 = send(&app, Method::POST, "/v1/products", Some(product_body("p1", 10.0))).await;

    let res = send(
        &app,
        Method::POST,
        "/v1/orders",
        Some(json!({ "customerId": customer.body["id"], "lines": [] })),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, json!({ "error": "Order must have at least one line" }));

    let res = send(
        &app,
        Method::POST,
        "/v1/orders",
        Some(json!({
            "customerId": customer.body["id"],
            "lines": [{ "productId": p1.body["id"], "quantity": 0 }]
        })),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, json!({ "error": "Quantity must be greater than zero" }));

    let res = send(
        &app,
        Method::POST,
        "/v1/orders",
        Some(json!({
            "customerId": customer.body["id"],
            "lines": [{ "productId": uuid::Uuid::new_v4(), "quantity": 1 }]
        })),
    )
    .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, json!({ "error": "One or more products not found" }));
}

#[tokio::test]
async fn test_order_total_overflow_is_bad_request() {
    let app = app().await;
    let customer = send(&app, Method::POST, "/v1/customers", Some(customer_body("john@example.com"))).await;
    let product = send(&app, Method::POST, "/v1/products", Some(product_body("huge", 5e28))).await;
    assert_eq!(product.status, StatusCode::CREATED);

    let res = send(
        &app,
        Method::POST,
        "/v1/orders",
        Some(json!({
            "customerId": customer.body["id"],
            "lines": [{ "productId": product.body["id"], "quantity": 2 }]
        })),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, json!({ "error": "Order total is too large" }));
}
