//! Handler tests for Orders domain

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use database::mongodb::DocumentStore;
use domain_orders::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use test_utils::{MemoryDocumentStore, TestDataBuilder, UnreachableDocumentStore, assertions};
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app_with(store: Arc<dyn DocumentStore>) -> Router {
    handlers::router(OrderService::new(StoreOrderRepository::new(store)))
}

fn post_order(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_order(builder: &TestDataBuilder) -> Value {
    json!({
        "customer_name": builder.name("customer", "main"),
        "customer_email": builder.email("buyer"),
        "shipping_address": "1 Market Street",
        "items": [
            {"product_id": "65f0c1a2b3c4d5e6f7a8b9c0", "title": "Smart Watch", "price": 199.0, "quantity": 1},
            {"product_id": "65f0c1a2b3c4d5e6f7a8b9c1", "title": "Backpack", "price": 39.95, "quantity": 2}
        ],
        "total": 278.9
    })
}

#[tokio::test]
async fn test_create_order_returns_id_and_stores_record() {
    let store = Arc::new(MemoryDocumentStore::new());
    let builder = TestDataBuilder::from_test_name("create_order");

    let response = app_with(store.clone())
        .oneshot(post_order(valid_order(&builder)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let created: OrderCreated = json_body(response.into_body()).await;
    assertions::assert_object_id(&created.id, "order id");

    let stored = store.documents(ORDER_COLLECTION);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].get_str("status").unwrap(), "pending");
    assert_eq!(
        stored[0].get_str("customer_email").unwrap(),
        builder.email("buyer")
    );
    assert_eq!(stored[0].get_array("items").unwrap().len(), 2);
}

#[tokio::test]
async fn test_order_without_items_is_rejected() {
    let store = Arc::new(MemoryDocumentStore::new());
    let builder = TestDataBuilder::from_test_name("empty_order");
    let mut body = valid_order(&builder);
    body["items"] = json!([]);

    let response = app_with(store.clone()).oneshot(post_order(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert!(body["details"]["items"].is_array());
    assert_eq!(store.count(ORDER_COLLECTION), 0);
}

#[tokio::test]
async fn test_invalid_item_reports_its_path() {
    let store = Arc::new(MemoryDocumentStore::new());
    let builder = TestDataBuilder::from_test_name("zero_quantity");
    let mut body = valid_order(&builder);
    body["items"][1]["quantity"] = json!(0);

    let response = app_with(store).oneshot(post_order(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert!(body["details"]["items[1].quantity"].is_array());
}

#[tokio::test]
async fn test_unknown_status_is_422() {
    let store = Arc::new(MemoryDocumentStore::new());
    let builder = TestDataBuilder::from_test_name("bad_status");
    let mut body = valid_order(&builder);
    body["status"] = json!("lost");

    let response = app_with(store).oneshot(post_order(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unreachable_store_returns_500() {
    let builder = TestDataBuilder::from_test_name("order_store_down");

    let response = app_with(Arc::new(UnreachableDocumentStore::new()))
        .oneshot(post_order(valid_order(&builder)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], test_utils::UNREACHABLE_MESSAGE);
}
