use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use asset_tracker::{build_router, service::AssetService, store::MemoryAssetStore, AppState};

/// Full router over a fresh in-memory store, with the same middleware as
/// production and the seed route off.
pub fn build_test_app() -> Router {
    build_app(false)
}

/// Same as [`build_test_app`] with `POST /api/seed` mounted.
pub fn build_test_app_with_seed() -> Router {
    build_app(true)
}

fn build_app(enable_seed: bool) -> Router {
    let service = AssetService::new(Arc::new(MemoryAssetStore::new()));
    build_router(AppState { service }, enable_seed)
}

/// Sends one request and returns status plus raw body bytes.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// Like [`send`], but parses the body as JSON.
pub async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|b| b.to_string());
    let (status, bytes) = send(app, method, uri, raw.as_deref()).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn asset_body(name: &str, asset_type: &str, serial: &str, status: &str, assigned_to: Option<&str>) -> Value {
    json!({
        "name": name,
        "type": asset_type,
        "serialNumber": serial,
        "purchaseDate": "2023-01-15",
        "status": status,
        "assignedTo": assigned_to,
    })
}

/// Creates an asset and returns its id, asserting the request succeeded.
pub async fn create(app: &Router, body: Value) -> i64 {
    let (status, json) = send_json(app, Method::POST, "/api/assets", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json["id"].as_i64().unwrap()
}
