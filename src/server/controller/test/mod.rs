use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router, state::AppState};


/// Builds the full application over a fresh in-memory database.
///
/// The returned context shares the connection pool with the router, so tests
/// can inspect the store directly.
async fn test_app() -> (TestContext, Router) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    (test, router::app(AppState::new(db)))
}

/// Sends one request and returns the status with the body as JSON.
///
/// Plain text bodies come back as a JSON string.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

fn goblin() -> Value {
    json!({ "name": "Goblin", "health": 7 })
}

fn d20() -> Value {
    json!({ "name": "Attack", "number": 1, "type": 20, "bonus": 2 })
}
