#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use conference_api::config::ServerConfig;
use conference_api::router::{build_app_router, App};
use conference_api::state::AppState;
use conference_db::MemoryStore;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        database_max_connections: 1,
    }
}

/// Build the full application router over a freshly seeded in-memory store.
///
/// The returned app is cheap to clone; clones share the same store, so
/// a test can issue several requests against the same data.
pub fn build_test_app() -> App {
    let config = test_config();
    let state = AppState {
        store: Arc::new(MemoryStore::seeded()),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: &App, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &App, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &App, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &App, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &App, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: &App, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a raw body with a JSON content type.
pub async fn post_raw(app: &App, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn location_body(name: &str, state: &str) -> Value {
    serde_json::json!({
        "name": name,
        "city": "Chicago",
        "room_count": 12,
        "state": state,
    })
}

pub fn conference_body(name: &str, location: i64) -> Value {
    serde_json::json!({
        "name": name,
        "description": "Two days of talks",
        "max_presentations": 20,
        "max_attendees": 300,
        "starts": "2026-05-01T09:00:00Z",
        "ends": "2026-05-02T17:00:00Z",
        "location": location,
    })
}

/// Create a location in Illinois and return its id.
pub async fn create_location(app: &App, name: &str) -> i64 {
    let response = post_json(app, "/api/v1/locations", location_body(name, "IL")).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a location plus a conference held there; returns the conference id.
pub async fn create_conference(app: &App, name: &str) -> i64 {
    let location = create_location(app, "McCormick Place").await;
    let response = post_json(app, "/api/v1/conferences", conference_body(name, location)).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}
