// Helpers for driving the HTTP router in tests.

use crate::modules::items::adapters::outbound::in_memory_item_store::InMemoryItemStore;
use crate::shell::state::AppState;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub fn make_test_state() -> AppState {
    AppState::seeded()
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryItemStore::seeded();
    store.toggle_offline();
    AppState::new(Arc::new(store))
}

/// Send one request through a clone of `app` and collect the reply.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri).body(body.into()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}
