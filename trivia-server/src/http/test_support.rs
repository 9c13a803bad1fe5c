//! Router harness shared by the route tests

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use super::server::{build_router, AppState};
use crate::db::MemoryStore;
use crate::models::NewQuestion;
use crate::quiz::SeededPicker;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// Empty store: no categories, no questions.
    pub fn empty() -> Self {
        Self::from_store(MemoryStore::new())
    }

    /// Six default categories and `questions` questions with ids 1..=n,
    /// spread over categories 1..=6 in turn.
    pub fn seeded(questions: usize) -> Self {
        let store = MemoryStore::with_default_categories();
        let app = Self::from_store(store);
        for i in 1..=questions {
            let category = ((i - 1) % 6 + 1) as i32;
            app.insert(&format!("Question number {i}?"), category);
        }
        app
    }

    fn from_store(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        let state = AppState::new(store.clone()).with_picker(Arc::new(SeededPicker::new(7)));
        Self {
            router: build_router(state),
            store,
        }
    }

    /// Insert directly into the store, bypassing HTTP.
    pub fn insert(&self, text: &str, category: i32) -> i32 {
        let new = NewQuestion::new(Some(text.into()), Some("answer".into()), Some(category), None)
            .unwrap();
        self.store.add_question(new).id
    }
}

/// Send a request with an optional JSON body and decode the JSON reply.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    }
    .unwrap();

    send_request(router, request).await
}

/// Send a raw JSON string, for malformed-body cases.
pub async fn send_raw(router: &Router, method: &str, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_owned()))
        .unwrap();

    send_request(router, request).await
}

async fn send_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
