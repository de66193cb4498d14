use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use server::state::AppState;
use server::title_search::TitleCatalog;
use std::time::Duration;
use tower::ServiceExt;

/// Address nothing listens on; lookups against it fail fast with
/// "connection refused".
pub const DEAD_UPSTREAM: &str = "http://127.0.0.1:9";

/// Build the full API router (REST + health + docs) against `upstream`.
pub fn test_app(upstream: &str) -> Router {
    let catalog = TitleCatalog::new(upstream, Duration::from_secs(2))
        .expect("Failed to build title catalog client");
    server::openapi::api_router(AppState::new(catalog))
}

/// Helper to make a GET request and return status + body text.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
