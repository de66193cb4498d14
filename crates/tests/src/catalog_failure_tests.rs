use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;

use crate::common::*;

fn search_error() -> serde_json::Value {
    json!({"Response": "False", "Error": "Error searching movies"})
}

#[tokio::test]
async fn catalog_server_error_becomes_search_error() {
    let catalog = spawn_catalog(Canned::Status(StatusCode::SERVICE_UNAVAILABLE)).await;
    let app = test_app(&catalog);

    let (status, resp) = get_json(&app, "/api/search-movies?s=girls").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp, search_error());
}

#[tokio::test]
async fn catalog_not_found_becomes_search_error() {
    let catalog = spawn_catalog(Canned::Status(StatusCode::NOT_FOUND)).await;
    let app = test_app(&catalog);

    let (status, resp) = get_json(&app, "/api/search-movies?s=girls").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp, search_error());
}

#[tokio::test]
async fn unreadable_payload_becomes_search_error() {
    let catalog = spawn_catalog(Canned::Garbage).await;
    let app = test_app(&catalog);

    let (status, resp) = get_json(&app, "/api/search-movies?s=girls").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp, search_error());
    assert_eq!(catalog.queries().len(), 1);
}

#[tokio::test]
async fn slow_catalog_times_out() {
    let catalog = spawn_catalog(Canned::Slow(Duration::from_secs(2))).await;
    let app = test_app_with_timeout(&catalog, Duration::from_millis(200));

    let (status, resp) = get_json(&app, "/api/search-movies?s=girls").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp, search_error());
}
