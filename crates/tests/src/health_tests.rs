use axum::http::StatusCode;

use crate::common::*;

#[tokio::test]
async fn health_reports_configured_catalog() {
    let catalog = spawn_catalog(Canned::Hits(serde_json::json!([]))).await;
    let app = test_app(&catalog);

    let (status, resp) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "ok");
    assert_eq!(resp["catalog"], catalog.base_url.as_str());
    assert!(resp["version"].is_string());
}

#[tokio::test]
async fn health_does_not_probe_the_catalog() {
    let catalog = spawn_catalog(Canned::Hits(serde_json::json!([]))).await;
    let app = test_app(&catalog);

    let _ = get_json(&app, "/health").await;
    assert!(catalog.queries().is_empty());
}
