use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

fn girls_and_dune() -> serde_json::Value {
    json!([
        {
            "score": 0.91,
            "show": {
                "id": 139,
                "name": "Girls",
                "type": "Scripted",
                "premiered": "2012-04-15",
                "image": {"medium": "https://static.tvmaze.com/girls.jpg"}
            }
        },
        {
            "score": 0.42,
            "show": {"id": 8, "name": "Dune", "type": null, "premiered": null, "image": null}
        }
    ])
}

// ── Positive lookups ────────────────────────────────────────────────

#[tokio::test]
async fn hits_are_mapped_to_the_search_envelope() {
    let catalog = spawn_catalog(Canned::Hits(girls_and_dune())).await;
    let app = test_app(&catalog);

    let (status, resp) = get_json(&app, "/api/search-movies?s=girls").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        resp,
        json!({
            "Response": "True",
            "Search": [
                {
                    "Title": "Girls",
                    "Year": "2012",
                    "Type": "Scripted",
                    "imdbID": "139",
                    "Poster": "https://static.tvmaze.com/girls.jpg"
                },
                {
                    "Title": "Dune",
                    "Year": "N/A",
                    "Type": "show",
                    "imdbID": "8",
                    "Poster": ""
                }
            ]
        })
    );
}

#[tokio::test]
async fn no_hits_is_still_a_positive_answer() {
    let catalog = spawn_catalog(Canned::Hits(json!([]))).await;
    let app = test_app(&catalog);

    let (status, resp) = get_json(&app, "/api/search-movies?s=zzzzzz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["Response"], "True");
    assert_eq!(resp["Search"], json!([]));
}

#[tokio::test]
async fn term_is_trimmed_and_forwarded_verbatim() {
    let catalog = spawn_catalog(Canned::Hits(json!([]))).await;
    let app = test_app(&catalog);

    let (status, _) = get_json(&app, "/api/search-movies?s=%20the%20office%20%26%20co%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(catalog.queries(), vec!["the office & co".to_string()]);
}

#[tokio::test]
async fn unicode_terms_survive_the_round_trip() {
    let catalog = spawn_catalog(Canned::Hits(json!([]))).await;
    let app = test_app(&catalog);

    let (status, _) = get_json(&app, "/api/search-movies?s=Am%C3%A9lie").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(catalog.queries(), vec!["Amélie".to_string()]);
}

// ── Missing term ────────────────────────────────────────────────────

#[tokio::test]
async fn blank_term_never_reaches_the_catalog() {
    let catalog = spawn_catalog(Canned::Hits(girls_and_dune())).await;
    let app = test_app(&catalog);

    let (status, resp) = get_json(&app, "/api/search-movies?s=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp,
        json!({"Response": "False", "Error": "Search term required"})
    );
    assert!(catalog.queries().is_empty());
}
