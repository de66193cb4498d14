use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use shared_types::{TitleSearchParams, TitleSearchResponse, SEARCH_FAILED_MESSAGE};

use crate::state::AppState;

/// Message returned when the `s` parameter is missing or blank.
pub const TERM_REQUIRED_MESSAGE: &str = "Search term required";

/// GET /api/search-movies?s=...
///
/// Proxies a free-text lookup to the title catalog. The body always uses the
/// `Response`/`Search`/`Error` envelope, including on failure, so clients can
/// tell "nothing matched" apart from "could not search" by the flag alone.
#[utoipa::path(
    get,
    path = "/api/search-movies",
    params(TitleSearchParams),
    responses(
        (status = 200, description = "Lookup finished (possibly with no hits)", body = TitleSearchResponse),
        (status = 400, description = "Search term missing", body = TitleSearchResponse),
        (status = 500, description = "Title catalog unavailable", body = TitleSearchResponse)
    ),
    tag = "search"
)]
#[tracing::instrument(skip(state))]
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<TitleSearchParams>,
) -> (StatusCode, Json<TitleSearchResponse>) {
    let term = params.s.trim();
    if term.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(TitleSearchResponse::failed(TERM_REQUIRED_MESSAGE)),
        );
    }

    match state.catalog.search(term).await {
        Ok(records) => (StatusCode::OK, Json(TitleSearchResponse::found(records))),
        Err(e) => {
            tracing::error!(error = %e, term = term, "Title catalog lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TitleSearchResponse::failed(SEARCH_FAILED_MESSAGE)),
            )
        }
    }
}
