pub mod title_search;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new().route("/api/search-movies", get(title_search::search_movies))
}
