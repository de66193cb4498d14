use axum::Router;
use shared_types::{AppError, AppErrorKind, TitleRecord, TitleSearchResponse};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;
use crate::state::AppState;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::title_search::search_movies,
        health::health_check,
    ),
    components(schemas(
        TitleSearchResponse,
        TitleRecord,
        AppError,
        AppErrorKind,
        health::HealthResponse,
    )),
    tags(
        (name = "search", description = "Title catalog lookups"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Reelwatch API",
        description = "Title search proxy for the Reelwatch watchlist client",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
