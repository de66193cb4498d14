//! The two dependent actions guarded by the search-select gate.
//!
//! Each flow runs in two steps so no borrow of the controller is held across
//! the network call: `prepare_*` consults the gate and validates the request,
//! then the request is sent; only a successful send resets the session.

use shared_types::{
    AddMovieRequest, AppError, MessageResponse, RecommendMovieRequest, WatchStatus,
};
use std::future::Future;
use validator::Validate;

use crate::search_select::{DeferredHandle, SearchSelectController, SessionId};

/// REST calls the submit flows rely on.
pub trait WatchlistBackend {
    fn add_movie(
        &self,
        request: &AddMovieRequest,
    ) -> impl Future<Output = Result<MessageResponse, AppError>>;

    fn recommend_movie(
        &self,
        request: &RecommendMovieRequest,
    ) -> impl Future<Output = Result<MessageResponse, AppError>>;
}

/// reqwest client for the watchlist backend.
#[derive(Clone, Debug)]
pub struct WatchlistApi {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl WatchlistApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn post<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<MessageResponse, AppError> {
        let mut request = self.http.post(format!("{}{path}", self.base_url)).json(body);
        if let Some(token) = &self.token {
            request = request.header("Authorization", token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Watchlist backend unreachable: {e}")))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::upstream(format!("Watchlist backend reply unreadable: {e}")))?;

        if !status.is_success() {
            return Err(AppError::upstream(AppError::friendly_message(&text)));
        }
        Ok(decode_reply(path, &text))
    }
}

/// Read a 2xx reply. The write already happened, so an unreadable body is
/// logged and reported as a plain success.
fn decode_reply(path: &str, text: &str) -> MessageResponse {
    serde_json::from_str(text).unwrap_or_else(|e| {
        tracing::warn!(path, error = %e, "Watchlist backend sent an unreadable success reply");
        MessageResponse {
            message: "Done".to_string(),
        }
    })
}

impl WatchlistBackend for WatchlistApi {
    async fn add_movie(&self, request: &AddMovieRequest) -> Result<MessageResponse, AppError> {
        self.post("/movies", request).await
    }

    async fn recommend_movie(
        &self,
        request: &RecommendMovieRequest,
    ) -> Result<MessageResponse, AppError> {
        self.post("/friends/recommend", request).await
    }
}

/// Gate and validate an "add to watchlist" submit from the dashboard surface.
pub fn prepare_add<H: DeferredHandle>(
    controller: &SearchSelectController<H>,
    title_input: &str,
    status: WatchStatus,
) -> Result<AddMovieRequest, AppError> {
    let candidate = controller.validate_for_submit(SessionId::Dashboard, title_input)?;
    let request = AddMovieRequest {
        title: candidate.title,
        status,
    };
    request.validate()?;
    Ok(request)
}

/// Gate and validate a "recommend to a friend" submit.
pub fn prepare_recommend<H: DeferredHandle>(
    controller: &SearchSelectController<H>,
    friend_username: &str,
    title_input: &str,
) -> Result<RecommendMovieRequest, AppError> {
    let candidate = controller.validate_for_submit(SessionId::Recommend, title_input)?;
    let request = RecommendMovieRequest {
        friend_username: friend_username.trim().to_string(),
        movie_title: candidate.title,
    };
    request.validate()?;
    Ok(request)
}

/// Text to show for a refused or failed submit: the first field error (by
/// field name) when there is one, the overall message otherwise.
pub fn user_message(err: &AppError) -> String {
    let mut fields: Vec<_> = err.field_errors.iter().collect();
    fields.sort();
    fields
        .first()
        .map(|(_, msg)| msg.to_string())
        .unwrap_or_else(|| err.message.clone())
}

/// Send a prepared add request. The caller resets the dashboard session on `Ok`.
#[tracing::instrument(skip(backend))]
pub async fn add_to_watchlist<B: WatchlistBackend>(
    backend: &B,
    request: AddMovieRequest,
) -> Result<MessageResponse, AppError> {
    backend.add_movie(&request).await
}

/// Send a prepared recommendation. The caller resets the recommend session on `Ok`.
#[tracing::instrument(skip(backend))]
pub async fn recommend_to_friend<B: WatchlistBackend>(
    backend: &B,
    request: RecommendMovieRequest,
) -> Result<MessageResponse, AppError> {
    backend.recommend_movie(&request).await
}
