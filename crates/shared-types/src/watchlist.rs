use serde::{Deserialize, Serialize};
use std::fmt;

/// The three stages of a personal watchlist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum WatchStatus {
    #[default]
    #[serde(rename = "To Watch")]
    ToWatch,
    #[serde(rename = "Watching")]
    Watching,
    #[serde(rename = "Completed")]
    Completed,
}

pub const ALL_WATCH_STATUSES: &[WatchStatus] = &[
    WatchStatus::ToWatch,
    WatchStatus::Watching,
    WatchStatus::Completed,
];

impl WatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::ToWatch => "To Watch",
            WatchStatus::Watching => "Watching",
            WatchStatus::Completed => "Completed",
        }
    }

    /// Parse a display label; unknown labels fall back to `To Watch`.
    pub fn from_label(label: &str) -> Self {
        ALL_WATCH_STATUSES
            .iter()
            .copied()
            .find(|s| s.as_str() == label)
            .unwrap_or_default()
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /movies`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct AddMovieRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "crate::validation::movie_title_rule"))
    )]
    pub title: String,
    #[serde(default)]
    pub status: WatchStatus,
}

/// Body of `POST /friends/recommend`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RecommendMovieRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "crate::validation::username_rule"))
    )]
    pub friend_username: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "crate::validation::movie_title_rule"))
    )]
    pub movie_title: String,
}

/// Generic `{ "message": ... }` acknowledgement from the watchlist backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}
