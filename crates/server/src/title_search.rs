use serde::Deserialize;
use shared_types::{AppError, SearchConfig, TitleRecord, KIND_FALLBACK, YEAR_FALLBACK};
use std::time::Duration;

use crate::error_convert::ReqwestErrorExt;

/// Title used when the catalog returns a show without a name.
const UNKNOWN_TITLE: &str = "Unknown";

/// HTTP client for the TVMaze show catalog.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Clone, Debug)]
pub struct TitleCatalog {
    http: reqwest::Client,
    base_url: String,
}

impl TitleCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| e.into_app_error())?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self, AppError> {
        Self::new(
            config.upstream_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query the catalog and map every hit to a `TitleRecord`.
    ///
    /// `term` is sent trimmed. Any transport, status or decoding failure is
    /// reported as an upstream error.
    #[tracing::instrument(skip(self), fields(upstream = %self.base_url))]
    pub async fn search(&self, term: &str) -> Result<Vec<TitleRecord>, AppError> {
        let url = format!(
            "{}/search/shows?q={}",
            self.base_url,
            urlencoding::encode(term.trim())
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(format!(
                "Title catalog answered with status {status}"
            )));
        }

        let hits: Vec<ShowHit> = response.json().await.map_err(|e| e.into_app_error())?;
        let records: Vec<TitleRecord> = hits.into_iter().map(to_record).collect();

        tracing::debug!(hits = records.len(), "Title catalog lookup finished");
        Ok(records)
    }
}

// -- TVMaze payload --

#[derive(Debug, Deserialize)]
struct ShowHit {
    #[serde(default)]
    show: Option<Show>,
}

#[derive(Debug, Default, Deserialize)]
struct Show {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    premiered: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    image: Option<ShowImage>,
}

#[derive(Debug, Deserialize)]
struct ShowImage {
    #[serde(default)]
    medium: Option<String>,
}

fn to_record(hit: ShowHit) -> TitleRecord {
    let show = hit.show.unwrap_or_default();

    let year = show
        .premiered
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| p.chars().take(4).collect::<String>())
        .unwrap_or_else(|| YEAR_FALLBACK.to_string());

    TitleRecord {
        title: show.name.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        year: Some(year),
        kind: Some(show.kind.unwrap_or_else(|| KIND_FALLBACK.to_string())),
        external_id: show.id.map(|id| id.to_string()).unwrap_or_default(),
        poster: show.image.and_then(|i| i.medium).unwrap_or_default(),
    }
}
