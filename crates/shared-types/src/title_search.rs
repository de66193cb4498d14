use serde::{Deserialize, Serialize};

/// Fallback shown when a candidate has no release year.
pub const YEAR_FALLBACK: &str = "N/A";

/// Fallback shown when a candidate has no kind.
pub const KIND_FALLBACK: &str = "show";

/// Inline message rendered when a lookup comes back empty or negative.
pub const NO_RESULTS_MESSAGE: &str = "No movies found";

/// Inline message rendered when a lookup fails in transport or decoding.
pub const SEARCH_FAILED_MESSAGE: &str = "Error searching movies";

/// Value of the `Response` flag on a positive payload.
pub const RESPONSE_TRUE: &str = "True";

/// Value of the `Response` flag on an empty or failed payload.
pub const RESPONSE_FALSE: &str = "False";

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// One entry of a title-search result set.
///
/// Candidates carry no identifier: the title string is the only identity the
/// selection logic knows about, so two candidates with equal titles cannot be
/// told apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Candidate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Candidate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            kind: None,
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Year for display, `N/A` when missing or blank.
    pub fn display_year(&self) -> &str {
        non_blank(self.year.as_deref()).unwrap_or(YEAR_FALLBACK)
    }

    /// Kind for display, `show` when missing or blank.
    pub fn display_kind(&self) -> &str {
        non_blank(self.kind.as_deref()).unwrap_or(KIND_FALLBACK)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Wire payload of GET /api/search-movies
// ---------------------------------------------------------------------------

/// Query parameters for the title-search proxy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct TitleSearchParams {
    /// Free-text search term.
    #[serde(default)]
    pub s: String,
}

/// A single catalog record as returned by the proxy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TitleRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub external_id: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl From<TitleRecord> for Candidate {
    fn from(r: TitleRecord) -> Self {
        Self {
            title: r.title,
            year: r.year,
            kind: r.kind,
        }
    }
}

/// Envelope returned by the title-search proxy.
///
/// `Response` is the string `"True"` on success; anything else (usually
/// `"False"` alongside `Error`) is a negative answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TitleSearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default, skip_serializing_if = "Option::is_none")]
    pub search: Option<Vec<TitleRecord>>,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TitleSearchResponse {
    pub fn found(records: Vec<TitleRecord>) -> Self {
        Self {
            response: RESPONSE_TRUE.to_string(),
            search: Some(records),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            response: RESPONSE_FALSE.to_string(),
            search: None,
            error: Some(message.into()),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.response == RESPONSE_TRUE
    }

    /// Candidates carried by a positive payload; empty for negative ones.
    pub fn into_candidates(self) -> Vec<Candidate> {
        if !self.is_positive() {
            return Vec::new();
        }
        self.search
            .unwrap_or_default()
            .into_iter()
            .map(Candidate::from)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Render state of a result surface
// ---------------------------------------------------------------------------

/// Content of a visible result surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SurfaceBody {
    Results { items: Vec<Candidate> },
    Message { text: String },
}

/// What the view layer should draw for one search surface.
///
/// Serializes to `{"visible":false}`, `{"visible":true,"kind":"results","items":[..]}`
/// or `{"visible":true,"kind":"message","text":".."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurfaceView {
    pub visible: bool,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub body: Option<SurfaceBody>,
}

impl SurfaceView {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            body: None,
        }
    }

    pub fn results(items: Vec<Candidate>) -> Self {
        Self {
            visible: true,
            body: Some(SurfaceBody::Results { items }),
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self {
            visible: true,
            body: Some(SurfaceBody::Message { text: text.into() }),
        }
    }

    pub fn is_message(&self) -> bool {
        matches!(self.body, Some(SurfaceBody::Message { .. }))
    }

    pub fn items(&self) -> &[Candidate] {
        match &self.body {
            Some(SurfaceBody::Results { items }) => items,
            _ => &[],
        }
    }
}

impl Default for SurfaceView {
    fn default() -> Self {
        Self::hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_fallbacks_apply_to_missing_and_blank_fields() {
        let bare = Candidate::new("Dune");
        assert_eq!(bare.display_year(), "N/A");
        assert_eq!(bare.display_kind(), "show");

        let blank = Candidate::new("Dune").with_year(" ").with_kind("");
        assert_eq!(blank.display_year(), "N/A");
        assert_eq!(blank.display_kind(), "show");

        let full = Candidate::new("Dune").with_year("2021").with_kind("movie");
        assert_eq!(full.display_year(), "2021");
        assert_eq!(full.display_kind(), "movie");
    }

    #[test]
    fn parses_positive_proxy_payload() {
        let body = json!({
            "Response": "True",
            "Search": [
                {"Title": "Dune", "Year": "2021", "Type": "movie", "imdbID": "42", "Poster": ""},
                {"Title": "Dune: Prophecy", "Year": "2024", "Type": "Scripted", "imdbID": "7", "Poster": "p.jpg"}
            ]
        });
        let resp: TitleSearchResponse = serde_json::from_value(body).unwrap();
        assert!(resp.is_positive());

        let candidates = resp.into_candidates();
        assert_eq!(candidates.len(), 2);
        assert_eq!(
            candidates[0],
            Candidate::new("Dune").with_year("2021").with_kind("movie")
        );
    }

    #[test]
    fn negative_payload_yields_no_candidates() {
        let body = json!({"Response": "False", "Error": "Search term required"});
        let resp: TitleSearchResponse = serde_json::from_value(body).unwrap();
        assert!(!resp.is_positive());
        assert_eq!(resp.error.as_deref(), Some("Search term required"));
        assert!(resp.into_candidates().is_empty());
    }

    #[test]
    fn negative_flag_wins_over_stray_search_list() {
        let resp = TitleSearchResponse {
            response: RESPONSE_FALSE.to_string(),
            search: Some(vec![TitleRecord {
                title: "Ghost".into(),
                year: None,
                kind: None,
                external_id: String::new(),
                poster: String::new(),
            }]),
            error: None,
        };
        assert!(resp.into_candidates().is_empty());
    }

    #[test]
    fn record_without_optional_fields_parses() {
        let record: TitleRecord = serde_json::from_value(json!({"Title": "Heat"})).unwrap();
        assert_eq!(record.year, None);
        assert_eq!(record.external_id, "");
    }

    #[test]
    fn surface_view_serializes_to_render_contract() {
        assert_eq!(
            serde_json::to_value(SurfaceView::hidden()).unwrap(),
            json!({"visible": false})
        );
        assert_eq!(
            serde_json::to_value(SurfaceView::message(NO_RESULTS_MESSAGE)).unwrap(),
            json!({"visible": true, "kind": "message", "text": "No movies found"})
        );
        assert_eq!(
            serde_json::to_value(SurfaceView::results(vec![Candidate::new("Dune").with_year("2021")]))
                .unwrap(),
            json!({"visible": true, "kind": "results", "items": [{"title": "Dune", "year": "2021"}]})
        );
    }

    #[test]
    fn surface_view_accessors() {
        let view = SurfaceView::results(vec![Candidate::new("Alien")]);
        assert!(!view.is_message());
        assert_eq!(view.items().len(), 1);
        assert!(SurfaceView::message("x").items().is_empty());
        assert_eq!(SurfaceView::default(), SurfaceView::hidden());
    }
}
