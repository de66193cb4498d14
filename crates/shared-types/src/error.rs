use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    ValidationError,
    UpstreamError,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::UpstreamError => write!(f, "UpstreamError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error used across server and client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::UpstreamError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::InternalError, message)
    }

    /// Parse an AppError out of a response body or error string.
    ///
    /// Accepts raw JSON as well as strings that embed the JSON object, e.g.
    /// `request failed: {"kind":"UpstreamError",...}`.
    pub fn from_body(body: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(body) {
            return Some(err);
        }
        let start = body.find('{')?;
        let end = body.rfind('}')?;
        if end > start {
            serde_json::from_str(&body[start..=end]).ok()
        } else {
            None
        }
    }

    /// Extract a user-facing message from a backend error body.
    ///
    /// Bodies shaped like `{"message": "..."}` are accepted too, since the
    /// watchlist backend answers that way.
    pub fn friendly_message(body: &str) -> String {
        if let Some(app_error) = Self::from_body(body) {
            return app_error.message;
        }
        #[derive(Deserialize)]
        struct Bare {
            message: String,
        }
        match serde_json::from_str::<Bare>(body) {
            Ok(bare) if !bare.message.trim().is_empty() => bare.message,
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

// ---------------------------------------------------------------------------
// Selection gate
// ---------------------------------------------------------------------------

/// Why a submit was refused by the selection gate.
///
/// All variants are recoverable: the input is left as typed so the user can
/// correct it or pick a candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SelectionError {
    EmptyInput,
    NoSelection,
    SelectionMismatch,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::EmptyInput => write!(f, "Please enter a movie title"),
            SelectionError::NoSelection => {
                write!(f, "Please select a movie from the search results")
            }
            SelectionError::SelectionMismatch => write!(
                f,
                "The title was changed after selecting. Please select a movie from the search results again"
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        let mut fields = HashMap::new();
        fields.insert("title".to_string(), err.to_string());
        AppError::validation(err.to_string(), fields)
    }
}

// ---------------------------------------------------------------------------
// Lookup transport
// ---------------------------------------------------------------------------

/// A title lookup that never produced a usable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTransportError {
    /// The request could not be sent or the connection broke.
    Http(String),
    /// The body was not a title-search payload.
    Decode(String),
}

impl fmt::Display for SearchTransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchTransportError::Http(e) => write!(f, "title search request failed: {e}"),
            SearchTransportError::Decode(e) => write!(f, "title search payload invalid: {e}"),
        }
    }
}

impl std::error::Error for SearchTransportError {}
