use shared_types::AppError;

use crate::title_search::TitleCatalog;

/// Shared application state passed to Axum handlers via `State`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: TitleCatalog,
}

impl AppState {
    pub fn new(catalog: TitleCatalog) -> Self {
        Self { catalog }
    }

    /// Build state from the loaded `config.toml` / environment.
    pub fn from_config() -> Result<Self, AppError> {
        let catalog = TitleCatalog::from_config(crate::config::search_config())?;
        Ok(Self::new(catalog))
    }
}
