use dioxus::prelude::*;

use crate::search_select::client::api_base_url;
use crate::submit::WatchlistApi;

/// Session token for the watchlist backend.
///
/// Sign-in happens elsewhere; a token baked in at build time through
/// `API_TOKEN` is picked up as the initial value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub token: Signal<Option<String>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            token: Signal::new(option_env!("API_TOKEN").map(str::to_string)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// A backend client carrying the current token.
    pub fn watchlist_api(&self) -> WatchlistApi {
        WatchlistApi::new(api_base_url(), self.token.read().clone())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
