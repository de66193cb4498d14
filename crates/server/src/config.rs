use shared_types::{AppConfig, SearchConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `[search].upstream_url`.
const UPSTREAM_ENV: &str = "TITLE_SEARCH_UPSTREAM";

/// Parse config file contents. Invalid TOML yields the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// Apply environment overrides on top of the file config.
fn apply_env(mut config: AppConfig, upstream: Option<String>) -> AppConfig {
    if let Some(url) = upstream.filter(|u| !u.trim().is_empty()) {
        config.search.upstream_url = url;
    }
    config
}

/// Read `config.toml` (and `.env`) once and store the result in the global
/// `OnceLock`. Safe to call multiple times; only the first call has effect.
///
/// If the file is missing or unparseable, every setting takes its default.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not found ({e}), using defaults");
                AppConfig::default()
            }
        };
        let config = apply_env(config, std::env::var(UPSTREAM_ENV).ok());
        eprintln!(
            "[config] Feature flags: {:?}, title catalog: {}",
            config.features, config.search.upstream_url
        );
        config
    })
}

/// Get the `[search]` section, loading the config on first use.
pub fn search_config() -> &'static SearchConfig {
    &load_config().search
}
