//! Client configuration as built into the bundle.

use api::ApiConfig;

/// `webdevcamp.toml` next to this crate's manifest.
const CONFIG_FILE: &str = include_str!("../webdevcamp.toml");

/// Backend override for local development, e.g.
/// `WEBDEVCAMP_API_URL=http://localhost:8000 dx serve --features web`.
const API_URL_OVERRIDE: Option<&str> = option_env!("WEBDEVCAMP_API_URL");

/// The configuration the app starts with.
pub fn app_config() -> ApiConfig {
    load(CONFIG_FILE, API_URL_OVERRIDE)
}

/// Parse `file`, falling back to the defaults when it is malformed, then apply
/// the URL override.
pub fn load(file: &str, url_override: Option<&str>) -> ApiConfig {
    let config = ApiConfig::from_toml(file).unwrap_or_else(|e| {
        tracing::warn!("Ignoring webdevcamp.toml: {}", e);
        ApiConfig::default()
    });
    config.with_override(url_override)
}
