//! # Client configuration
//!
//! Where the backend lives. The web app embeds `packages/web/webdevcamp.toml`
//! at build time and parses it with [`ApiConfig::from_toml`]:
//!
//! ```toml
//! [backend]
//! base_url = "https://webdevcamp.fly.dev"
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is the same as
//! the production configuration.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://webdevcamp.fly.dev";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Backend section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Scheme, host and optional path prefix. Endpoint paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.backend.base_url = base_url.into();
        self
    }

    /// Config with the base URL overridden when `base_url` is set and non-blank.
    ///
    /// Used by the entry points with a compile-time `option_env!`.
    pub fn with_override(self, base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => self.with_base_url(url),
            None => self,
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ApiError> {
        toml::from_str(s).map_err(|e| ApiError::Config(e.to_string()))
    }
}
