//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from TOML and carries the
//! server, catalog, and enrichment sections. Every section defaults sensibly
//! so a completely empty file is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::media::Listing;
use crate::Error;

/// Environment variable holding the catalog credential.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";
const HOST_ENV: &str = "REELHUB_HOST";
const PORT_ENV: &str = "REELHUB_PORT";

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub enrichment: EnrichmentConfig,
}

impl Config {
    /// Deserialize a `Config` from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file. A missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Overlay values from an arbitrary variable lookup. Empty values are
    /// ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup(API_KEY_ENV) {
            self.catalog.api_key = Some(key);
        }
        if let Some(host) = lookup(HOST_ENV) {
            self.server.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid {PORT_ENV} value: {port}"),
            }
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.server.port == 0 {
            warnings.push("server.port is 0; a random port will be assigned".into());
        }

        if !self.catalog.has_credential() {
            warnings.push(format!(
                "catalog.api_key is not set (nor {API_KEY_ENV}); catalog routes will return 500"
            ));
        }

        if self.catalog.base_url.trim().is_empty() {
            warnings.push("catalog.base_url is empty".into());
        }

        if self.catalog.requests_per_second == Some(0) {
            warnings.push("catalog.requests_per_second is 0; rate limiting disabled".into());
        }

        if self.enrichment.max_concurrency == Some(0) {
            warnings.push("enrichment.max_concurrency is 0; treated as unbounded".into());
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

/// Upstream catalog connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// v3 API key or v4 read access token.
    pub api_key: Option<String>,
    pub base_url: String,
    pub language: String,
    /// Client-side rate limit. `None` means no limit.
    pub requests_per_second: Option<u32>,
    /// Per-request timeout. `None` means requests may wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl CatalogConfig {
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.themoviedb.org/3".into(),
            language: "en-US".into(),
            requests_per_second: None,
            timeout_secs: None,
        }
    }
}

/// Detail fan-out settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Maximum in-flight detail requests per page. `None` means unbounded.
    pub max_concurrency: Option<usize>,
    pub caps: EnrichmentCaps,
}

/// Per-listing limit on how many leading items of a page get enriched.
/// `None` enriches the whole page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentCaps {
    pub popular: Option<usize>,
    pub top_rated: Option<usize>,
    pub genre: Option<usize>,
    pub similar: Option<usize>,
    pub recommendations: Option<usize>,
    pub search: Option<usize>,
}

impl EnrichmentCaps {
    pub fn for_listing(&self, listing: &Listing) -> Option<usize> {
        match listing {
            Listing::Popular => self.popular,
            Listing::TopRated => self.top_rated,
            Listing::Genre(_) => self.genre,
            Listing::Similar(_) => self.similar,
            Listing::Recommendations(_) => self.recommendations,
            Listing::Search(_) => self.search,
        }
    }
}

impl Default for EnrichmentCaps {
    fn default() -> Self {
        Self {
            popular: None,
            top_rated: None,
            genre: None,
            similar: Some(10),
            recommendations: Some(10),
            search: None,
        }
    }
}
