//! Application context shared across route handlers via Axum state.
//!
//! Everything in here is immutable after startup; the only shared resource
//! is the HTTP connection pool inside the catalog client.

use std::sync::Arc;

use rh_catalog::{CatalogApi, CatalogService, TmdbClient};
use rh_core::config::{Config, EnrichmentConfig};

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<CatalogService>,
}

impl AppContext {
    /// Build the context with a TMDB client configured from `config`.
    pub fn new(config: &Config) -> rh_core::Result<Self> {
        let client = TmdbClient::new(&config.catalog)?;
        Ok(Self::with_catalog(Arc::new(client), &config.enrichment))
    }

    /// Build the context around any catalog backend.
    pub fn with_catalog(catalog: Arc<dyn CatalogApi>, enrichment: &EnrichmentConfig) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(catalog, enrichment)),
        }
    }
}
