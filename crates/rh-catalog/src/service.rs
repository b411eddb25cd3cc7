//! [`CatalogService`]: the facade the HTTP layer talks to.
//!
//! A page is produced in two phases: one discovery request fixes the item set
//! and order, then the enricher fans out detail requests over those items.
//! Page metadata always comes from the discovery response.

use std::sync::Arc;

use rh_core::config::{EnrichmentCaps, EnrichmentConfig};
use rh_core::{Entity, Error, Genre, Listing, MediaKind, Page, Result, SortSpec};
use serde_json::Value;
use tracing::info;

use crate::api::CatalogApi;
use crate::detail::DetailFetcher;
use crate::discovery::DiscoveryFetcher;
use crate::enrich::DetailEnricher;

pub struct CatalogService {
    catalog: Arc<dyn CatalogApi>,
    discovery: DiscoveryFetcher,
    enricher: DetailEnricher,
    detail: DetailFetcher,
    caps: EnrichmentCaps,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn CatalogApi>, enrichment: &EnrichmentConfig) -> Self {
        Self {
            discovery: DiscoveryFetcher::new(catalog.clone()),
            enricher: DetailEnricher::new(catalog.clone(), enrichment.max_concurrency),
            detail: DetailFetcher::new(catalog.clone()),
            caps: enrichment.caps.clone(),
            catalog,
        }
    }

    pub fn name(&self) -> &'static str {
        self.catalog.name()
    }

    pub fn is_configured(&self) -> bool {
        self.catalog.is_configured()
    }

    /// Produce one enriched page of `listing`.
    ///
    /// Fails only when the credential is missing or discovery fails; detail
    /// failures degrade individual items.
    pub async fn page(
        &self,
        kind: MediaKind,
        listing: &Listing,
        page: u32,
        sort: SortSpec,
    ) -> Result<Page> {
        let base = self.discovery.fetch_page(kind, listing, page, sort).await?;
        let cap = self.caps.for_listing(listing);
        let results = self.enricher.enrich(kind, base.items, cap).await;

        let degraded = results.iter().filter(|e| !e.duration.is_known()).count();
        info!(
            %kind,
            listing = listing.name(),
            page = base.page,
            items = results.len(),
            degraded,
            "Served catalog page"
        );

        Ok(Page {
            page: base.page,
            total_pages: base.total_pages,
            total_results: base.total_results,
            results,
        })
    }

    /// Single-entity detail, projected onto its allow-list.
    pub async fn entity(&self, entity: Entity, id: u64) -> Result<Value> {
        self.detail.fetch(entity, id).await
    }

    /// Genre list for `kind`.
    pub async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>> {
        if !self.catalog.is_configured() {
            return Err(Error::missing_credential());
        }
        self.catalog.genres(kind).await
    }
}
