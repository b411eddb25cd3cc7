//! Detail Enricher: concurrent per-item detail fan-out.
//!
//! Each item gets its own detail request. A failed request degrades only that
//! item (duration unknown, no genres); it never fails the page and never drops
//! the item. Results are index-aligned with the input, whatever order the
//! requests complete in.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use rh_core::{EnrichedItem, ListItem, MediaKind};
use tracing::{debug, warn};

use crate::api::CatalogApi;

pub struct DetailEnricher {
    catalog: Arc<dyn CatalogApi>,
    max_concurrency: Option<usize>,
}

impl DetailEnricher {
    /// `max_concurrency` bounds in-flight detail requests per call; `None`
    /// (or `Some(0)`) issues every request at once.
    pub fn new(catalog: Arc<dyn CatalogApi>, max_concurrency: Option<usize>) -> Self {
        Self {
            catalog,
            max_concurrency,
        }
    }

    /// Enrich `items`, issuing detail requests for at most the first `cap`
    /// of them. Items past the cap are emitted unenriched.
    pub async fn enrich(
        &self,
        kind: MediaKind,
        mut items: Vec<ListItem>,
        cap: Option<usize>,
    ) -> Vec<EnrichedItem> {
        let enrich_count = cap.map_or(items.len(), |cap| cap.min(items.len()));
        let beyond_cap = items.split_off(enrich_count);

        let concurrency = match self.max_concurrency {
            Some(limit) if limit > 0 => limit,
            _ => enrich_count,
        }
        .max(1);

        debug!(
            %kind,
            items = enrich_count,
            skipped = beyond_cap.len(),
            concurrency,
            "Enriching page"
        );

        let catalog = &self.catalog;
        // `buffered` keeps output in input order while running up to
        // `concurrency` requests at once.
        let mut enriched: Vec<EnrichedItem> = stream::iter(items)
            .map(|item| async move {
                match catalog.detail_fragment(kind, item.id).await {
                    Ok(fragment) => EnrichedItem::merged(item, fragment),
                    Err(e) => {
                        warn!(
                            id = item.id,
                            %kind,
                            error = %e,
                            "Detail fetch failed; emitting item without duration or genres"
                        );
                        EnrichedItem::degraded(item)
                    }
                }
            })
            .buffered(concurrency)
            .collect()
            .await;

        enriched.extend(beyond_cap.into_iter().map(EnrichedItem::degraded));
        enriched
    }
}
