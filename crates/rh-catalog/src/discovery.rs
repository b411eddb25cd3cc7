//! Discovery Fetcher: the single list request that establishes a page's item
//! set and order.

use std::sync::Arc;

use rh_core::{Error, Listing, MediaKind, Result, SortSpec};
use tracing::debug;

use crate::api::{CatalogApi, ListPage, ListQuery};

pub struct DiscoveryFetcher {
    catalog: Arc<dyn CatalogApi>,
}

impl DiscoveryFetcher {
    pub fn new(catalog: Arc<dyn CatalogApi>) -> Self {
        Self { catalog }
    }

    /// Fetch one page of base items.
    ///
    /// Fails with [`Error::Configuration`] before any request when the
    /// catalog has no credential, and with [`Error::Upstream`] when the list
    /// request itself fails. There is no partial discovery.
    pub async fn fetch_page(
        &self,
        kind: MediaKind,
        listing: &Listing,
        page: u32,
        sort: SortSpec,
    ) -> Result<ListPage> {
        if !self.catalog.is_configured() {
            return Err(Error::missing_credential());
        }
        if page == 0 {
            return Err(Error::Validation("page must be >= 1".into()));
        }
        if let Listing::Search(query) = listing {
            if query.trim().is_empty() {
                return Err(Error::Validation("search query must not be empty".into()));
            }
        }

        let query = ListQuery {
            listing: listing.clone(),
            page,
            sort_by: sort.upstream_token(kind),
        };
        debug!(
            catalog = self.catalog.name(),
            %kind,
            listing = listing.name(),
            page,
            sort_by = %query.sort_by,
            "Fetching discovery page"
        );

        self.catalog.list(kind, &query).await
    }
}
