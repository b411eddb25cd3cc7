//! Trait definition and types for upstream catalog access.
//!
//! [`CatalogApi`] is the seam between the aggregation layer and the network:
//! [`TmdbClient`](crate::TmdbClient) implements it over HTTP, tests implement
//! it with in-memory fakes.

use async_trait::async_trait;
use rh_core::{DetailFragment, Entity, Genre, ListItem, Listing, MediaKind, Result};

/// Parameters for one upstream list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub listing: Listing,
    pub page: u32,
    /// Upstream `sort_by` token, already translated by
    /// [`map_sort`](rh_core::map_sort).
    pub sort_by: String,
}

/// One page of base items as the upstream returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub items: Vec<ListItem>,
}

/// Async trait that every catalog backend implements.
///
/// Implementations are shared behind an `Arc` across request handlers and the
/// enrichment fan-out.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Short, lowercase identifier for this backend (e.g. `"tmdb"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when a credential is configured. Callers check this
    /// before issuing any request.
    fn is_configured(&self) -> bool;

    /// Issue exactly one list request. Items come back in upstream order,
    /// tagged with `kind`.
    async fn list(&self, kind: MediaKind, query: &ListQuery) -> Result<ListPage>;

    /// Fetch the detail-only fields for a single title.
    async fn detail_fragment(&self, kind: MediaKind, id: u64) -> Result<DetailFragment>;

    /// Fetch the raw detail payload for an entity, asking the upstream to
    /// inline the `append` sub-resources in the same round trip.
    async fn entity(&self, entity: Entity, id: u64, append: &[&str])
        -> Result<serde_json::Value>;

    /// The upstream genre catalogue for a media kind.
    async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>>;
}
