//! rh-catalog: upstream catalog access and the aggregation layer.
//!
//! # Module layout
//!
//! - [`api`] -- The [`CatalogApi`] trait and the list/page wire types.
//! - [`tmdb`] -- [`TmdbClient`], the reqwest-backed TMDB v3 implementation.
//! - [`discovery`] -- One paginated list request per page.
//! - [`enrich`] -- Concurrent per-item detail fan-out with failure isolation.
//! - [`detail`] -- Single-entity fetch and allow-list projection.
//! - [`service`] -- [`CatalogService`], the facade the HTTP layer talks to.

pub mod api;
pub mod detail;
pub mod discovery;
pub mod enrich;
pub mod service;
pub mod tmdb;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use api::{CatalogApi, ListPage, ListQuery};
pub use detail::DetailFetcher;
pub use discovery::DiscoveryFetcher;
pub use enrich::DetailEnricher;
pub use service::CatalogService;
pub use tmdb::TmdbClient;
