//! Shared test harness for the router tests.
//!
//! [`StubCatalog`] stands in for the upstream so handlers can be driven with
//! `tower::ServiceExt::oneshot` without any network.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use http_body_util::BodyExt;
use rh_catalog::{CatalogApi, ListPage, ListQuery};
use rh_core::config::EnrichmentConfig;
use rh_core::{
    DetailFragment, Duration, Entity, Error, Genre, ListItem, MediaKind, Result,
};
use rh_server::context::AppContext;
use rh_server::router::build_router;
use serde_json::{json, Value};

/// In-memory catalog with call counting.
pub struct StubCatalog {
    pub configured: bool,
    pub ids: Vec<u64>,
    pub fail_list: bool,
    pub fail_details: HashSet<u64>,
    pub calls: AtomicUsize,
    pub last_sort: std::sync::Mutex<Option<String>>,
}

impl StubCatalog {
    pub fn new(ids: &[u64]) -> Self {
        Self {
            configured: true,
            ids: ids.to_vec(),
            fail_list: false,
            fail_details: HashSet::new(),
            calls: AtomicUsize::new(0),
            last_sort: std::sync::Mutex::new(None),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(&[1, 2, 3])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_sort(&self) -> Option<String> {
        self.last_sort.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogApi for StubCatalog {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn list(&self, kind: MediaKind, query: &ListQuery) -> Result<ListPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_sort.lock().unwrap() = Some(query.sort_by.clone());
        if self.fail_list {
            return Err(Error::upstream(Some(401), "Invalid API key: You must be granted a valid key."));
        }
        Ok(ListPage {
            page: query.page,
            total_pages: 3,
            total_results: 60,
            items: self
                .ids
                .iter()
                .map(|&id| ListItem {
                    id,
                    kind,
                    title: format!("Title {id}"),
                    original_title: None,
                    popularity: 1.0,
                    vote_average: 6.0,
                    vote_count: 10,
                    release_date: None,
                    poster_path: None,
                    backdrop_path: None,
                    overview: None,
                    genre_ids: Vec::new(),
                })
                .collect(),
        })
    }

    async fn detail_fragment(&self, _kind: MediaKind, id: u64) -> Result<DetailFragment> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_details.contains(&id) {
            return Err(Error::upstream(Some(404), "not found"));
        }
        Ok(DetailFragment {
            id,
            duration: Duration::Runtime { minutes: 100 },
            genres: vec![Genre {
                id: 18,
                name: "Drama".into(),
            }],
        })
    }

    async fn entity(&self, entity: Entity, id: u64, _append: &[&str]) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(match entity {
            Entity::Person => json!({"id": id, "name": "Brad Pitt", "adult": false}),
            _ => json!({"id": id, "title": "Fight Club", "runtime": 139, "adult": false}),
        })
    }

    async fn genres(&self, _kind: MediaKind) -> Result<Vec<Genre>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Genre {
            id: 28,
            name: "Action".into(),
        }])
    }
}

/// Router over `catalog` with default configuration.
pub fn app(catalog: Arc<StubCatalog>) -> Router {
    build_router(AppContext::with_catalog(catalog, &EnrichmentConfig::default()))
}

/// Helper to get response body as string
pub async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}
