//! In-memory [`CatalogApi`] used by the unit tests of this crate.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use rh_core::{
    DetailFragment, Duration, Entity, Error, Genre, ListItem, MediaKind, Result,
};

use crate::api::{CatalogApi, ListPage, ListQuery};

pub(crate) fn list_item(id: u64, kind: MediaKind) -> ListItem {
    ListItem {
        id,
        kind,
        title: format!("title {id}"),
        original_title: None,
        popularity: 10.0,
        vote_average: 7.5,
        vote_count: 100,
        release_date: Some("2020-01-01".into()),
        poster_path: Some(format!("/{id}.jpg")),
        backdrop_path: None,
        overview: Some(format!("overview {id}")),
        genre_ids: vec![18],
    }
}

pub(crate) fn drama() -> Genre {
    Genre {
        id: 18,
        name: "Drama".into(),
    }
}

/// Scriptable fake catalog.
pub(crate) struct FakeCatalog {
    pub configured: bool,
    pub page_ids: Vec<u64>,
    pub list_failure: Option<u16>,
    pub detail_failures: HashSet<u64>,
    pub detail_delays_ms: HashMap<u64, u64>,
    pub entity_payload: serde_json::Value,
    pub list_calls: Mutex<Vec<ListQuery>>,
    pub detail_calls: AtomicUsize,
    pub entity_calls: Mutex<Vec<(Entity, u64, Vec<String>)>>,
    in_flight: AtomicUsize,
    pub peak_in_flight: AtomicUsize,
}

impl FakeCatalog {
    pub fn with_ids(ids: &[u64]) -> Self {
        Self {
            configured: true,
            page_ids: ids.to_vec(),
            list_failure: None,
            detail_failures: HashSet::new(),
            detail_delays_ms: HashMap::new(),
            entity_payload: serde_json::Value::Null,
            list_calls: Mutex::new(Vec::new()),
            detail_calls: AtomicUsize::new(0),
            entity_calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::with_ids(&[1, 2, 3])
        }
    }

    pub fn list_calls(&self) -> Vec<ListQuery> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.list_calls.lock().unwrap().len()
            + self.detail_calls.load(Ordering::SeqCst)
            + self.entity_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn list(&self, kind: MediaKind, query: &ListQuery) -> Result<ListPage> {
        self.list_calls.lock().unwrap().push(query.clone());
        if let Some(status) = self.list_failure {
            return Err(Error::upstream(Some(status), "list failed"));
        }
        Ok(ListPage {
            page: query.page,
            total_pages: 7,
            total_results: 140,
            items: self.page_ids.iter().map(|&id| list_item(id, kind)).collect(),
        })
    }

    async fn detail_fragment(&self, kind: MediaKind, id: u64) -> Result<DetailFragment> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(ms) = self.detail_delays_ms.get(&id) {
            tokio::time::sleep(StdDuration::from_millis(*ms)).await;
        } else {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.detail_failures.contains(&id) {
            return Err(Error::upstream(Some(404), "The resource you requested could not be found."));
        }

        let duration = match kind {
            MediaKind::Movie => Duration::Runtime {
                minutes: 90 + id as u32,
            },
            MediaKind::Show => Duration::EpisodeRunTime { minutes: vec![45] },
        };
        Ok(DetailFragment {
            id,
            duration,
            genres: vec![drama()],
        })
    }

    async fn entity(
        &self,
        entity: Entity,
        id: u64,
        append: &[&str],
    ) -> Result<serde_json::Value> {
        self.entity_calls.lock().unwrap().push((
            entity,
            id,
            append.iter().map(|s| s.to_string()).collect(),
        ));
        Ok(self.entity_payload.clone())
    }

    async fn genres(&self, _kind: MediaKind) -> Result<Vec<Genre>> {
        Ok(vec![drama()])
    }
}
