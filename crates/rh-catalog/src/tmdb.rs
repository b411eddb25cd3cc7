//! TMDB (The Movie Database) catalog client.
//!
//! Implements [`CatalogApi`] against the TMDB v3 REST API.
//!
//! Features:
//! - v3 API keys (`api_key` query parameter) and v4 read tokens (`Bearer`).
//! - Optional token-bucket rate limiting via [`governor`].
//! - Optional request timeout.
//! - Upstream `status_message` extraction for error reporting.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use governor::{Quota, RateLimiter};
use rh_core::config::CatalogConfig;
use rh_core::{
    DetailFragment, Duration, Entity, Error, Genre, ListItem, Listing, MediaKind, Result,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::api::{CatalogApi, ListPage, ListQuery};

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TmdbListResponse {
    #[serde(default = "first_page")]
    page: u32,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u64,
    #[serde(default)]
    results: Vec<TmdbListEntry>,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct TmdbListEntry {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    original_title: Option<String>,
    original_name: Option<String>,
    #[serde(default)]
    popularity: f64,
    #[serde(default)]
    vote_average: f64,
    #[serde(default)]
    vote_count: u64,
    release_date: Option<String>,
    first_air_date: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    overview: Option<String>,
    #[serde(default)]
    genre_ids: Vec<u64>,
}

impl TmdbListEntry {
    fn into_list_item(self, kind: MediaKind) -> ListItem {
        let (title, original_title, date) = match kind {
            MediaKind::Movie => (
                self.title.or(self.name),
                self.original_title,
                self.release_date,
            ),
            MediaKind::Show => (
                self.name.or(self.title),
                self.original_name,
                self.first_air_date,
            ),
        };

        ListItem {
            id: self.id,
            kind,
            title: title.unwrap_or_default(),
            original_title: non_empty(original_title),
            popularity: self.popularity,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            release_date: non_empty(date),
            poster_path: non_empty(self.poster_path),
            backdrop_path: non_empty(self.backdrop_path),
            overview: non_empty(self.overview),
            genre_ids: self.genre_ids,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TmdbDetail {
    id: u64,
    runtime: Option<u32>,
    episode_run_time: Option<Vec<u32>>,
    #[serde(default)]
    genres: Vec<Genre>,
}

impl TmdbDetail {
    fn into_fragment(self, kind: MediaKind) -> DetailFragment {
        let duration = match kind {
            MediaKind::Movie => match self.runtime {
                Some(minutes) if minutes > 0 => Duration::Runtime { minutes },
                _ => Duration::Unknown,
            },
            MediaKind::Show => match self.episode_run_time {
                Some(minutes) if !minutes.is_empty() => Duration::EpisodeRunTime { minutes },
                _ => Duration::Unknown,
            },
        };

        DetailFragment {
            id: self.id,
            duration,
            genres: self.genres,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TmdbGenreList {
    #[serde(default)]
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct TmdbErrorBody {
    status_message: Option<String>,
}

/// TMDB reports missing dates and paths as empty strings.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Credential {
    ApiKey(String),
    /// v4 read access token.
    Bearer(String),
}

impl Credential {
    fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() {
            None
        } else if key.starts_with("eyJ") {
            // v4 tokens are JWTs; the base64 header always starts this way.
            Some(Credential::Bearer(key.to_string()))
        } else {
            Some(Credential::ApiKey(key.to_string()))
        }
    }
}

type Limiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// TMDB catalog client.
///
/// Cheap to share behind an `Arc`: the inner `reqwest::Client` pools
/// connections across all requests.
///
/// # Examples
///
/// ```no_run
/// use rh_catalog::TmdbClient;
/// use rh_core::config::CatalogConfig;
///
/// let mut config = CatalogConfig::default();
/// config.api_key = Some("your-api-key".into());
/// let client = TmdbClient::new(&config).unwrap();
/// ```
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    language: String,
    credential: Option<Credential>,
    limiter: Option<Arc<Limiter>>,
}

impl TmdbClient {
    /// Build a client from the catalog section of the configuration.
    ///
    /// A missing credential is accepted here; requests then fail with
    /// [`Error::Configuration`] before anything is sent.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(StdDuration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        let limiter = config
            .requests_per_second
            .and_then(NonZeroU32::new)
            .map(|rps| Arc::new(RateLimiter::direct(Quota::per_second(rps))));

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            credential: config.api_key.as_deref().and_then(Credential::from_key),
            limiter,
        })
    }

    /// Execute a GET request and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str, extra_params: &[(&str, String)]) -> Result<T> {
        let credential = self.credential.as_ref().ok_or_else(Error::missing_credential)?;

        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }

        let url = format!("{}{path}", self.base_url);
        let mut params: Vec<(&str, &str)> = vec![("language", self.language.as_str())];
        params.extend(extra_params.iter().map(|(k, v)| (*k, v.as_str())));

        // Logged before the credential is attached.
        debug!(url = %url, params = ?params, "Catalog request");

        let mut request = self.http.get(&url);
        match credential {
            Credential::ApiKey(key) => params.push(("api_key", key.as_str())),
            Credential::Bearer(token) => request = request.bearer_auth(token),
        }

        let resp = request
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors embed the full URL, query string and credential included.
                Error::upstream(None, format!("request to {path} failed: {}", e.without_url()))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TmdbErrorBody>(&body)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string()
                });
            return Err(Error::upstream(Some(status.as_u16()), message));
        }

        resp.json::<T>().await.map_err(|e| {
            Error::upstream(
                Some(status.as_u16()),
                format!("invalid response body from {path}: {}", e.without_url()),
            )
        })
    }
}

/// Path and listing-specific parameters for a list request.
fn list_endpoint(kind: MediaKind, listing: &Listing) -> (String, Vec<(&'static str, String)>) {
    let segment = kind.upstream_segment();
    match listing {
        Listing::Popular => (format!("/{segment}/popular"), Vec::new()),
        Listing::TopRated => (format!("/{segment}/top_rated"), Vec::new()),
        Listing::Genre(genre_id) => (
            format!("/discover/{segment}"),
            vec![("with_genres", genre_id.to_string())],
        ),
        Listing::Similar(id) => (format!("/{segment}/{id}/similar"), Vec::new()),
        Listing::Recommendations(id) => (format!("/{segment}/{id}/recommendations"), Vec::new()),
        Listing::Search(query) => (
            format!("/search/{segment}"),
            vec![("query", query.clone())],
        ),
    }
}

#[async_trait]
impl CatalogApi for TmdbClient {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    fn is_configured(&self) -> bool {
        self.credential.is_some()
    }

    async fn list(&self, kind: MediaKind, query: &ListQuery) -> Result<ListPage> {
        let (path, mut params) = list_endpoint(kind, &query.listing);
        params.push(("page", query.page.to_string()));
        params.push(("sort_by", query.sort_by.clone()));

        let body: TmdbListResponse = self.get(&path, &params).await?;

        Ok(ListPage {
            page: body.page,
            total_pages: body.total_pages,
            total_results: body.total_results,
            items: body
                .results
                .into_iter()
                .map(|entry| entry.into_list_item(kind))
                .collect(),
        })
    }

    async fn detail_fragment(&self, kind: MediaKind, id: u64) -> Result<DetailFragment> {
        let path = format!("/{}/{id}", kind.upstream_segment());
        let detail: TmdbDetail = self.get(&path, &[]).await?;
        Ok(detail.into_fragment(kind))
    }

    async fn entity(
        &self,
        entity: Entity,
        id: u64,
        append: &[&str],
    ) -> Result<serde_json::Value> {
        let path = format!("/{}/{id}", entity.upstream_segment());
        let params = if append.is_empty() {
            Vec::new()
        } else {
            vec![("append_to_response", append.join(","))]
        };
        self.get(&path, &params).await
    }

    async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>> {
        let path = format!("/genre/{}/list", kind.upstream_segment());
        let body: TmdbGenreList = self.get(&path, &[]).await?;
        Ok(body.genres)
    }
}
