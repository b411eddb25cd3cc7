//! Shared helpers for the wire-level catalog tests.
//!
//! Every test gets its own [`MockServer`] standing in for the TMDB v3 API and a
//! [`TmdbClient`] pointed at it.

#![allow(dead_code)]

use std::sync::Arc;

use rh_catalog::{CatalogApi, CatalogService, TmdbClient};
use rh_core::config::{CatalogConfig, EnrichmentConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

pub fn catalog_config(server: &MockServer, key: Option<&str>) -> CatalogConfig {
    CatalogConfig {
        api_key: key.map(String::from),
        base_url: format!("{}/3", server.uri()),
        ..CatalogConfig::default()
    }
}

pub fn client(server: &MockServer, key: Option<&str>) -> Arc<dyn CatalogApi> {
    Arc::new(TmdbClient::new(&catalog_config(server, key)).expect("client builds"))
}

pub fn service(server: &MockServer, key: Option<&str>) -> CatalogService {
    CatalogService::new(client(server, key), &EnrichmentConfig::default())
}

/// One `results` entry as `/movie/popular` returns it.
pub fn movie_entry(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "original_title": title,
        "popularity": 50.5,
        "vote_average": 7.9,
        "vote_count": 1200,
        "release_date": "1999-10-15",
        "poster_path": format!("/{id}.jpg"),
        "backdrop_path": "",
        "overview": "An insomniac office worker...",
        "genre_ids": [18],
        "adult": false,
        "video": false
    })
}

/// One `results` entry as `/tv/popular` returns it.
pub fn show_entry(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "original_name": name,
        "popularity": 120.0,
        "vote_average": 8.4,
        "vote_count": 22000,
        "first_air_date": "2011-04-17",
        "poster_path": format!("/{id}.jpg"),
        "backdrop_path": null,
        "overview": "Seven noble families fight for control...",
        "genre_ids": [10765, 18],
        "origin_country": ["US"]
    })
}

pub fn list_body(page: u32, results: Vec<Value>) -> Value {
    json!({
        "page": page,
        "total_pages": 500,
        "total_results": 10000,
        "results": results
    })
}

pub fn movie_detail(id: u64, runtime: u32) -> Value {
    json!({
        "id": id,
        "runtime": runtime,
        "genres": [{"id": 18, "name": "Drama"}],
        "tagline": "Mischief. Mayhem. Soap.",
        "budget": 63000000
    })
}

pub fn show_detail(id: u64, episode_run_time: &[u32]) -> Value {
    json!({
        "id": id,
        "episode_run_time": episode_run_time,
        "genres": [{"id": 18, "name": "Drama"}],
        "number_of_seasons": 8
    })
}

pub fn not_found() -> Value {
    json!({
        "success": false,
        "status_code": 34,
        "status_message": "The resource you requested could not be found."
    })
}
