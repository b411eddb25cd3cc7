//! Single-entity detail fetch.
//!
//! One upstream request per entity, with the related sections (credits,
//! videos, similar titles, ...) appended to the same response. The payload is
//! then projected onto a fixed allow-list of top-level keys so upstream
//! additions never leak through to the UI.

use std::sync::Arc;

use rh_core::{Entity, Error, Result};
use serde_json::{Map, Value};
use tracing::debug;

use crate::api::CatalogApi;

const MOVIE_FIELDS: &[&str] = &[
    "id",
    "title",
    "original_title",
    "overview",
    "poster_path",
    "backdrop_path",
    "release_date",
    "runtime",
    "vote_average",
    "vote_count",
    "popularity",
    "genres",
    "tagline",
    "status",
    "budget",
    "revenue",
    "imdb_id",
    "homepage",
    "original_language",
    "spoken_languages",
    "production_companies",
    "credits",
    "videos",
    "similar",
    "recommendations",
];

const SHOW_FIELDS: &[&str] = &[
    "id",
    "name",
    "original_name",
    "overview",
    "poster_path",
    "backdrop_path",
    "first_air_date",
    "last_air_date",
    "episode_run_time",
    "number_of_seasons",
    "number_of_episodes",
    "seasons",
    "status",
    "tagline",
    "vote_average",
    "vote_count",
    "popularity",
    "genres",
    "networks",
    "created_by",
    "credits",
    "videos",
    "similar",
    "recommendations",
];

const PERSON_FIELDS: &[&str] = &[
    "id",
    "name",
    "biography",
    "birthday",
    "deathday",
    "place_of_birth",
    "profile_path",
    "known_for_department",
    "popularity",
    "also_known_as",
    "gender",
    "homepage",
    "imdb_id",
    "combined_credits",
    "images",
];

const TITLE_APPEND: &[&str] = &["credits", "videos", "similar", "recommendations"];
const PERSON_APPEND: &[&str] = &["combined_credits", "images"];

/// Top-level keys kept for `entity`.
pub fn allowed_fields(entity: Entity) -> &'static [&'static str] {
    match entity {
        Entity::Movie => MOVIE_FIELDS,
        Entity::Show => SHOW_FIELDS,
        Entity::Person => PERSON_FIELDS,
    }
}

/// Sections requested alongside the entity in the same upstream call.
pub fn append_sections(entity: Entity) -> &'static [&'static str] {
    match entity {
        Entity::Movie | Entity::Show => TITLE_APPEND,
        Entity::Person => PERSON_APPEND,
    }
}

/// Keep only allow-listed keys that are present in `payload`.
///
/// Absent keys are not invented. Non-object payloads yield an empty object.
pub fn project(entity: Entity, payload: Value) -> Value {
    let Value::Object(mut source) = payload else {
        return Value::Object(Map::new());
    };

    let projected: Map<String, Value> = allowed_fields(entity)
        .iter()
        .filter_map(|&key| source.remove(key).map(|value| (key.to_string(), value)))
        .collect();
    Value::Object(projected)
}

pub struct DetailFetcher {
    catalog: Arc<dyn CatalogApi>,
}

impl DetailFetcher {
    pub fn new(catalog: Arc<dyn CatalogApi>) -> Self {
        Self { catalog }
    }

    /// Fetch one entity with its appended sections and project it.
    pub async fn fetch(&self, entity: Entity, id: u64) -> Result<Value> {
        if !self.catalog.is_configured() {
            return Err(Error::missing_credential());
        }

        let append = append_sections(entity);
        debug!(
            catalog = self.catalog.name(),
            %entity,
            id,
            append = %append.join(","),
            "Fetching entity detail"
        );

        let payload = self.catalog.entity(entity, id, append).await?;
        Ok(project(entity, payload))
    }
}
