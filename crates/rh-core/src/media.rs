//! Catalog domain types shared by the fetcher, the enricher, and the HTTP
//! surface.
//!
//! Wire shapes here are the contract with the UI: [`Page`] and
//! [`EnrichedItem`] serialize to exactly what the browser consumes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

// ---------------------------------------------------------------------------
// MediaKind
// ---------------------------------------------------------------------------

/// Kind of catalog title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    #[serde(alias = "tv")]
    Show,
}

impl MediaKind {
    /// Path segment the upstream catalog uses for this kind.
    pub fn upstream_segment(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "tv",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "show",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(MediaKind::Movie),
            "show" | "shows" | "tv" => Ok(MediaKind::Show),
            other => Err(Error::Validation(format!("Unknown media kind: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Single-entity detail targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Movie,
    Show,
    Person,
}

impl Entity {
    pub fn upstream_segment(self) -> &'static str {
        match self {
            Entity::Movie => "movie",
            Entity::Show => "tv",
            Entity::Person => "person",
        }
    }
}

impl From<MediaKind> for Entity {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Movie => Entity::Movie,
            MediaKind::Show => Entity::Show,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Movie => "movie",
            Entity::Show => "show",
            Entity::Person => "person",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Which upstream list establishes a page's item set and order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Listing {
    Popular,
    TopRated,
    /// Discover query filtered by a single genre id.
    Genre(u64),
    /// Titles similar to the given id.
    Similar(u64),
    /// Upstream recommendations for the given id.
    Recommendations(u64),
    Search(String),
}

impl Listing {
    /// Short name used for logging and for per-endpoint enrichment caps.
    pub fn name(&self) -> &'static str {
        match self {
            Listing::Popular => "popular",
            Listing::TopRated => "top_rated",
            Listing::Genre(_) => "genre",
            Listing::Similar(_) => "similar",
            Listing::Recommendations(_) => "recommendations",
            Listing::Search(_) => "search",
        }
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// `{id, name}` genre pair as the catalog reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// One entry of a discovery page, before enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u64,
    pub kind: MediaKind,
    /// Movie title or show name.
    pub title: String,
    pub original_title: Option<String>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: u64,
    /// Movie release date or show first-air date (`YYYY-MM-DD`).
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

/// Length information from a detail fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Duration {
    /// Movie runtime in minutes.
    Runtime { minutes: u32 },
    /// Episode lengths in minutes, as reported for a show.
    EpisodeRunTime { minutes: Vec<u32> },
    #[default]
    Unknown,
}

impl Duration {
    pub fn is_known(&self) -> bool {
        !matches!(self, Duration::Unknown)
    }
}

/// Detail-only fields merged back onto a [`ListItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailFragment {
    pub id: u64,
    pub duration: Duration,
    pub genres: Vec<Genre>,
}

/// A [`ListItem`] with its detail fragment attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedItem {
    #[serde(flatten)]
    pub item: ListItem,
    pub duration: Duration,
    pub genres: Vec<Genre>,
}

impl EnrichedItem {
    /// Merge a fragment onto its item. The item's identity wins.
    pub fn merged(item: ListItem, fragment: DetailFragment) -> Self {
        Self {
            item,
            duration: fragment.duration,
            genres: fragment.genres,
        }
    }

    /// The item with duration unknown and no genres.
    pub fn degraded(item: ListItem) -> Self {
        Self {
            item,
            duration: Duration::Unknown,
            genres: Vec::new(),
        }
    }
}

/// Aggregated response for one page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub results: Vec<EnrichedItem>,
}
