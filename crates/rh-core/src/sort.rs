//! Sort specification and its translation to the upstream vocabulary.
//!
//! The upstream catalog names its sort fields differently per media kind
//! (`release_date` vs `first_air_date`, `title` vs `name`), so every handler
//! goes through [`map_sort`] rather than building tokens itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::media::MediaKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Popularity,
    Rating,
    Date,
    Title,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Rating => "rating",
            Self::Date => "date",
            Self::Title => "title",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "popularity" => Ok(Self::Popularity),
            "rating" => Ok(Self::Rating),
            "date" => Ok(Self::Date),
            "title" => Ok(Self::Title),
            _ => Err(format!("Unknown sort field: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("Unknown sort direction: {s}")),
        }
    }
}

/// A `(field, direction)` pair. Defaults to popularity descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse the inbound `sort_by` / `sort_order` query parameters.
    ///
    /// An unrecognized field falls back to popularity descending as a whole;
    /// a missing or unrecognized direction on a known field means descending.
    pub fn from_query(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let Some(field) = sort_by.and_then(|s| s.parse::<SortField>().ok()) else {
            return Self::default();
        };
        let direction = sort_order
            .and_then(|s| s.parse::<SortDirection>().ok())
            .unwrap_or_default();
        Self { field, direction }
    }

    /// Upstream `sort_by` token for this field and direction.
    pub fn upstream_token(&self, kind: MediaKind) -> String {
        map_sort(kind, self.field, self.direction)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.field.as_str(), self.direction.as_str())
    }
}

/// Translate a sort field and direction to the upstream `sort_by` token.
pub fn map_sort(kind: MediaKind, field: SortField, direction: SortDirection) -> String {
    let upstream_field = match (field, kind) {
        (SortField::Popularity, _) => "popularity",
        (SortField::Rating, _) => "vote_average",
        (SortField::Date, MediaKind::Movie) => "release_date",
        (SortField::Date, MediaKind::Show) => "first_air_date",
        (SortField::Title, MediaKind::Movie) => "title",
        (SortField::Title, MediaKind::Show) => "name",
    };
    format!("{upstream_field}.{}", direction.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_table() {
        use MediaKind::{Movie, Show};
        use SortDirection::{Asc, Desc};
        use SortField::*;

        let cases = [
            (Movie, Popularity, Desc, "popularity.desc"),
            (Show, Popularity, Asc, "popularity.asc"),
            (Movie, Rating, Desc, "vote_average.desc"),
            (Show, Rating, Desc, "vote_average.desc"),
            (Movie, Date, Asc, "release_date.asc"),
            (Show, Date, Asc, "first_air_date.asc"),
            (Movie, Title, Asc, "title.asc"),
            (Show, Title, Desc, "name.desc"),
        ];

        for (kind, field, direction, expected) in cases {
            assert_eq!(
                map_sort(kind, field, direction),
                expected,
                "{kind} {field:?} {direction:?}"
            );
        }
    }

    #[test]
    fn date_ascending_from_query() {
        let spec = SortSpec::from_query(Some("date"), Some("asc"));
        assert_eq!(spec.upstream_token(MediaKind::Movie), "release_date.asc");
        assert_eq!(spec.upstream_token(MediaKind::Show), "first_air_date.asc");
    }

    #[test]
    fn unknown_field_falls_back_to_popularity_desc() {
        let spec = SortSpec::from_query(Some("budget"), Some("asc"));
        assert_eq!(spec, SortSpec::default());
        assert_eq!(spec.upstream_token(MediaKind::Movie), "popularity.desc");
    }

    #[test]
    fn missing_parameters_use_default() {
        assert_eq!(SortSpec::from_query(None, None), SortSpec::default());
        assert_eq!(
            SortSpec::from_query(None, Some("asc")),
            SortSpec::default()
        );
    }

    #[test]
    fn unknown_direction_defaults_to_desc() {
        let spec = SortSpec::from_query(Some("title"), Some("sideways"));
        assert_eq!(spec, SortSpec::new(SortField::Title, SortDirection::Desc));
    }

    #[test]
    fn display_uses_inbound_names() {
        let spec = SortSpec::new(SortField::Date, SortDirection::Asc);
        assert_eq!(spec.to_string(), "date.asc");
    }

    #[test]
    fn parsing_is_case_insensitive() {
        let spec = SortSpec::from_query(Some("Rating"), Some("ASC"));
        assert_eq!(spec, SortSpec::new(SortField::Rating, SortDirection::Asc));
    }
}
