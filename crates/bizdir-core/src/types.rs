//! Domain types shared by the store, engine, and session layers.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Bounds every record rating must fall within.
pub const RATING_RANGE: RangeInclusive<f64> = 0.0..=5.0;

/// One directory entry as supplied by the embedding UI layer: a flat bag
/// of string attributes, exactly as the upstream data source exposes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub category: String,
    pub location: String,
    pub size: String,
    pub rating: String,
    pub premium: String,
}

/// A validated directory entry.
///
/// - `name`: display name, search field, and name-sort key
/// - `category`: one of the directory's closed category set
/// - `location`/`size`: exact-match filter facets
/// - `rating`: finite, within [`RATING_RANGE`]
/// - `premium`: paid-listing flag
///
/// Records are immutable for the lifetime of a session; the store owns
/// them and every other component only reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub category: String,
    pub location: String,
    pub size: String,
    pub rating: f64,
    pub premium: bool,
}

/// Ordering applied to the filtered subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Identity: keep the store's original insertion order.
    #[default]
    Relevance,
    RatingDesc,
    RatingAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Parses a sort option label. Unknown labels fall back to
    /// `Relevance` rather than erroring, matching the permissive select
    /// handling of the directory UI.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "" | "relevance" => Self::Relevance,
            "rating-desc" => Self::RatingDesc,
            "rating-asc" => Self::RatingAsc,
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            other => {
                tracing::warn!(label = other, "unknown sort key, falling back to relevance");
                Self::Relevance
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::RatingDesc => "rating-desc",
            Self::RatingAsc => "rating-asc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }
}

impl From<String> for SortKey {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.label().to_string()
    }
}

/// The mutable bundle of current filter and sort selections.
///
/// Defaults match everything: empty search, no category, location, or
/// size restriction, zero minimum rating, premium flag off, relevance
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    /// Lower-cased, trimmed live search input; empty means no text filter.
    pub search_text: String,
    /// Multi-select category filter; empty set means all categories pass.
    pub categories: BTreeSet<String>,
    /// Exact location match; `None` or empty means all locations pass.
    pub location: Option<String>,
    /// Exact size-class match, same convention as `location`.
    pub size: Option<String>,
    /// Lower inclusive rating bound; records strictly below are excluded.
    pub min_rating: f64,
    /// When set, only premium records pass.
    pub premium_only: bool,
    pub sort_key: SortKey,
}

impl Criteria {
    /// Normalizes and stores the live search input (trimmed, lower-cased).
    pub fn set_search_text(&mut self, input: &str) {
        self.search_text = input.trim().to_lowercase();
    }

    /// Resets every field to its match-everything default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
