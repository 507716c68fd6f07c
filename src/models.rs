//! Data structures and types for omdbtui
//!
//! Shared models used across the application:
//! - **Search**: OMDb search summaries and result pages
//! - **Detail**: the expanded record for one title
//! - **Options**: query knobs the OMDb API accepts (type, plot length)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder OMDb uses for missing values ("N/A")
pub const NOT_AVAILABLE: &str = "N/A";

/// Map the OMDb "N/A" placeholder (or an empty string) to `None`
pub fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != NOT_AVAILABLE)
}

// =============================================================================
// Media Type
// =============================================================================

/// OMDb `Type` discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
    Episode,
    Game,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MediaType {
    /// Value for the `type=` query parameter (None for Unknown)
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            MediaType::Movie => Some("movie"),
            MediaType::Series => Some("series"),
            MediaType::Episode => Some("episode"),
            MediaType::Game => Some("game"),
            MediaType::Unknown => None,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Movie => write!(f, "Movie"),
            MediaType::Series => write!(f, "Series"),
            MediaType::Episode => write!(f, "Episode"),
            MediaType::Game => write!(f, "Game"),
            MediaType::Unknown => write!(f, "?"),
        }
    }
}

/// Plot length requested from the detail endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlotLength {
    #[default]
    Short,
    Full,
}

impl PlotLength {
    pub fn as_param(&self) -> &'static str {
        match self {
            PlotLength::Short => "short",
            PlotLength::Full => "full",
        }
    }
}

// =============================================================================
// Search Models
// =============================================================================

/// One entry of an OMDb search result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultSummary {
    pub title: String,
    pub year: String,
    pub imdb_id: String,
    /// Poster URL, `None` when OMDb reports no poster
    pub poster: Option<String>,
    #[serde(default)]
    pub media_type: MediaType,
}

impl SearchResultSummary {
    pub fn has_poster(&self) -> bool {
        self.poster.is_some()
    }
}

impl fmt::Display for SearchResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

/// One page of search results, in upstream relevance order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub results: Vec<SearchResultSummary>,
    /// Total number of matches across all pages
    pub total_results: u32,
}

impl SearchPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Parameters for a search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub year: Option<u16>,
    pub media_type: Option<MediaType>,
    pub page: u32,
}

impl SearchRequest {
    /// Highest page OMDb serves
    pub const MAX_PAGE: u32 = 100;

    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            year: None,
            media_type: None,
            page: 1,
        }
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    /// Set page, clamped to 1..=100
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.clamp(1, Self::MAX_PAGE);
        self
    }

    /// Trimmed query text, `None` if nothing is left
    pub fn trimmed_query(&self) -> Option<&str> {
        let q = self.query.trim();
        (!q.is_empty()).then_some(q)
    }
}

// =============================================================================
// Detail Models
// =============================================================================

/// A rating from one source (e.g. "Rotten Tomatoes" -> "87%")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.value)
    }
}

/// Full record for one title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub media_type: MediaType,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: Option<String>,
    pub ratings: Vec<Rating>,
    pub imdb_rating: String,
    pub imdb_votes: String,
    pub metascore: Option<String>,
    pub box_office: Option<String>,
    pub total_seasons: Option<String>,
}

impl MovieDetail {
    /// IMDb rating as a number, if OMDb reported one
    pub fn imdb_score(&self) -> Option<f32> {
        self.imdb_rating.parse().ok()
    }
}

impl fmt::Display for MovieDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)?;
        if !self.runtime.is_empty() && self.runtime != NOT_AVAILABLE {
            write!(f, " - {}", self.runtime)?;
        }
        if let Some(score) = self.imdb_score() {
            write!(f, " - ⭐ {:.1}", score)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
