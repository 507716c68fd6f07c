//! API clients for external services
//!
//! - OMDb: movie search and per-title details

pub mod omdb;

use async_trait::async_trait;

use crate::models::{MovieDetail, PlotLength, SearchPage, SearchRequest};

pub use omdb::{DetailFailure, FailureKind, OmdbClient, OmdbConfig, OmdbError, SearchFailure};

/// A source of search results and title details.
///
/// Implemented by [`OmdbClient`]; tests substitute in-memory doubles.
#[async_trait]
pub trait MovieDatabase: Send + Sync {
    /// Fetch one page of search results
    async fn search_page(&self, request: &SearchRequest) -> Result<SearchPage, OmdbError>;

    /// Fetch the full record for one identifier
    async fn movie_detail(&self, imdb_id: &str, plot: PlotLength)
        -> Result<MovieDetail, OmdbError>;
}
