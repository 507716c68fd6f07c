//! OMDb (Open Movie Database) API client
//!
//! Provides title search and per-title details.
//! API docs: https://www.omdbapi.com/

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::MovieDatabase;
use crate::models::{
    available, MediaType, MovieDetail, PlotLength, Rating, SearchPage, SearchRequest,
    SearchResultSummary,
};

/// Public OMDb endpoint
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// OMDb API error types
#[derive(Error, Debug)]
pub enum OmdbError {
    /// The API answered `Response: "False"` (no match, bad id, ...)
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized (401): {0}")]
    Unauthorized(String),

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Coarse classification of an [`OmdbError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Upstream affirmatively reported no result; a normal outcome
    UpstreamNegative,
    /// Network, timeout, status, or decoding failure
    TransportFailure,
}

impl OmdbError {
    pub fn kind(&self) -> FailureKind {
        match self {
            OmdbError::NotFound(_) => FailureKind::UpstreamNegative,
            _ => FailureKind::TransportFailure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == FailureKind::UpstreamNegative
    }
}

/// Failure of a search call
pub type SearchFailure = OmdbError;

/// Failure of a detail call
pub type DetailFailure = OmdbError;

/// Connection settings injected into the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmdbConfig {
    pub endpoint_base: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl OmdbConfig {
    pub fn new(endpoint_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint_base: endpoint_base.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// OMDb API client
#[derive(Debug, Clone)]
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    /// Create a client from injected settings
    pub fn new(config: &OmdbConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.endpoint_base.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::new(&OmdbConfig::new(base_url, api_key))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}/?{params}&apikey={key}` and decode the body.
    ///
    /// A `Response: "False"` body becomes [`OmdbError::NotFound`].
    async fn get<T: DeserializeOwned>(&self, params: &str) -> Result<T, OmdbError> {
        let url = format!(
            "{}/?{}&apikey={}",
            self.base_url,
            params,
            urlencoding::encode(&self.api_key)
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                let verdict: Verdict = serde_json::from_str(&body).map_err(|e| {
                    OmdbError::InvalidResponse(format!("JSON parse error: {}", e))
                })?;
                if !verdict.is_success() {
                    let message = verdict.error.unwrap_or_else(|| "No result".to_string());
                    tracing::debug!(error = %message, "OMDb reported a negative response");
                    return Err(OmdbError::NotFound(message));
                }
                serde_json::from_str(&body)
                    .map_err(|e| OmdbError::InvalidResponse(format!("JSON parse error: {}", e)))
            }
            StatusCode::UNAUTHORIZED => {
                let message = response
                    .json::<Verdict>()
                    .await
                    .ok()
                    .and_then(|v| v.error)
                    .unwrap_or_else(|| "Invalid API key".to_string());
                Err(OmdbError::Unauthorized(message))
            }
            status => Err(OmdbError::ServerError(status.as_u16())),
        }
    }

    /// Search titles by free text (first page, no filters)
    pub async fn search(&self, query: &str) -> Result<SearchPage, OmdbError> {
        self.search_with(&SearchRequest::new(query)).await
    }

    /// Search titles with year / type / page filters
    pub async fn search_with(&self, request: &SearchRequest) -> Result<SearchPage, OmdbError> {
        let Some(query) = request.trimmed_query() else {
            return Ok(SearchPage::empty());
        };

        let mut params = format!("s={}", urlencoding::encode(query));
        if let Some(year) = request.year {
            params.push_str(&format!("&y={}", year));
        }
        if let Some(kind) = request.media_type.and_then(|t| t.as_param()) {
            params.push_str(&format!("&type={}", kind));
        }
        if request.page > 1 {
            params.push_str(&format!("&page={}", request.page));
        }

        tracing::debug!(query = %query, page = request.page, "Searching OMDb");
        let response: SearchResponse = self.get(&params).await?;
        response.into_page()
    }

    /// Get details for one title (short plot)
    pub async fn details(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        self.details_with_plot(imdb_id, PlotLength::Short).await
    }

    /// Get details for one title with the given plot length
    pub async fn details_with_plot(
        &self,
        imdb_id: &str,
        plot: PlotLength,
    ) -> Result<MovieDetail, OmdbError> {
        let mut params = format!("i={}", urlencoding::encode(imdb_id.trim()));
        if plot == PlotLength::Full {
            params.push_str("&plot=full");
        }

        tracing::debug!(imdb_id = %imdb_id, plot = plot.as_param(), "Fetching OMDb details");
        let response: DetailResponse = self.get(&params).await?;
        Ok(response.into_detail())
    }
}

#[async_trait]
impl MovieDatabase for OmdbClient {
    async fn search_page(&self, request: &SearchRequest) -> Result<SearchPage, OmdbError> {
        self.search_with(request).await
    }

    async fn movie_detail(
        &self,
        imdb_id: &str,
        plot: PlotLength,
    ) -> Result<MovieDetail, OmdbError> {
        self.details_with_plot(imdb_id, plot).await
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

/// Common envelope fields present on every OMDb response
#[derive(Debug, Deserialize)]
struct Verdict {
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl Verdict {
    fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Search")]
    search: Option<Vec<SummaryRaw>>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

impl SearchResponse {
    fn into_page(self) -> Result<SearchPage, OmdbError> {
        let raw = self
            .search
            .ok_or_else(|| OmdbError::InvalidResponse("missing Search list".into()))?;
        let results: Vec<SearchResultSummary> =
            raw.into_iter().map(SummaryRaw::into_summary).collect();
        let total_results = self
            .total_results
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or(0);

        Ok(SearchPage {
            results,
            total_results,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SummaryRaw {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Type")]
    media_type: Option<MediaType>,
}

impl SummaryRaw {
    fn into_summary(self) -> SearchResultSummary {
        SearchResultSummary {
            title: self.title,
            year: self.year,
            imdb_id: self.imdb_id,
            poster: available(self.poster),
            media_type: self.media_type.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DetailResponse {
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    year: String,
    #[serde(rename = "Type")]
    media_type: Option<MediaType>,
    #[serde(default)]
    rated: String,
    #[serde(default)]
    released: String,
    #[serde(default)]
    runtime: String,
    #[serde(default)]
    genre: String,
    #[serde(default)]
    director: String,
    #[serde(default)]
    writer: String,
    #[serde(default)]
    actors: String,
    #[serde(default)]
    plot: String,
    #[serde(default)]
    language: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    awards: String,
    poster: Option<String>,
    #[serde(default)]
    ratings: Vec<RatingRaw>,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: String,
    #[serde(rename = "imdbVotes", default)]
    imdb_votes: String,
    metascore: Option<String>,
    box_office: Option<String>,
    #[serde(rename = "totalSeasons")]
    total_seasons: Option<String>,
}

impl DetailResponse {
    fn into_detail(self) -> MovieDetail {
        MovieDetail {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            media_type: self.media_type.unwrap_or_default(),
            rated: self.rated,
            released: self.released,
            runtime: self.runtime,
            genre: self.genre,
            director: self.director,
            writer: self.writer,
            actors: self.actors,
            plot: self.plot,
            language: self.language,
            country: self.country,
            awards: self.awards,
            poster: available(self.poster),
            ratings: self.ratings.into_iter().map(RatingRaw::into_rating).collect(),
            imdb_rating: self.imdb_rating,
            imdb_votes: self.imdb_votes,
            metascore: available(self.metascore),
            box_office: available(self.box_office),
            total_seasons: available(self.total_seasons),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RatingRaw {
    #[serde(default)]
    source: String,
    #[serde(default)]
    value: String,
}

impl RatingRaw {
    fn into_rating(self) -> Rating {
        Rating {
            source: self.source,
            value: self.value,
        }
    }
}
