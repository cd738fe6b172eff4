//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use crate::config::TmdbConfig;

use super::types::{classify_movie, leading_year, TitleDetails, TitleSearchHit};
use super::{CatalogError, RatingCatalog};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig, timeout_secs: u32) -> Result<Self, CatalogError> {
        if config.api_key.is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs as u64))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    async fn check_status(response: Response, what: &str) -> Result<Response, CatalogError> {
        let status = response.status();
        if status == 401 {
            return Err(CatalogError::NotConfigured(
                "Invalid TMDB API key".to_string(),
            ));
        }
        if status == 404 {
            return Err(CatalogError::NotFound(what.to_string()));
        }
        if status == 429 {
            return Err(CatalogError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl RatingCatalog for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn search_titles(&self, query: &str) -> Result<Vec<TitleSearchHit>, CatalogError> {
        let url = format!("{}/search/movie", self.base_url);

        debug!("TMDB movie search: query='{}'", query);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?;
        let response = Self::check_status(response, &format!("search '{}'", query)).await?;

        let search_result: TmdbSearchResponse = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse movie search response: {}", e))
        })?;

        Ok(search_result
            .results
            .into_iter()
            .map(|r| r.into())
            .collect())
    }

    async fn get_title(&self, id: &str) -> Result<TitleDetails, CatalogError> {
        let url = format!("{}/movie/{}", self.base_url, id);

        debug!("TMDB get movie: id={}", id);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        let response = Self::check_status(response, &format!("Movie ID {}", id)).await?;

        let movie: TmdbMovieDetails = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse movie response: {}", e))
        })?;

        Ok(movie.into())
    }
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    #[serde(default)]
    results: Vec<TmdbMovieResult>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieResult {
    id: u32,
    title: String,
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieDetails {
    id: u32,
    title: String,
    runtime: Option<u32>,
    #[serde(default)]
    genres: Vec<TmdbGenre>,
    vote_average: Option<f64>,
    #[serde(default)]
    vote_count: u32,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    name: String,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<TmdbMovieResult> for TitleSearchHit {
    fn from(r: TmdbMovieResult) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title,
            year: r.release_date.as_deref().and_then(leading_year),
        }
    }
}

impl From<TmdbMovieDetails> for TitleDetails {
    fn from(d: TmdbMovieDetails) -> Self {
        let genres: Vec<String> = d.genres.into_iter().map(|g| g.name).collect();
        Self {
            id: d.id.to_string(),
            title: d.title,
            // TMDB reports 0.0 for titles nobody voted on yet
            rating: d.vote_average.filter(|_| d.vote_count > 0),
            content_type: classify_movie(&genres, d.runtime).to_string(),
        }
    }
}
