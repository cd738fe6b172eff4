//! OMDb API client, the source of IMDb ratings.
//!
//! OMDb answers HTTP 200 for most failures and signals them through
//! `"Response": "False"` plus an `"Error"` message.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::OmdbConfig;

use super::types::{classify_movie, leading_year, TitleDetails, TitleSearchHit};
use super::{CatalogError, RatingCatalog};

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com";
const NOT_AVAILABLE: &str = "N/A";

/// OMDb API client.
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: OmdbConfig, timeout_secs: u32) -> Result<Self, CatalogError> {
        if config.api_key.is_empty() {
            return Err(CatalogError::NotConfigured(
                "OMDb API key is required".to_string(),
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

    async fn request<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(CatalogError::NotConfigured(
                "Invalid OMDb API key".to_string(),
            ));
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

        response
            .json()
            .await
            .map_err(|e| CatalogError::ParseError(format!("Failed to parse OMDb response: {}", e)))
    }
}

#[async_trait]
impl RatingCatalog for OmdbClient {
    fn name(&self) -> &str {
        "omdb"
    }

    async fn search_titles(&self, query: &str) -> Result<Vec<TitleSearchHit>, CatalogError> {
        debug!("OMDb search: query='{}'", query);

        let response: OmdbSearchResponse = self.request(&[("s", query)]).await?;

        if !response.is_ok() {
            let message = response.error.unwrap_or_default();
            // An empty result set is reported as an error by OMDb
            if message.to_lowercase().contains("not found") {
                return Ok(Vec::new());
            }
            return Err(CatalogError::ApiError {
                status: 200,
                message,
            });
        }

        Ok(response.search.into_iter().map(|r| r.into()).collect())
    }

    async fn get_title(&self, id: &str) -> Result<TitleDetails, CatalogError> {
        debug!("OMDb get title: id={}", id);

        let response: OmdbTitleResponse = self.request(&[("i", id)]).await?;

        if response.response != "True" {
            let message = response.error.unwrap_or_default();
            if message.to_lowercase().contains("incorrect imdb id") {
                return Err(CatalogError::NotFound(format!("IMDb ID {}", id)));
            }
            return Err(CatalogError::ApiError {
                status: 200,
                message,
            });
        }

        Ok(response.into_details(id))
    }
}

// ============================================================================
// OMDb API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    search: Vec<OmdbSearchResult>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbSearchResponse {
    fn is_ok(&self) -> bool {
        self.response == "True"
    }
}

#[derive(Debug, Deserialize)]
struct OmdbSearchResult {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
}

#[derive(Debug, Deserialize)]
struct OmdbTitleResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Type", default)]
    kind: String,
    #[serde(rename = "Genre", default)]
    genre: String,
    #[serde(rename = "Runtime", default)]
    runtime: String,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: String,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<OmdbSearchResult> for TitleSearchHit {
    fn from(r: OmdbSearchResult) -> Self {
        Self {
            id: r.imdb_id,
            title: r.title,
            year: leading_year(&r.year),
        }
    }
}

impl OmdbTitleResponse {
    fn into_details(self, requested_id: &str) -> TitleDetails {
        let content_type = if self.kind.eq_ignore_ascii_case("movie") {
            let genres: Vec<&str> = self.genre.split(',').map(str::trim).collect();
            classify_movie(&genres, parse_runtime_minutes(&self.runtime)).to_string()
        } else {
            self.kind.to_lowercase()
        };

        TitleDetails {
            id: self.imdb_id.unwrap_or_else(|| requested_id.to_string()),
            title: self.title,
            rating: parse_rating(&self.imdb_rating),
            content_type,
        }
    }
}

/// "8.7" -> 8.7, "N/A" -> None
fn parse_rating(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() || raw == NOT_AVAILABLE {
        return None;
    }
    raw.parse().ok()
}

/// "136 min" -> 136
fn parse_runtime_minutes(raw: &str) -> Option<u32> {
    raw.split_whitespace().next()?.parse().ok()
}
