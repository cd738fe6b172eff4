//! Rating catalogs: title search and title details.
//!
//! Two backends are provided: TMDB (community vote average) and OMDb
//! (IMDb rating). Both are exposed through the [`RatingCatalog`] trait so the
//! resolver never knows which one it talks to.

mod omdb;
mod tmdb;
mod types;

pub use omdb::OmdbClient;
pub use tmdb::TmdbClient;
pub use types::*;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{CatalogBackend, CatalogConfig};

/// Errors that can occur when interacting with a rating catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for rating catalogs.
#[async_trait]
pub trait RatingCatalog: Send + Sync {
    /// Backend name, for log messages.
    fn name(&self) -> &str;

    /// Search titles by free text. Results keep the catalog's relevance order.
    async fn search_titles(&self, query: &str) -> Result<Vec<TitleSearchHit>, CatalogError>;

    /// Fetch rating and content type for a catalog id.
    async fn get_title(&self, id: &str) -> Result<TitleDetails, CatalogError>;
}

/// Build the catalog client selected by `config.backend`.
pub fn create_catalog(config: &CatalogConfig) -> Result<Arc<dyn RatingCatalog>, CatalogError> {
    match config.backend {
        CatalogBackend::Tmdb => {
            let tmdb = config.tmdb.clone().ok_or_else(|| {
                CatalogError::NotConfigured("missing [catalog.tmdb] section".to_string())
            })?;
            Ok(Arc::new(TmdbClient::new(tmdb, config.timeout_secs)?))
        }
        CatalogBackend::Omdb => {
            let omdb = config.omdb.clone().ok_or_else(|| {
                CatalogError::NotConfigured("missing [catalog.omdb] section".to_string())
            })?;
            Ok(Arc::new(OmdbClient::new(omdb, config.timeout_secs)?))
        }
    }
}
