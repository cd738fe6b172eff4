//! Mock rating catalog for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, RatingCatalog, TitleDetails, TitleSearchHit};

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCatalogQuery {
    Search { query: String },
    GetTitle { id: String },
}

/// A title known to the mock: what search returns plus what details return.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub hit: TitleSearchHit,
    pub details: TitleDetails,
}

/// Mock implementation of the RatingCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable search hits and title details
/// - Track queries for assertions
/// - Simulate failures
///
/// Search is a case-insensitive substring match on the hit title and returns
/// hits in insertion order.
///
/// # Example
///
/// ```rust,ignore
/// use feedrater_core::testing::{fixtures, MockRatingCatalog};
///
/// let catalog = MockRatingCatalog::new();
/// catalog.add_movie(fixtures::feature("Heat", 1995, Some(8.3))).await;
///
/// let hits = catalog.search_titles("heat").await?;
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Debug)]
pub struct MockRatingCatalog {
    /// Search hits in insertion order.
    hits: Arc<RwLock<Vec<TitleSearchHit>>>,
    /// Title details by id.
    details: Arc<RwLock<HashMap<String, TitleDetails>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedCatalogQuery>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl Default for MockRatingCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRatingCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self {
            hits: Arc::new(RwLock::new(Vec::new())),
            details: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Add a searchable title with details.
    pub async fn add_movie(&self, entry: CatalogEntry) {
        self.hits.write().await.push(entry.hit);
        self.details
            .write()
            .await
            .insert(entry.details.id.clone(), entry.details);
    }

    /// Add a search hit without details (detail lookups for it fail).
    pub async fn add_search_hit(&self, hit: TitleSearchHit) {
        self.hits.write().await.push(hit);
    }

    /// Remove every configured title.
    pub async fn clear(&self) {
        self.hits.write().await.clear();
        self.details.write().await.clear();
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedCatalogQuery> {
        self.queries.read().await.clone()
    }

    /// Number of title searches performed.
    pub async fn search_count(&self) -> usize {
        self.queries
            .read()
            .await
            .iter()
            .filter(|q| matches!(q, RecordedCatalogQuery::Search { .. }))
            .count()
    }

    /// Number of detail lookups performed.
    pub async fn detail_count(&self) -> usize {
        self.queries
            .read()
            .await
            .iter()
            .filter(|q| matches!(q, RecordedCatalogQuery::GetTitle { .. }))
            .count()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }

    async fn record(&self, query: RecordedCatalogQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl RatingCatalog for MockRatingCatalog {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search_titles(&self, query: &str) -> Result<Vec<TitleSearchHit>, CatalogError> {
        self.record(RecordedCatalogQuery::Search {
            query: query.to_string(),
        })
        .await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        let query_lower = query.to_lowercase();
        Ok(self
            .hits
            .read()
            .await
            .iter()
            .filter(|h| h.title.to_lowercase().contains(&query_lower))
            .cloned()
            .collect())
    }

    async fn get_title(&self, id: &str) -> Result<TitleDetails, CatalogError> {
        self.record(RecordedCatalogQuery::GetTitle { id: id.to_string() })
            .await;

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.details
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Title {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_search_is_substring_and_ordered() {
        let catalog = MockRatingCatalog::new();
        catalog.add_movie(fixtures::feature("Heat", 1995, Some(8.3))).await;
        catalog.add_movie(fixtures::feature("Alien", 1979, Some(8.5))).await;
        catalog.add_movie(fixtures::feature("Heat Wave", 2022, Some(6.0))).await;

        let hits = catalog.search_titles("heat").await.unwrap();
        let ids: Vec<_> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["heat-1995", "heat-wave-2022"]);
    }

    #[tokio::test]
    async fn test_error_injection_and_recording() {
        let catalog = MockRatingCatalog::new();
        catalog.set_next_error(CatalogError::RateLimitExceeded).await;

        assert!(catalog.search_titles("x").await.is_err());
        assert!(catalog.search_titles("x").await.is_ok());
        assert!(catalog.get_title("missing").await.is_err());

        assert_eq!(catalog.search_count().await, 2);
        assert_eq!(catalog.detail_count().await, 1);
        assert_eq!(
            catalog.recorded_queries().await[2],
            RecordedCatalogQuery::GetTitle {
                id: "missing".to_string()
            }
        );
    }
}
