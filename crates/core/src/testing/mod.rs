//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the collaborator traits so a
//! whole scan can run without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use feedrater_core::testing::{fixtures, MockFeedSource, MockRatingCatalog};
//!
//! let catalog = MockRatingCatalog::new();
//! catalog.add_movie(fixtures::feature("Interstellar", 2014, Some(8.6))).await;
//!
//! let feed = MockFeedSource::new();
//! feed.set_entries(vec![fixtures::recent_entry("Interstellar.2014.1080p.WEB-DL")]).await;
//! ```

mod mock_catalog;
mod mock_feed;

pub use mock_catalog::{CatalogEntry, MockRatingCatalog, RecordedCatalogQuery};
pub use mock_feed::{MockFeedSource, RecordingBrowser};

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{DateTime, Duration, Utc};

    use super::CatalogEntry;
    use crate::catalog::{TitleDetails, TitleSearchHit, CONTENT_FEATURE};
    use crate::feed::{RawFeedEntry, TorrentRecord};

    fn slug(title: &str) -> String {
        title.to_lowercase().replace(' ', "-")
    }

    /// Catalog entry with id `<slug>-<year>` and the given content type.
    pub fn title_with_type(
        title: &str,
        year: i32,
        rating: Option<f64>,
        content_type: &str,
    ) -> CatalogEntry {
        let id = format!("{}-{}", slug(title), year);
        CatalogEntry {
            hit: TitleSearchHit {
                id: id.clone(),
                title: title.to_string(),
                year: Some(year),
            },
            details: TitleDetails {
                id,
                title: title.to_string(),
                rating,
                content_type: content_type.to_string(),
            },
        }
    }

    /// Catalog entry for a feature film.
    pub fn feature(title: &str, year: i32, rating: Option<f64>) -> CatalogEntry {
        title_with_type(title, year, rating, CONTENT_FEATURE)
    }

    /// Torrent record with links derived from the name.
    pub fn torrent_record(name: &str) -> TorrentRecord {
        TorrentRecord::new(
            name,
            format!("https://tracker.example.org/dl/{}.torrent", name),
            format!("https://tracker.example.org/t/{}", name),
        )
    }

    /// Feed entry published at `published_at`.
    pub fn entry_at(name: &str, published_at: DateTime<Utc>) -> RawFeedEntry {
        let record = torrent_record(name);
        RawFeedEntry {
            title: Some(record.name),
            link: record.download_link,
            comments: record.page_url,
            published_at: Some(published_at),
        }
    }

    /// Feed entry published an hour ago.
    pub fn recent_entry(name: &str) -> RawFeedEntry {
        entry_at(name, Utc::now() - Duration::hours(1))
    }
}
