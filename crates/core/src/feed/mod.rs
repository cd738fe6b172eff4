//! Feed collaborator: raw RSS entries, torrent records and the recency filter.
//!
//! Fetching and XML parsing live in [`RssFeed`]; everything downstream works
//! on plain [`RawFeedEntry`] values so it can be fed from fixtures in tests.

mod filter;
mod rss_feed;
mod types;

pub use filter::{select, select_recent, HD_MARKERS};
pub use rss_feed::{parse_channel, RssFeed};
pub use types::{RawFeedEntry, TorrentRecord};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when fetching or parsing a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Feed server answered with a non-success status.
    #[error("Feed returned HTTP {status}")]
    BadStatus { status: u16 },

    /// Local feed file could not be read.
    #[error("Failed to read feed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Body is not a valid RSS document.
    #[error("Failed to parse feed: {0}")]
    ParseError(String),
}

/// Source of raw feed entries.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable location, used in log messages.
    fn location(&self) -> &str;

    /// Fetch every entry currently in the feed, in document order.
    async fn fetch(&self) -> Result<Vec<RawFeedEntry>, FeedError>;
}
