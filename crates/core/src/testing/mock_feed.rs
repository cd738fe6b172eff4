//! Mock feed source and browser for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

use crate::browser::BrowserOpener;
use crate::feed::{FeedError, FeedSource, RawFeedEntry};

/// Mock implementation of the FeedSource trait.
#[derive(Debug)]
pub struct MockFeedSource {
    entries: Arc<RwLock<Vec<RawFeedEntry>>>,
    fetch_count: Arc<RwLock<usize>>,
    next_error: Arc<RwLock<Option<FeedError>>>,
}

impl Default for MockFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            fetch_count: Arc::new(RwLock::new(0)),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the feed contents.
    pub async fn set_entries(&self, entries: Vec<RawFeedEntry>) {
        *self.entries.write().await = entries;
    }

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_error(&self, error: FeedError) {
        *self.next_error.write().await = Some(error);
    }

    pub async fn fetch_count(&self) -> usize {
        *self.fetch_count.read().await
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    fn location(&self) -> &str {
        "mock://feed"
    }

    async fn fetch(&self) -> Result<Vec<RawFeedEntry>, FeedError> {
        *self.fetch_count.write().await += 1;

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        Ok(self.entries.read().await.clone())
    }
}

/// Browser opener that only remembers the URLs it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingBrowser {
    opened: Mutex<Vec<String>>,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, in call order.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl BrowserOpener for RecordingBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.to_string());
        }
        Ok(())
    }
}
