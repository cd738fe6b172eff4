use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::filter::HD_MARKERS;

/// A feed item as handed over by the feed collaborator.
///
/// `title` and `published_at` are optional because real feeds contain
/// malformed items; those are skipped by the recency filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFeedEntry {
    pub title: Option<String>,
    /// Download URL (`<link>`).
    #[serde(default)]
    pub link: String,
    /// Detail page URL (`<comments>`).
    #[serde(default)]
    pub comments: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// A release candidate that passed the recency window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentRecord {
    pub name: String,
    pub download_link: String,
    pub page_url: String,
}

impl TorrentRecord {
    pub fn new(
        name: impl Into<String>,
        download_link: impl Into<String>,
        page_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            download_link: download_link.into(),
            page_url: page_url.into(),
        }
    }

    /// Coarse quality gate: plain substring search for a resolution tag.
    ///
    /// Not token-aware, so `"71080p"` passes as well.
    pub fn is_hi_def(&self) -> bool {
        HD_MARKERS.iter().any(|marker| self.name.contains(marker))
    }
}
