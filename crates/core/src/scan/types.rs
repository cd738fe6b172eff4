use serde::{Deserialize, Serialize};

/// Default reporting threshold.
pub const DEFAULT_MIN_RATING: f64 = 7.5;

/// A release whose movie is rated at or above the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestingMatch {
    pub torrent_name: String,
    pub title: String,
    pub year: i32,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_id: Option<String>,
    pub download_link: String,
    pub page_url: String,
}

/// Summary of one complete scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Entries returned by the feed, malformed ones included.
    pub entries_fetched: usize,
    /// Records inside the recency window.
    pub recent_records: usize,
    pub matches: Vec<InterestingMatch>,
}
