//! Recency window over raw feed entries.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::{RawFeedEntry, TorrentRecord};

/// Substrings that mark a release as high definition.
pub const HD_MARKERS: [&str; 2] = ["720", "1080"];

/// Keep entries published strictly after `now - days_back` days.
///
/// Entries without a title or timestamp are skipped without complaint.
/// Input order is preserved. A window reaching past the earliest
/// representable date keeps every timestamped entry.
pub fn select(entries: &[RawFeedEntry], days_back: u32, now: DateTime<Utc>) -> Vec<TorrentRecord> {
    let cutoff = Duration::try_days(i64::from(days_back)).and_then(|d| now.checked_sub_signed(d));

    entries
        .iter()
        .filter_map(|entry| {
            let (Some(title), Some(published_at)) = (&entry.title, entry.published_at) else {
                debug!(link = %entry.link, "Skipping feed entry without title or timestamp");
                return None;
            };
            if cutoff.map_or(true, |cutoff| published_at > cutoff) {
                Some(TorrentRecord::new(
                    title.clone(),
                    entry.link.clone(),
                    entry.comments.clone(),
                ))
            } else {
                None
            }
        })
        .collect()
}

/// [`select`] against the current wall clock.
pub fn select_recent(entries: &[RawFeedEntry], days_back: u32) -> Vec<TorrentRecord> {
    select(entries, days_back, Utc::now())
}
