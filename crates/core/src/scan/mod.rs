//! Scan orchestration.
//!
//! A scan walks the torrent records in feed order:
//! - **Quality gate**: names without a 720/1080 marker are dropped
//! - **Parse**: title and year are extracted from the name
//! - **Rate**: one catalog lookup per unique title, memoized for the run
//! - **Collect**: records rated at or above the threshold are reported

mod runner;
mod types;

pub use runner::RatingScanner;
pub use types::{InterestingMatch, ScanReport, DEFAULT_MIN_RATING};
