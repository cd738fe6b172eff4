//! Title and release year extraction.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::segments::{split_four_digit_runs, Segment};

/// Oldest release year accepted as plausible.
pub const MIN_VALID_YEAR: i32 = 1905;

/// A movie title and release year pulled out of a torrent name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedMovie {
    pub title: String,
    pub year: i32,
}

/// Scan position while walking the segments of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Skipping empty segments until the title starts.
    SeekTitleStart,
    /// Looking at the segment right after the title start; appended unless it is the year.
    AccumulateTitle,
    /// Only a valid year is of interest now.
    SeekYear,
}

/// Parser carrying the valid year window `[MIN_VALID_YEAR, max_year]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleYearParser {
    max_year: i32,
}

impl Default for TitleYearParser {
    fn default() -> Self {
        Self::new(Local::now().year())
    }
}

impl TitleYearParser {
    /// Parser accepting years up to and including `current_year`.
    pub fn new(current_year: i32) -> Self {
        Self {
            max_year: current_year,
        }
    }

    pub fn is_valid_year(&self, year: i32) -> bool {
        (MIN_VALID_YEAR..=self.max_year).contains(&year)
    }

    fn accepted_year(&self, segment: &Segment<'_>) -> Option<i32> {
        segment.year_candidate().filter(|y| self.is_valid_year(*y))
    }

    /// Extract `(title, year)` from a torrent name.
    ///
    /// Returns `None` (and logs a warning) when the name has no four-digit
    /// run, when no run after the title start is a valid year, or when the
    /// title is blank after cleanup.
    pub fn extract(&self, name: &str) -> Option<ParsedMovie> {
        let segments = split_four_digit_runs(name);
        if segments.len() <= 1 {
            warn!("Unable to extract year from {}", name);
            return None;
        }

        let mut state = ScanState::SeekTitleStart;
        let mut title = String::new();
        let mut year = None;

        for segment in &segments {
            match state {
                ScanState::SeekTitleStart => {
                    if !segment.is_empty() {
                        title.push_str(segment.as_str());
                        state = ScanState::AccumulateTitle;
                    }
                }
                ScanState::AccumulateTitle => {
                    if let Some(y) = self.accepted_year(segment) {
                        year = Some(y);
                        break;
                    }
                    title.push_str(segment.as_str());
                    state = ScanState::SeekYear;
                }
                ScanState::SeekYear => {
                    if let Some(y) = self.accepted_year(segment) {
                        year = Some(y);
                        break;
                    }
                }
            }
        }

        let Some(year) = year else {
            warn!("Unable to extract year from {}", name);
            return None;
        };

        let title = title.replace('.', " ").trim().to_string();
        if title.is_empty() {
            warn!("Unable to extract title from {}", name);
            return None;
        }

        Some(ParsedMovie { title, year })
    }
}

/// Extract `(title, year)` using the current calendar year as upper bound.
pub fn extract_title_year(name: &str) -> Option<ParsedMovie> {
    TitleYearParser::default().extract(name)
}
