//! Torrent name parsing.
//!
//! Release names look like `The.Matrix.1999.1080p.BluRay.x264-GROUP`: the
//! title comes first, then the release year, then release metadata. The
//! parser only needs the first plausible year after the title start; the
//! title is whatever precedes it.
//!
//! Known limitation: a year-like number inside the title that precedes the
//! real release year ends the title early.

mod segments;
mod title_year;

pub use segments::{split_four_digit_runs, Segment};
pub use title_year::{extract_title_year, ParsedMovie, TitleYearParser, MIN_VALID_YEAR};
