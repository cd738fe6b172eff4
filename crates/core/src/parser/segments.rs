//! Split-with-capture on runs of four ASCII digits.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static FOUR_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}").expect("four-digit pattern is valid"));

/// A piece of a torrent name after splitting on four-digit runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text between digit runs (possibly empty).
    Text(&'a str),
    /// Exactly four digits.
    Digits(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(s) | Segment::Digits(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// The `[1-2][0-9]{3}` shape; range checks happen in the parser.
    pub fn year_candidate(&self) -> Option<i32> {
        match self {
            Segment::Digits(s) if s.starts_with(['1', '2']) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Split `name` on every run of four consecutive digits, keeping the runs.
///
/// Text and digit segments alternate, starting and ending with a (possibly
/// empty) text segment, so a name with `n` runs yields `2n + 1` segments.
/// Longer digit sequences are cut left to right: `"12345"` gives
/// `["", "1234", "5"]`.
pub fn split_four_digit_runs(name: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in FOUR_DIGITS.find_iter(name) {
        segments.push(Segment::Text(&name[last..m.start()]));
        segments.push(Segment::Digits(m.as_str()));
        last = m.end();
    }
    segments.push(Segment::Text(&name[last..]));

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(name: &str) -> Vec<&str> {
        split_four_digit_runs(name)
            .iter()
            .map(|s| s.as_str())
            .collect()
    }

    #[test]
    fn test_split_no_digits() {
        assert_eq!(strs("No.Year.Here.720p"), vec!["No.Year.Here.720p"]);
    }

    #[test]
    fn test_split_typical_name() {
        assert_eq!(
            strs("The.Matrix.1999.1080p.BluRay"),
            vec!["The.Matrix.", "1999", ".", "1080", "p.BluRay"]
        );
    }

    #[test]
    fn test_split_leading_digits() {
        assert_eq!(
            strs("2001 A Space Odyssey 1968 720p"),
            vec!["", "2001", " A Space Odyssey ", "1968", " 720p"]
        );
    }

    #[test]
    fn test_split_long_digit_run() {
        assert_eq!(strs("12345"), vec!["", "1234", "5"]);
        assert_eq!(strs("19992000"), vec!["", "1999", "", "2000", ""]);
    }

    #[test]
    fn test_segment_kinds() {
        let segments = split_four_digit_runs("Heat.1995.");
        assert_eq!(
            segments,
            vec![
                Segment::Text("Heat."),
                Segment::Digits("1995"),
                Segment::Text(".")
            ]
        );
    }

    #[test]
    fn test_year_candidate_shape() {
        assert_eq!(Segment::Digits("1999").year_candidate(), Some(1999));
        assert_eq!(Segment::Digits("2999").year_candidate(), Some(2999));
        assert_eq!(Segment::Digits("0999").year_candidate(), None);
        assert_eq!(Segment::Digits("3000").year_candidate(), None);
        assert_eq!(Segment::Text("1999x").year_candidate(), None);
    }
}
