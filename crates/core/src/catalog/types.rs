//! Catalog-neutral search and detail types.

use serde::{Deserialize, Serialize};

/// Content type of a feature film.
pub const CONTENT_FEATURE: &str = "feature";
/// Content type of a documentary.
pub const CONTENT_DOCUMENTARY: &str = "documentary";
/// Content type of a short film.
pub const CONTENT_SHORT: &str = "short";

/// Films at or under this runtime are classified as shorts.
pub const SHORT_FILM_MAX_MINUTES: u32 = 40;

/// One hit from a title search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleSearchHit {
    /// Opaque catalog identifier (TMDB id, IMDb id).
    pub id: String,
    pub title: String,
    /// Release year, when the catalog knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Full details for a single title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleDetails {
    pub id: String,
    pub title: String,
    /// Rating on a 0-10 scale; `None` when the catalog has no usable rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Classification such as "feature", "documentary", "short", "series".
    pub content_type: String,
}

impl TitleDetails {
    /// Only feature films and documentaries are rated.
    pub fn is_feature_or_documentary(&self) -> bool {
        self.content_type.eq_ignore_ascii_case(CONTENT_FEATURE)
            || self.content_type.eq_ignore_ascii_case(CONTENT_DOCUMENTARY)
    }
}

/// Classify a movie entry from its genres and runtime.
pub fn classify_movie<S: AsRef<str>>(genres: &[S], runtime_minutes: Option<u32>) -> &'static str {
    if genres
        .iter()
        .any(|g| g.as_ref().trim().eq_ignore_ascii_case("documentary"))
    {
        CONTENT_DOCUMENTARY
    } else if matches!(runtime_minutes, Some(m) if m > 0 && m <= SHORT_FILM_MAX_MINUTES) {
        CONTENT_SHORT
    } else {
        CONTENT_FEATURE
    }
}

/// Leading four-digit year of a date-ish string ("1999-03-30", "2008–2013").
pub(crate) fn leading_year(value: &str) -> Option<i32> {
    let digits = value.trim().get(..4)?;
    if digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(content_type: &str) -> TitleDetails {
        TitleDetails {
            id: "1".to_string(),
            title: "Test".to_string(),
            rating: Some(7.0),
            content_type: content_type.to_string(),
        }
    }

    #[test]
    fn test_is_feature_or_documentary_case_insensitive() {
        assert!(details("feature").is_feature_or_documentary());
        assert!(details("Feature").is_feature_or_documentary());
        assert!(details("DOCUMENTARY").is_feature_or_documentary());
        assert!(!details("short").is_feature_or_documentary());
        assert!(!details("series").is_feature_or_documentary());
        assert!(!details("episode").is_feature_or_documentary());
    }

    #[test]
    fn test_classify_movie() {
        assert_eq!(classify_movie(&["Drama"], Some(120)), CONTENT_FEATURE);
        assert_eq!(classify_movie(&["Documentary"], Some(90)), CONTENT_DOCUMENTARY);
        assert_eq!(classify_movie(&["Animation"], Some(7)), CONTENT_SHORT);
        assert_eq!(classify_movie(&["Documentary"], Some(20)), CONTENT_DOCUMENTARY);
        assert_eq!(classify_movie::<&str>(&[], None), CONTENT_FEATURE);
        // Unknown runtime reported as zero is not a short
        assert_eq!(classify_movie(&["Drama"], Some(0)), CONTENT_FEATURE);
    }

    #[test]
    fn test_leading_year() {
        assert_eq!(leading_year("1999-03-30"), Some(1999));
        assert_eq!(leading_year("2008–2013"), Some(2008));
        assert_eq!(leading_year("2014"), Some(2014));
        assert_eq!(leading_year(""), None);
        assert_eq!(leading_year("N/A"), None);
        assert_eq!(leading_year("19"), None);
    }
}
