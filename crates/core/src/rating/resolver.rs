use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::{RatingCatalog, TitleSearchHit};

/// Sentinel rating meaning "no usable rating was obtained".
pub const NO_RATING: f64 = 0.0;

/// A search hit matches when its year is within this many years of the
/// year parsed from the torrent name.
pub const YEAR_TOLERANCE: i32 = 2;

/// Outcome of a rating lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingLookup {
    /// Rating on a 0-10 scale, or [`NO_RATING`].
    pub rating: f64,
    /// Catalog id of the matched title, when one was accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_id: Option<String>,
}

impl RatingLookup {
    pub fn no_rating() -> Self {
        Self {
            rating: NO_RATING,
            matched_id: None,
        }
    }

    fn rated(rating: f64, matched_id: String) -> Self {
        Self {
            rating,
            matched_id: Some(matched_id),
        }
    }
}

/// Choose the search hit to rate.
///
/// Without a year the first hit wins. With a year, the first hit (in catalog
/// order) whose own year lies within [`YEAR_TOLERANCE`] wins; hits without a
/// year never match.
pub fn pick_best_hit(hits: &[TitleSearchHit], year: Option<i32>) -> Option<&TitleSearchHit> {
    match year {
        None => hits.first(),
        Some(year) => hits.iter().find(|hit| {
            hit.year
                .is_some_and(|hit_year| (hit_year - year).abs() <= YEAR_TOLERANCE)
        }),
    }
}

/// Resolves ratings against a [`RatingCatalog`].
///
/// Every failure is logged and degrades to [`NO_RATING`]; nothing is returned
/// as an error.
pub struct RatingResolver {
    catalog: Arc<dyn RatingCatalog>,
}

impl RatingResolver {
    pub fn new(catalog: Arc<dyn RatingCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog_name(&self) -> &str {
        self.catalog.name()
    }

    /// Look up the rating of `title`, disambiguated by `year`.
    pub async fn resolve_rating(&self, title: &str, year: Option<i32>) -> RatingLookup {
        let hits = match self.catalog.search_titles(title).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!("Could not find the title {}: {}", title, e);
                return RatingLookup::no_rating();
            }
        };

        let Some(best_hit) = pick_best_hit(&hits, year) else {
            warn!(
                candidates = hits.len(),
                "Could not get match for {} ({:?})", title, year
            );
            return RatingLookup::no_rating();
        };

        info!(
            title = %title,
            year = ?year,
            matched = %best_hit.title,
            matched_year = ?best_hit.year,
            id = %best_hit.id,
            "Matched title"
        );

        let details = match self.catalog.get_title(&best_hit.id).await {
            Ok(details) => details,
            Err(e) => {
                warn!("Could not fetch details for {} ({}): {}", title, best_hit.id, e);
                return RatingLookup::no_rating();
            }
        };

        if !details.is_feature_or_documentary() {
            warn!(
                content_type = %details.content_type,
                "This is not a feature film or documentary: {}", title
            );
            return RatingLookup::no_rating();
        }

        match details.rating {
            Some(rating) => RatingLookup::rated(rating, details.id),
            None => {
                warn!("Could not get rating for title {}", details.title);
                RatingLookup::no_rating()
            }
        }
    }
}
