//! Rating resolution: title search, year disambiguation and type filter.

mod resolver;

pub use resolver::{pick_best_hit, RatingLookup, RatingResolver, NO_RATING, YEAR_TOLERANCE};
