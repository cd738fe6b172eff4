pub mod browser;
pub mod catalog;
pub mod config;
pub mod feed;
pub mod parser;
pub mod rating;
pub mod scan;
pub mod testing;

pub use browser::{BrowserOpener, SystemBrowser};
pub use catalog::{
    create_catalog, CatalogError, OmdbClient, RatingCatalog, TitleDetails, TitleSearchHit,
    TmdbClient,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogBackend, CatalogConfig, Config,
    ConfigError, SanitizedConfig,
};
pub use feed::{select, select_recent, FeedError, FeedSource, RawFeedEntry, RssFeed, TorrentRecord};
pub use parser::{extract_title_year, ParsedMovie, TitleYearParser};
pub use rating::{RatingLookup, RatingResolver, NO_RATING};
pub use scan::{InterestingMatch, RatingScanner, ScanReport, DEFAULT_MIN_RATING};
