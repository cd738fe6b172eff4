use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::browser::BrowserOpener;
use crate::catalog::RatingCatalog;
use crate::feed::{select_recent, FeedError, FeedSource, TorrentRecord};
use crate::parser::TitleYearParser;
use crate::rating::{RatingLookup, RatingResolver};

use super::types::{InterestingMatch, ScanReport};

/// Finds releases worth watching in a list of torrent records.
pub struct RatingScanner {
    resolver: RatingResolver,
    parser: TitleYearParser,
    browser: Option<Arc<dyn BrowserOpener>>,
}

impl RatingScanner {
    pub fn new(catalog: Arc<dyn RatingCatalog>) -> Self {
        Self {
            resolver: RatingResolver::new(catalog),
            parser: TitleYearParser::default(),
            browser: None,
        }
    }

    /// Replace the name parser (e.g. to pin the current year).
    pub fn with_parser(mut self, parser: TitleYearParser) -> Self {
        self.parser = parser;
        self
    }

    /// Open the download link of every match with `browser`.
    pub fn with_browser(mut self, browser: Arc<dyn BrowserOpener>) -> Self {
        self.browser = Some(browser);
        self
    }

    /// Rate every HD record and keep those with `rating >= min_rating`.
    ///
    /// Each distinct title is looked up once per call; later records with the
    /// same title reuse the first lookup, including "no rating" outcomes.
    /// Matches keep the input order.
    pub async fn find_above_rating(
        &self,
        torrents: &[TorrentRecord],
        min_rating: f64,
    ) -> Vec<InterestingMatch> {
        let mut checked: HashMap<String, RatingLookup> = HashMap::new();
        let mut matches = Vec::new();

        for torrent in torrents {
            if !torrent.is_hi_def() {
                debug!("Skipping non-HD release {}", torrent.name);
                continue;
            }

            let Some(movie) = self.parser.extract(&torrent.name) else {
                continue;
            };

            let lookup = match checked.get(&movie.title) {
                Some(lookup) => lookup.clone(),
                None => {
                    let lookup = self
                        .resolver
                        .resolve_rating(&movie.title, Some(movie.year))
                        .await;
                    checked.insert(movie.title.clone(), lookup.clone());
                    lookup
                }
            };

            if lookup.rating >= min_rating {
                info!(
                    rating = lookup.rating,
                    "The movie {} in this torrent: {}", movie.title, torrent.name
                );
                if let Some(browser) = &self.browser {
                    if let Err(e) = browser.open(&torrent.download_link) {
                        warn!("Failed to open {} in browser: {}", torrent.download_link, e);
                    }
                }
                matches.push(InterestingMatch {
                    torrent_name: torrent.name.clone(),
                    title: movie.title,
                    year: movie.year,
                    rating: lookup.rating,
                    matched_id: lookup.matched_id,
                    download_link: torrent.download_link.clone(),
                    page_url: torrent.page_url.clone(),
                });
            }
        }

        info!(
            records = torrents.len(),
            titles_checked = checked.len(),
            matches = matches.len(),
            "Rating scan complete"
        );

        matches
    }

    /// Fetch `feed`, keep the last `days_back` days and run [`Self::find_above_rating`].
    pub async fn scan(
        &self,
        feed: &dyn FeedSource,
        days_back: u32,
        min_rating: f64,
    ) -> Result<ScanReport, FeedError> {
        info!(
            feed = %feed.location(),
            catalog = %self.resolver.catalog_name(),
            days_back,
            min_rating,
            "Starting scan"
        );

        let entries = feed.fetch().await?;
        let records = select_recent(&entries, days_back);
        debug!(
            entries = entries.len(),
            recent = records.len(),
            "Applied recency window"
        );

        let matches = self.find_above_rating(&records, min_rating).await;

        Ok(ScanReport {
            entries_fetched: entries.len(),
            recent_records: records.len(),
            matches,
        })
    }
}
