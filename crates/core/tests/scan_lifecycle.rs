//! Scan lifecycle integration tests.
//!
//! These tests drive a complete scan through the public API:
//! feed -> recency window -> quality gate -> name parsing -> rating -> matches

use std::io::Write;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tempfile::NamedTempFile;

use feedrater_core::{
    testing::{fixtures, MockFeedSource, MockRatingCatalog},
    FeedError, RatingScanner, RssFeed, TitleYearParser, TorrentRecord, DEFAULT_MIN_RATING,
};

fn scanner(catalog: &Arc<MockRatingCatalog>) -> RatingScanner {
    RatingScanner::new(Arc::clone(catalog) as Arc<dyn feedrater_core::RatingCatalog>)
        .with_parser(TitleYearParser::new(2030))
}

#[tokio::test]
async fn test_end_to_end_single_match() {
    let catalog = Arc::new(MockRatingCatalog::new());
    catalog
        .add_movie(fixtures::feature("Interstellar", 2014, Some(8.6)))
        .await;

    let feed = MockFeedSource::new();
    feed.set_entries(vec![fixtures::entry_at(
        "Interstellar.2014.1080p.WEB-DL",
        Utc::now() - Duration::hours(20),
    )])
    .await;

    let report = scanner(&catalog)
        .scan(&feed, 1, DEFAULT_MIN_RATING)
        .await
        .unwrap();

    assert_eq!(report.entries_fetched, 1);
    assert_eq!(report.recent_records, 1);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].torrent_name, "Interstellar.2014.1080p.WEB-DL");
    assert_eq!(report.matches[0].title, "Interstellar");
    assert_eq!(report.matches[0].rating, 8.6);
}

#[tokio::test]
async fn test_mixed_feed() {
    let catalog = Arc::new(MockRatingCatalog::new());
    catalog
        .add_movie(fixtures::feature("The Matrix", 1999, Some(8.7)))
        .await;
    catalog
        .add_movie(fixtures::feature("Cats", 2019, Some(2.8)))
        .await;
    catalog
        .add_movie(fixtures::title_with_type("Chernobyl", 2019, Some(9.3), "series"))
        .await;

    let now = Utc::now();
    let mut malformed = fixtures::recent_entry("No.Title.2019.1080p");
    malformed.title = None;

    let feed = MockFeedSource::new();
    feed.set_entries(vec![
        fixtures::entry_at("The.Matrix.1999.1080p.BluRay", now - Duration::hours(2)),
        fixtures::entry_at("Old.Movie.2001.1080p", now - Duration::days(5)),
        fixtures::entry_at("Cats.2019.720p.WEB", now - Duration::hours(3)),
        fixtures::entry_at("Chernobyl.2019.1080p.WEB", now - Duration::hours(4)),
        fixtures::entry_at("Heat.1995.DVDRip", now - Duration::hours(5)),
        fixtures::entry_at("Nameless.720p.x264", now - Duration::hours(6)),
        malformed,
        fixtures::entry_at("The.Matrix.1999.720p.BluRay", now - Duration::hours(7)),
    ])
    .await;

    let report = scanner(&catalog).scan(&feed, 1, 7.5).await.unwrap();

    assert_eq!(report.entries_fetched, 8);
    assert_eq!(report.recent_records, 6);

    let names: Vec<_> = report
        .matches
        .iter()
        .map(|m| m.torrent_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["The.Matrix.1999.1080p.BluRay", "The.Matrix.1999.720p.BluRay"]
    );

    // Matrix, Cats, Chernobyl; the second Matrix release is served from cache
    assert_eq!(catalog.search_count().await, 3);
}

#[tokio::test]
async fn test_same_title_different_years_share_lookup() {
    let catalog = Arc::new(MockRatingCatalog::new());
    catalog
        .add_movie(fixtures::feature("Suspiria", 1977, Some(7.4)))
        .await;
    catalog
        .add_movie(fixtures::feature("Suspiria", 2018, Some(6.7)))
        .await;

    let torrents = vec![
        fixtures::torrent_record("Suspiria.1977.1080p.BluRay"),
        fixtures::torrent_record("Suspiria.2018.1080p.BluRay"),
    ];
    let matches = scanner(&catalog).find_above_rating(&torrents, 7.0).await;

    // First occurrence's year wins for both records
    assert_eq!(catalog.search_count().await, 1);
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.rating == 7.4));
}

#[tokio::test]
async fn test_find_above_rating_is_idempotent() {
    let catalog = Arc::new(MockRatingCatalog::new());
    catalog
        .add_movie(fixtures::feature("Arrival", 2016, Some(7.9)))
        .await;
    catalog
        .add_movie(fixtures::feature("Alien", 1979, Some(8.5)))
        .await;

    let torrents = vec![
        fixtures::torrent_record("Arrival.2016.1080p"),
        fixtures::torrent_record("Unknown.2016.1080p"),
        fixtures::torrent_record("Alien.1979.720p"),
    ];
    let snapshot: Vec<TorrentRecord> = torrents.clone();

    let scanner = scanner(&catalog);
    let first = scanner.find_above_rating(&torrents, 7.5).await;
    let second = scanner.find_above_rating(&torrents, 7.5).await;

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(torrents, snapshot);
    // The cache is scoped to one call
    assert_eq!(catalog.search_count().await, 6);
}

#[tokio::test]
async fn test_lookup_failure_does_not_abort_run() {
    let catalog = Arc::new(MockRatingCatalog::new());
    catalog
        .add_movie(fixtures::feature("Alien", 1979, Some(8.5)))
        .await;
    catalog
        .set_next_error(feedrater_core::CatalogError::RateLimitExceeded)
        .await;

    let torrents = vec![
        fixtures::torrent_record("Nonexistent.Movie.Xyzzy.2020.1080p"),
        fixtures::torrent_record("Alien.1979.720p"),
    ];
    let matches = scanner(&catalog).find_above_rating(&torrents, 7.5).await;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Alien");
}

#[tokio::test]
async fn test_feed_error_is_returned() {
    let catalog = Arc::new(MockRatingCatalog::new());
    let feed = MockFeedSource::new();
    feed.set_next_error(FeedError::BadStatus { status: 500 })
        .await;

    let result = scanner(&catalog).scan(&feed, 1, 7.5).await;
    assert!(matches!(result, Err(FeedError::BadStatus { status: 500 })));
    assert_eq!(feed.fetch_count().await, 1);
}

#[tokio::test]
async fn test_scan_from_rss_file() {
    let published = (Utc::now() - Duration::hours(3)).to_rfc2822();
    let stale = (Utc::now() - Duration::days(10)).to_rfc2822();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Movies</title>
    <link>https://tracker.example.org</link>
    <description>Latest</description>
    <item>
      <title>Interstellar.2014.1080p.WEB-DL</title>
      <link>https://tracker.example.org/dl/1.torrent</link>
      <comments>https://tracker.example.org/t/1</comments>
      <pubDate>{published}</pubDate>
    </item>
    <item>
      <title>Alien.1979.1080p.BluRay</title>
      <link>https://tracker.example.org/dl/2.torrent</link>
      <comments>https://tracker.example.org/t/2</comments>
      <pubDate>{stale}</pubDate>
    </item>
  </channel>
</rss>"#
    );

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(xml.as_bytes()).unwrap();

    let catalog = Arc::new(MockRatingCatalog::new());
    catalog
        .add_movie(fixtures::feature("Interstellar", 2014, Some(8.6)))
        .await;
    catalog
        .add_movie(fixtures::feature("Alien", 1979, Some(8.5)))
        .await;

    let feed = RssFeed::new(file.path().display().to_string(), 5).unwrap();
    let report = scanner(&catalog).scan(&feed, 1, 7.5).await.unwrap();

    assert_eq!(report.entries_fetched, 2);
    assert_eq!(report.recent_records, 1);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(
        report.matches[0].download_link,
        "https://tracker.example.org/dl/1.torrent"
    );
    assert_eq!(report.matches[0].page_url, "https://tracker.example.org/t/1");
}
