//! RSS 2.0 feed source backed by the `rss` crate.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::debug;

use super::{FeedError, FeedSource, RawFeedEntry};

/// Feed source reading an RSS document from a URL or a local file.
///
/// Only RSS 2.0 is understood. Item dates come from `<pubDate>`, falling back
/// to Dublin Core `<dc:date>`; Atom feeds are rejected as parse errors.
pub struct RssFeed {
    client: Client,
    location: String,
}

impl RssFeed {
    /// Create a new feed source.
    ///
    /// `location` is fetched over HTTP when it starts with `http://` or
    /// `https://`, otherwise it is read as a file path.
    pub fn new(location: impl Into<String>, timeout_secs: u32) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            location: location.into(),
        })
    }

    fn is_remote(&self) -> bool {
        self.location.starts_with("http://") || self.location.starts_with("https://")
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, FeedError> {
        if self.is_remote() {
            let response = self.client.get(&self.location).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FeedError::BadStatus {
                    status: status.as_u16(),
                });
            }
            Ok(response.bytes().await?.to_vec())
        } else {
            tokio::fs::read(&self.location)
                .await
                .map_err(|source| FeedError::Io {
                    path: self.location.clone(),
                    source,
                })
        }
    }
}

#[async_trait]
impl FeedSource for RssFeed {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Vec<RawFeedEntry>, FeedError> {
        debug!(location = %self.location, "Fetching feed");
        let bytes = self.read_bytes().await?;
        let entries = parse_channel(&bytes)?;
        debug!(entries = entries.len(), "Feed parsed");
        Ok(entries)
    }
}

/// Parse an RSS document into raw entries.
///
/// Items keep their document order. Missing `<link>`/`<comments>` become empty
/// strings. The timestamp is `<pubDate>`, else the first parseable
/// `<dc:date>`, else `None`.
pub fn parse_channel(bytes: &[u8]) -> Result<Vec<RawFeedEntry>, FeedError> {
    let channel =
        ::rss::Channel::read_from(bytes).map_err(|e| FeedError::ParseError(e.to_string()))?;

    Ok(channel
        .items()
        .iter()
        .map(|item| RawFeedEntry {
            title: item.title().map(str::to_string),
            link: item.link().unwrap_or_default().to_string(),
            comments: item.comments().unwrap_or_default().to_string(),
            published_at: item_date(item),
        })
        .collect())
}

fn item_date(item: &::rss::Item) -> Option<DateTime<Utc>> {
    item.pub_date().and_then(parse_pub_date).or_else(|| {
        item.dublin_core_ext()
            .and_then(|dc| dc.dates().iter().find_map(|d| parse_pub_date(d)))
    })
}

/// RSS dates are RFC 2822; some generators emit RFC 3339 instead.
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
