use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(rename = "Feeds")]
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,
}

/// Feed sources. The section and key names match the historical
/// `[Feeds] mtvFeed` layout of existing config files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedsConfig {
    /// RSS feed URL or local file path.
    #[serde(rename = "mtvFeed")]
    pub mtv_feed: String,
    /// Request timeout in seconds when the feed is fetched over HTTP.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

/// Scan behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Only entries published within this many days are considered.
    #[serde(default = "default_days_back")]
    pub days_back: u32,
    /// Minimum rating (inclusive) for a release to be reported.
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,
    /// Open the download link of every match in the default browser.
    #[serde(default)]
    pub open_in_browser: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            days_back: default_days_back(),
            min_rating: default_min_rating(),
            open_in_browser: false,
        }
    }
}

fn default_days_back() -> u32 {
    1
}

fn default_min_rating() -> f64 {
    crate::scan::DEFAULT_MIN_RATING
}

/// Rating catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Catalog backend type
    pub backend: CatalogBackend,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// TMDB-specific configuration (required when backend = "tmdb")
    #[serde(default)]
    pub tmdb: Option<TmdbConfig>,
    /// OMDb-specific configuration (required when backend = "omdb")
    #[serde(default)]
    pub omdb: Option<OmdbConfig>,
}

/// Available rating catalogs
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CatalogBackend {
    Tmdb,
    Omdb,
}

/// TMDB (The Movie Database) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// TMDB API key (v3)
    pub api_key: String,
    /// Base URL (default: https://api.themoviedb.org/3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// OMDb (IMDb ratings) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OmdbConfig {
    /// OMDb API key
    pub api_key: String,
    /// Base URL (default: https://www.omdbapi.com)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_timeout() -> u32 {
    30
}

/// Sanitized config for logging (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub feed: String,
    pub scan: ScanConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<SanitizedCatalogConfig>,
}

/// Sanitized catalog config (API keys hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub backend: String,
    pub timeout_secs: u32,
    pub api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl CatalogBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogBackend::Tmdb => "tmdb",
            CatalogBackend::Omdb => "omdb",
        }
    }
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            feed: config.feeds.mtv_feed.clone(),
            scan: config.scan.clone(),
            catalog: config.catalog.as_ref().map(|c| {
                let (api_key, base_url) = match c.backend {
                    CatalogBackend::Tmdb => c
                        .tmdb
                        .as_ref()
                        .map(|t| (t.api_key.as_str(), t.base_url.clone()))
                        .unwrap_or(("", None)),
                    CatalogBackend::Omdb => c
                        .omdb
                        .as_ref()
                        .map(|o| (o.api_key.as_str(), o.base_url.clone()))
                        .unwrap_or(("", None)),
                };
                SanitizedCatalogConfig {
                    backend: c.backend.as_str().to_string(),
                    timeout_secs: c.timeout_secs,
                    api_key_configured: !api_key.is_empty(),
                    base_url,
                }
            }),
        }
    }
}
