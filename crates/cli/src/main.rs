use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feedrater_core::{
    create_catalog, load_config, validate_config, InterestingMatch, RatingScanner, RssFeed,
    SanitizedConfig, SystemBrowser,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("feedrater v{}", VERSION);

    // Determine config path
    let config_path = std::env::var("FEEDRATER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    let sanitized = SanitizedConfig::from(&config);
    info!(
        "Configuration loaded: {}",
        serde_json::to_string(&sanitized).unwrap_or_default()
    );

    // Create rating catalog
    let catalog_config = config
        .catalog
        .as_ref()
        .context("No [catalog] section configured")?;
    let catalog = create_catalog(catalog_config).context("Failed to create rating catalog")?;
    info!("Using rating catalog: {}", catalog.name());

    // Create feed source
    let feed = RssFeed::new(config.feeds.mtv_feed.clone(), config.feeds.timeout_secs)
        .context("Failed to create feed client")?;

    let mut scanner = RatingScanner::new(catalog);
    if config.scan.open_in_browser {
        info!("Matches will be opened in the default browser");
        scanner = scanner.with_browser(Arc::new(SystemBrowser));
    }

    let report = scanner
        .scan(&feed, config.scan.days_back, config.scan.min_rating)
        .await
        .with_context(|| format!("Failed to read feed {}", config.feeds.mtv_feed))?;

    for m in &report.matches {
        println!("{}", format_match(m));
    }

    info!(
        entries = report.entries_fetched,
        recent = report.recent_records,
        matches = report.matches.len(),
        "Done"
    );

    Ok(())
}

/// One stdout line per match: the catalog rating as returned, a tab, the torrent name.
fn format_match(m: &InterestingMatch) -> String {
    format!("{}\t{}", m.rating, m.torrent_name)
}
