use super::{
    types::{CatalogBackend, Config},
    ConfigError,
};

/// Validate configuration
/// Currently validates:
/// - Feed location is not empty
/// - Minimum rating lies within [0, 10]
/// - A catalog is configured and the selected backend has an API key
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.feeds.mtv_feed.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Feeds.mtvFeed cannot be empty".to_string(),
        ));
    }

    let min_rating = config.scan.min_rating;
    if !(0.0..=10.0).contains(&min_rating) {
        return Err(ConfigError::ValidationError(format!(
            "scan.min_rating must be between 0 and 10, got {}",
            min_rating
        )));
    }

    let catalog = config.catalog.as_ref().ok_or_else(|| {
        ConfigError::ValidationError("a [catalog] section is required".to_string())
    })?;

    let api_key = match catalog.backend {
        CatalogBackend::Tmdb => catalog.tmdb.as_ref().map(|t| t.api_key.as_str()),
        CatalogBackend::Omdb => catalog.omdb.as_ref().map(|o| o.api_key.as_str()),
    };
    match api_key {
        None => Err(ConfigError::ValidationError(format!(
            "catalog.backend is \"{0}\" but no [catalog.{0}] section was provided",
            catalog.backend.as_str()
        ))),
        Some(key) if key.trim().is_empty() => Err(ConfigError::ValidationError(format!(
            "catalog.{}.api_key cannot be empty",
            catalog.backend.as_str()
        ))),
        Some(_) => Ok(()),
    }
}
