pub mod config;
pub mod error;

pub use config::{
    CatalogConfig, Config, FavoritesConfig, LocationConfig, ValidationResult, WeatherConfig,
};
pub use error::{AppError, LocationError, StorageError, WeatherError};

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered cards.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("poiview core initialized");
    Ok(())
}
