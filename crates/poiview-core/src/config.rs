use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Default place catalog, resolved relative to the working directory
pub const DEFAULT_CATALOG_SOURCE: &str = "places.json";

/// Open-Meteo forecast endpoint
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    /// Fixed user position. When absent no geolocation capability is offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationConfig>,

    #[serde(default)]
    pub favorites: FavoritesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Filesystem path or http(s) URL of the places document
    pub source: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_CATALOG_SOURCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast endpoint accepting `latitude`/`longitude` query parameters
    pub base_url: String,

    /// Request timeout. Unset means the HTTP client default (none).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoritesConfig {
    /// Storage file; defaults to `storage.json` in the config directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("poiview")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            catalog: CatalogConfig::default(),
            weather: WeatherConfig::default(),
            location: None,
            favorites: FavoritesConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Warnings are logged; errors fail the load.
    pub fn load_validated(path: Option<&Path>) -> Result<(Self, ValidationResult)> {
        let config = match path {
            Some(p) => Self::load_from(p)?,
            None => Self::load()?,
        };
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.catalog.source.trim().is_empty() {
            result.add_error("catalog.source", "Catalog source must not be empty");
        } else if self.catalog.source.starts_with("http://")
            || self.catalog.source.starts_with("https://")
        {
            self.validate_url(&self.catalog.source, "catalog.source", &mut result);
        }

        self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);

        if self.weather.timeout_secs == Some(0) {
            result.add_error("weather.timeout_secs", "Timeout must be greater than 0");
        }

        // Coordinates are never rejected; out-of-range values still produce a distance.
        if let Some(loc) = &self.location {
            if !(-90.0..=90.0).contains(&loc.latitude) {
                result.add_warning("location.latitude", "Latitude is outside [-90, 90]");
            }
            if !(-180.0..=180.0).contains(&loc.longitude) {
                result.add_warning("location.longitude", "Longitude is outside [-180, 180]");
            }
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Where favorites are persisted
    pub fn favorites_path(&self) -> PathBuf {
        self.favorites
            .path
            .clone()
            .unwrap_or_else(|| self.config_dir.join("storage.json"))
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("poiview");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_invalid_weather_url() {
        let mut config = Config::default();
        config.weather.base_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.base_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.weather.base_url = "ftp://example.com/forecast".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_catalog_path_is_not_url_checked() {
        let mut config = Config::default();
        config.catalog.source = "data/places.json".to_string();
        assert!(config.validate().is_valid());

        config.catalog.source = "  ".to_string();
        assert!(!config.validate().is_valid());
    }

    #[test]
    fn test_out_of_range_location_is_warning() {
        let mut config = Config::default();
        config.location = Some(LocationConfig {
            latitude: 123.0,
            longitude: 10.0,
        });
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "location.latitude"));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let mut config = Config::default();
        config.weather.timeout_secs = Some(0);
        assert!(!config.validate().is_valid());
    }

    #[test]
    fn test_load_creates_default_then_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.catalog.source, DEFAULT_CATALOG_SOURCE);

        let mut edited = created.clone();
        edited.location = Some(LocationConfig {
            latitude: 48.8566,
            longitude: 2.3522,
        });
        edited.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.location, edited.location);
        assert_eq!(loaded.weather.base_url, DEFAULT_WEATHER_URL);
    }

    #[test]
    fn test_partial_file_uses_section_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "config_dir = \"/tmp/poiview\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.catalog.source, DEFAULT_CATALOG_SOURCE);
        assert!(config.location.is_none());
        assert_eq!(
            config.favorites_path(),
            PathBuf::from("/tmp/poiview").join("storage.json")
        );
    }

    #[test]
    fn test_location_only_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[location]\nlatitude = 48.8566\nlongitude = 2.3522\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.config_dir, Config::default().config_dir);
        assert_eq!(
            config.location,
            Some(LocationConfig {
                latitude: 48.8566,
                longitude: 2.3522,
            })
        );
        assert_eq!(config.weather.base_url, DEFAULT_WEATHER_URL);
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }
}
