use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees.
///
/// Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Current conditions at a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature_celsius: f64,
    pub wind_speed_kmh: f64,
}

/// Open-Meteo forecast response, reduced to the fields we read
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current_weather: Option<CurrentWeatherPayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherPayload {
    pub temperature: f64,
    pub windspeed: f64,
}

impl CurrentWeatherPayload {
    pub(crate) fn into_report(self) -> WeatherReport {
        WeatherReport {
            temperature_celsius: self.temperature,
            wind_speed_kmh: self.windspeed,
        }
    }
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Response has no current_weather record")]
    MissingCurrent,
}
