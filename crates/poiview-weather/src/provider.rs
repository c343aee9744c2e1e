use crate::types::{
    Coordinate, CurrentWeatherPayload, ForecastResponse, WeatherError, WeatherReport,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Open-Meteo client for current conditions.
///
/// Each call issues exactly one request; results are never cached.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
}

impl WeatherProvider {
    /// `timeout` of `None` leaves the request unbounded (client default).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: Arc::new(builder.build()?),
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch current weather, logging and swallowing any failure.
    pub async fn fetch_weather(&self, at: &Coordinate) -> Option<WeatherReport> {
        match self.try_fetch(at).await {
            Ok(report) => {
                tracing::info!(
                    "Weather at {}, {}: {} °C, wind {} km/h",
                    at.lat,
                    at.lon,
                    report.temperature_celsius,
                    report.wind_speed_kmh
                );
                Some(report)
            }
            Err(e) => {
                tracing::warn!("Weather fetch failed: {}", e);
                None
            }
        }
    }

    pub async fn try_fetch(&self, at: &Coordinate) -> Result<WeatherReport, WeatherError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", at.lat.to_string()),
                ("longitude", at.lon.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        parsed
            .current_weather
            .map(CurrentWeatherPayload::into_report)
            .ok_or(WeatherError::MissingCurrent)
    }
}
