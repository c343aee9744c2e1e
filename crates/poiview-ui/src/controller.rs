//! Startup flow: load places, locate the user, fetch weather, render cards.
//!
//! ```text
//! Loading -> Locating -> WithLocation    -> Rendered
//!                     \-> WithoutLocation -/
//! ```
//!
//! Every failure degrades the output (empty catalog, missing distances, a
//! status message) and the flow always reaches `Rendered`. Cards are built
//! only after both the catalog and the location outcome are known, so every
//! card sees the same coordinate.

use std::sync::Arc;

use poiview_core::{AppError, LocationError as CoreLocationError, WeatherError as CoreWeatherError};
use poiview_services::{Place, PlaceCatalogLoader};
use poiview_weather::{Coordinate, Geolocation, WeatherProvider, WeatherReport};

use crate::card::CardRenderer;
use crate::error_mapping::IntoAppError;
use crate::mount::Mounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStatus {
    /// The host offers no geolocation capability
    Unsupported,
    /// The single position request failed
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    Loading,
    Locating,
    WithLocation(Coordinate),
    WithoutLocation(LocationStatus),
    Rendered,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub places_rendered: usize,
    pub location: Option<Coordinate>,
    pub weather: Option<WeatherReport>,
}

pub struct AppController {
    catalog: PlaceCatalogLoader,
    weather: WeatherProvider,
    geolocation: Option<Arc<dyn Geolocation>>,
    renderer: CardRenderer,
    mounts: Mounts,
    state: AppState,
    history: Vec<AppState>,
    summary: RunSummary,
}

impl AppController {
    /// `geolocation` of `None` means the host cannot locate the user at all.
    pub fn new(
        catalog: PlaceCatalogLoader,
        weather: WeatherProvider,
        geolocation: Option<Arc<dyn Geolocation>>,
        renderer: CardRenderer,
        mounts: Mounts,
    ) -> Self {
        Self {
            catalog,
            weather,
            geolocation,
            renderer,
            mounts,
            state: AppState::Loading,
            history: vec![AppState::Loading],
            summary: RunSummary::default(),
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// Every state entered so far, starting with `Loading`.
    pub fn history(&self) -> &[AppState] {
        &self.history
    }

    pub fn renderer(&self) -> &CardRenderer {
        &self.renderer
    }

    /// Drive the flow to `Rendered`. Calling it again afterwards does nothing.
    pub async fn run(&mut self) -> RunSummary {
        if self.state == AppState::Rendered {
            return self.summary.clone();
        }

        let places = self.catalog.load_places().await;
        self.transition(AppState::Locating);

        match self.locate().await {
            Some(position) => {
                self.transition(AppState::WithLocation(position));
                self.summary.location = Some(position);

                let report = self.weather.fetch_weather(&position).await;
                self.mounts.weather.set_text(&weather_text(report.as_ref()));
                self.summary.weather = report;

                self.render_all(&places, Some(&position));
            }
            None => self.render_all(&places, None),
        }

        self.transition(AppState::Rendered);
        tracing::info!("Rendered {} places", self.summary.places_rendered);
        self.summary.clone()
    }

    async fn locate(&mut self) -> Option<Coordinate> {
        let Some(geolocation) = self.geolocation.clone() else {
            tracing::info!("Geolocation capability not offered");
            self.without_location(
                LocationStatus::Unsupported,
                AppError::Location(CoreLocationError::Unsupported),
            );
            return None;
        };

        match geolocation.current_position().await {
            Ok(position) => {
                tracing::info!("Got location: {}, {}", position.lat, position.lon);
                Some(position)
            }
            Err(e) => {
                tracing::warn!("Geolocation failed: {}", e);
                self.without_location(LocationStatus::Unavailable, e.into_app_error());
                None
            }
        }
    }

    fn without_location(&mut self, status: LocationStatus, reason: AppError) {
        self.mounts.status.set_text(reason.user_message());
        self.transition(AppState::WithoutLocation(status));
    }

    fn render_all(&mut self, places: &[Place], user: Option<&Coordinate>) {
        for place in places {
            self.mounts.places.append(self.renderer.build_card(place, user));
        }
        self.summary.places_rendered = places.len();
    }

    fn transition(&mut self, next: AppState) {
        tracing::debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
        self.history.push(next);
    }
}

/// Text for the weather mount point
pub fn weather_text(report: Option<&WeatherReport>) -> String {
    match report {
        Some(w) => format!(
            "Weather: {} °C, wind speed: {} km/h",
            w.temperature_celsius, w.wind_speed_kmh
        ),
        None => AppError::Weather(CoreWeatherError::ServiceUnavailable)
            .user_message()
            .to_string(),
    }
}
