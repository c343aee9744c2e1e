//! Weather and position services for poiview
//!
//! Current weather comes from the Open-Meteo API; the user position comes
//! from an injected [`location::Geolocation`] capability. Distances between
//! positions use the haversine formula.

pub mod types;
pub mod distance;
pub mod location;
pub mod provider;

pub use types::*;
pub use distance::{distance_km, haversine_km, EARTH_RADIUS_KM};
pub use location::{FixedLocation, Geolocation};
pub use provider::WeatherProvider;
