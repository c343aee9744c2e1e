//! Great-circle distance on a spherical Earth.

use crate::types::Coordinate;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two positions, in kilometres.
///
/// Inputs are not validated; out-of-range degrees still yield a number.
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let a = ((d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance from the user to a place, formatted with exactly two decimals.
pub fn distance_km(user: &Coordinate, place: &Coordinate) -> String {
    format!("{:.2}", haversine_km(user, place))
}
