//! Point-of-interest records as they appear in the catalog document.

use poiview_weather::Coordinate;
use serde::{Deserialize, Serialize};

/// Place identifier. The catalog may use numbers or strings; both are kept
/// as written so favorites serialize back to the same JSON value.
///
/// Numbers that don't fit an `i64` (fractions, large unsigned values) are
/// kept as `Number` rather than rejecting the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceId {
    Int(i64),
    Number(serde_json::Number),
    Text(String),
}

impl PlaceId {
    /// Parse a command-line style id: JSON numbers stay numeric, anything else is `Text`.
    pub fn parse(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            return PlaceId::Int(n);
        }
        match raw.parse::<serde_json::Number>() {
            Ok(n) => PlaceId::Number(n),
            Err(_) => PlaceId::Text(raw.to_string()),
        }
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceId::Int(n) => write!(f, "{}", n),
            PlaceId::Number(n) => write!(f, "{}", n),
            PlaceId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PlaceId {
    fn from(n: i64) -> Self {
        PlaceId::Int(n)
    }
}

impl From<&str> for PlaceId {
    fn from(s: &str) -> Self {
        PlaceId::Text(s.to_string())
    }
}

/// A single point of interest. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub description: String,
    /// URL or relative path of the picture
    pub image: String,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}
