//! User position capability.
//!
//! A host that can locate the user hands an implementation of [`Geolocation`]
//! to the app; a host that cannot simply offers none.

use async_trait::async_trait;

use crate::types::{Coordinate, LocationError};

/// Single-shot position lookup. Each call is one attempt; callers don't retry.
#[async_trait]
pub trait Geolocation: Send + Sync {
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Position supplied up front (config file or command line).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    position: Coordinate,
}

impl FixedLocation {
    pub fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocation for FixedLocation {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_location_resolves_to_its_position() {
        let geo = FixedLocation::new(Coordinate::new(48.8566, 2.3522));
        let pos = geo.current_position().await.unwrap();
        assert_eq!(pos, Coordinate::new(48.8566, 2.3522));
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let geo: Box<dyn Geolocation> = Box::new(FixedLocation::new(Coordinate::new(0.0, 0.0)));
        assert!(geo.current_position().await.is_ok());
    }
}
