use poiview_core::{AppError, LocationError as CoreLocationError};
use poiview_weather::LocationError;

use super::IntoAppError;

impl IntoAppError for LocationError {
    fn into_app_error(self) -> AppError {
        match self {
            LocationError::PermissionDenied => {
                AppError::Location(CoreLocationError::PermissionDenied)
            }
            other => AppError::Location(CoreLocationError::Unavailable(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_location_failure_reads_as_unavailable() {
        for e in [
            LocationError::PermissionDenied,
            LocationError::ServiceUnavailable,
            LocationError::Timeout,
            LocationError::Other("gps off".into()),
        ] {
            assert_eq!(e.into_app_error().user_message(), "Geolocation is unavailable");
        }
    }

    #[test]
    fn denied_permission_keeps_its_category() {
        let app = LocationError::PermissionDenied.into_app_error();
        assert!(matches!(app, AppError::Location(CoreLocationError::PermissionDenied)));
    }
}
