//! Centralized error types for poiview.
//!
//! These are the failures that reach the user as a status line or a
//! message. The domain crates keep their own detailed errors; they are
//! mapped into these categories at the UI boundary.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a display-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Storage(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Location(e) => e.user_message(),
        }
    }
}

/// Local key-value storage errors (favorites).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage: {0}")]
    ReadFailed(String),

    #[error("Failed to write storage: {0}")]
    WriteFailed(String),

    #[error("Stored value is corrupted: {0}")]
    Corrupt(String),
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::ReadFailed(_) => "Unable to read saved favorites.",
            StorageError::WriteFailed(_) => "Failed to save the favorite. Please try again.",
            StorageError::Corrupt(_) => {
                "Saved favorites are corrupted. Consider resetting app data."
            }
        }
    }
}

/// Weather service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::ServiceUnavailable => "Weather is unavailable",
        }
    }
}

/// Geolocation errors.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Geolocation not supported")]
    Unsupported,

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::Unsupported => "Geolocation is not supported",
            LocationError::PermissionDenied | LocationError::Unavailable(_) => {
                "Geolocation is unavailable"
            }
        }
    }
}
