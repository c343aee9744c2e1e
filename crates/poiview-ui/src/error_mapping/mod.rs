//! Maps domain crate errors to poiview_core::AppError for consistent user-facing messages.
//! Each source crate has its own module to keep mappings small and readable.

use poiview_core::AppError;

mod storage;
mod weather;

/// Conversion into the application-wide error type.
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}
