use poiview_core::{AppError, StorageError as CoreStorageError};
use poiview_services::StorageError;

use super::IntoAppError;

impl IntoAppError for StorageError {
    fn into_app_error(self) -> AppError {
        match self {
            StorageError::Read { .. } => AppError::Storage(CoreStorageError::ReadFailed(self.to_string())),
            StorageError::Write { .. } => {
                AppError::Storage(CoreStorageError::WriteFailed(self.to_string()))
            }
            StorageError::Corrupt(s) => AppError::Storage(CoreStorageError::Corrupt(s)),
        }
    }
}
