//! Dog Error Types
//!
//! Dog-specific error variants integrating with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

/// Dog-specific result type alias
pub type DogResult<T> = Result<T, DogError>;

/// Dog-specific error variants
#[derive(Debug, Error)]
pub enum DogError {
    /// Dog not found
    #[error("Dog not found")]
    DogNotFound,

    /// Update carried neither fields nor a new image
    #[error("Nothing to update")]
    NothingToUpdate,

    /// Input validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Object storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DogError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DogError::DogNotFound => ErrorKind::NotFound,
            DogError::NothingToUpdate => ErrorKind::Unauthorized,
            DogError::Validation(_) => ErrorKind::BadRequest,
            DogError::Storage(_) | DogError::Database(_) | DogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// An empty update renders as "operation not permitted", matching the
    /// account routes, rather than as a validation hint.
    pub fn to_app_error(&self) -> AppError {
        match self {
            DogError::NothingToUpdate => AppError::unauthorized("This operation is not allowed"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DogError::Database(e) => {
                tracing::error!(error = %e, "Dog database error");
            }
            DogError::Storage(e) => {
                tracing::error!(error = %e, "Dog storage error");
            }
            DogError::Internal(msg) => {
                tracing::error!(message = %msg, "Dog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Dog error");
            }
        }
    }
}

impl IntoResponse for DogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_to_update_is_authorization_shaped() {
        let err = DogError::NothingToUpdate.to_app_error();
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.message(), "This operation is not allowed");
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(DogError::DogNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            DogError::Validation("bad sex code".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            DogError::Internal("boom".into()).kind(),
            ErrorKind::InternalServerError
        );
    }
}
