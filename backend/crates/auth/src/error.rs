//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Failure kinds stay distinct internally; `to_app_error` collapses the
//! credential-shaped ones into one generic externally visible message so
//! responses never reveal whether an email is registered.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Account not found
    #[error("Account not found")]
    AccountNotFound,

    /// Email already registered (signup)
    #[error("Email is already registered")]
    EmailTaken,

    /// Unknown email or wrong password (login)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token failed signature, structure, or expiry checks
    #[error("Invalid or expired token")]
    InvalidToken,

    /// No bearer token on a protected route
    #[error("Missing bearer token")]
    Unauthenticated,

    /// Caller role is outside the route's allowed set
    #[error("Caller role is not permitted on this route")]
    Forbidden,

    /// Update payload had no applicable fields after filtering
    #[error("Update payload has no applicable fields")]
    EmptyUpdate,

    /// Input validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::EmailTaken
            | AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::Unauthenticated
            | AuthError::EmptyUpdate => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, collapsing credential failures into one
    /// generic message (anti-enumeration)
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::EmailTaken | AuthError::InvalidCredentials => {
                AppError::unauthorized("Incorrect email or password")
            }
            AuthError::EmptyUpdate => AppError::unauthorized("This operation is not allowed"),
            AuthError::InvalidToken | AuthError::Unauthenticated => {
                AppError::unauthorized("Incorrect token")
            }
            AuthError::Forbidden => AppError::forbidden("Forbidden resource"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials | AuthError::EmailTaken => {
                tracing::warn!("Failed credential check");
            }
            AuthError::Forbidden => {
                tracing::warn!("Role check rejected request");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
