//! Pagination Primitives
//!
//! Shared skip/take pagination parameters for list endpoints.

use serde::Deserialize;

use crate::error::app_error::{AppError, AppResult};

/// Skip/take pagination query parameters
///
/// Both fields are optional: an absent `skip` means "from the start",
/// an absent `take` means "no limit".
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub take: Option<i64>,
}

impl PageParams {
    /// Validate that provided values are non-negative
    pub fn validate(&self) -> AppResult<()> {
        if self.skip.is_some_and(|skip| skip < 0) {
            return Err(AppError::bad_request("skip must not be negative"));
        }
        if self.take.is_some_and(|take| take < 0) {
            return Err(AppError::bad_request("take must not be negative"));
        }
        Ok(())
    }

    /// Row offset for SQL queries
    #[inline]
    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0)
    }

    /// Row limit for SQL queries; `None` binds as NULL (no limit)
    #[inline]
    pub fn limit(&self) -> Option<i64> {
        self.take
    }
}
