//! Tracker Error Types
//!
//! Tracker-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use thiserror::Error;

/// Tracker-specific result type alias
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Tracker-specific error variants
#[derive(Debug, Error)]
pub enum TrackerError {
    /// No application with the requested id
    #[error("Application not found")]
    ApplicationNotFound,

    /// The application exists but belongs to another user
    #[error("Not allowed to access this application")]
    NotOwner,

    /// Input rejected by a value object
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TrackerError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::ApplicationNotFound => ErrorKind::NotFound,
            TrackerError::NotOwner => ErrorKind::Forbidden,
            TrackerError::Validation(_) => ErrorKind::BadRequest,
            TrackerError::Database(e) => sqlx_error_kind(e),
            TrackerError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, hiding server-side details
    pub fn into_app_error(self) -> AppError {
        if let TrackerError::Database(e) = self {
            return AppError::from(e);
        }
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, kind.as_str())
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TrackerError::Database(e) => {
                tracing::error!(error = %e, "Tracker database error");
            }
            TrackerError::Internal(msg) => {
                tracing::error!(message = %msg, "Tracker internal error");
            }
            TrackerError::NotOwner => {
                tracing::warn!("Ownership check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Tracker error");
            }
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        err.into_app_error()
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
