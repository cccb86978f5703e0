//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use platform::bearer::BearerError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signup with a user name that is already registered.
    ///
    /// Conceptually a conflict, but the wire contract is 400.
    #[error("Username already registered")]
    UsernameTaken,

    /// Unknown user name or wrong password. The two cases are
    /// indistinguishable on purpose.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No `Authorization` header
    #[error("Not authenticated")]
    MissingCredentials,

    /// `Authorization` header is not `Bearer <token>`
    #[error("Invalid authorization header")]
    MalformedCredentials,

    /// Well-formed bearer token that matches no user
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Signup input rejected
    #[error("{0}")]
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
            AuthError::UsernameTaken | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::MissingCredentials
            | AuthError::MalformedCredentials
            | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::Database(e) => sqlx_error_kind(e),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Database errors keep their source for logs. Other server-side
    /// details stay in the logs; the client only sees the status phrase
    /// for 5xx errors.
    pub fn into_app_error(self) -> AppError {
        if let AuthError::Database(e) = self {
            return AppError::from(e);
        }
        let kind = self.kind();
        if kind.is_server_error() {
            return AppError::new(kind, kind.as_str());
        }
        let err = AppError::new(kind, self.to_string());
        match self {
            AuthError::MissingCredentials | AuthError::MalformedCredentials => {
                err.with_action("Send an Authorization: Bearer <token> header")
            }
            AuthError::InvalidToken => err.with_action("Log in again to obtain a valid token"),
            _ => err,
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
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Request with unknown bearer token");
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
        self.into_app_error().into_response()
    }
}

impl From<BearerError> for AuthError {
    fn from(err: BearerError) -> Self {
        match err {
            BearerError::Missing => AuthError::MissingCredentials,
            BearerError::Malformed => AuthError::MalformedCredentials,
        }
    }
}
