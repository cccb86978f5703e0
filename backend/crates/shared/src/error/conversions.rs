//! Error conversions
//!
//! Database failures become [`AppError`]s here, and [`AppError`] becomes
//! an HTTP response.

use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a database failure without consuming it
///
/// Domain error enums use this for their `kind()` so that logs and
/// responses agree.
#[cfg(feature = "sqlx")]
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    use sqlx::error::ErrorKind as DbErrorKind;

    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        // SQLite reports constraint failures through extended result
        // codes; sqlx folds them into a portable kind.
        sqlx::Error::Database(db_err) => match db_err.kind() {
            DbErrorKind::UniqueViolation | DbErrorKind::ForeignKeyViolation => {
                ErrorKind::Conflict
            }
            DbErrorKind::NotNullViolation | DbErrorKind::CheckViolation => ErrorKind::BadRequest,
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind as DbErrorKind;

        let message = match &err {
            sqlx::Error::RowNotFound => "Record not found",
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                "Database connection pool exhausted"
            }
            sqlx::Error::Io(_) => "Database connection error",
            sqlx::Error::Database(db_err) => match db_err.kind() {
                DbErrorKind::UniqueViolation => "Duplicate key value",
                DbErrorKind::ForeignKeyViolation => "Foreign key violation",
                DbErrorKind::NotNullViolation => "Required field is null",
                DbErrorKind::CheckViolation => "Check constraint violation",
                _ => "Database error",
            },
            _ => "Database error",
        };

        AppError::new(sqlx_error_kind(&err), message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::{HeaderValue, StatusCode, header};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_row_not_found_and_pool_timeout() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);

        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
        assert!(std::error::Error::source(&app_err).is_some());
    }

    #[cfg(feature = "sqlx")]
    #[tokio::test]
    async fn test_sqlx_constraint_violations() {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::query("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO t (name) VALUES ('a')")
            .execute(&pool)
            .await
            .unwrap();

        let duplicate = sqlx::query("INSERT INTO t (name) VALUES ('a')")
            .execute(&pool)
            .await
            .unwrap_err();
        assert_eq!(sqlx_error_kind(&duplicate), ErrorKind::Conflict);
        assert_eq!(AppError::from(duplicate).status_code(), 409);

        let null = sqlx::query("INSERT INTO t (name) VALUES (NULL)")
            .execute(&pool)
            .await
            .unwrap_err();
        assert_eq!(AppError::from(null).status_code(), 400);
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_unauthorized_response_carries_challenge() {
        use axum::http::{StatusCode, header};
        use axum::response::IntoResponse;

        let response = AppError::unauthorized("Not authenticated").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        let response = AppError::forbidden("Not yours").into_response();
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}
