//! Request Extractors
//!
//! JSON body and path extractors whose rejections render as [`AppError`]
//! problem details instead of axum's plain-text defaults.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};

use crate::error::app_error::AppError;

/// `axum::Json` with [`AppError`] rejections
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status().as_u16();
        let message = rejection.body_text();
        let err = match status {
            415 => AppError::new(
                crate::error::kind::ErrorKind::UnsupportedMediaType,
                message,
            )
            .with_action("Send the body with Content-Type: application/json"),
            422 => AppError::unprocessable(message),
            _ => AppError::bad_request(message),
        };
        err.with_source(rejection)
    }
}

/// `axum::extract::Path` with [`AppError`] rejections
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let message = rejection.body_text();
        let err = if rejection.status().is_server_error() {
            AppError::internal(message)
        } else {
            AppError::bad_request(message)
        };
        err.with_source(rejection)
    }
}
