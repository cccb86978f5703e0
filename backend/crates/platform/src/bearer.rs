//! Bearer Credential Parsing
//!
//! Extracts the token from an `Authorization: Bearer <token>` header.

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Why a request carried no usable bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    /// No `Authorization` header at all
    #[error("Authorization header missing")]
    Missing,

    /// Header present but not `Bearer <token>`
    #[error("Authorization header is not a bearer credential")]
    Malformed,
}

/// Extract the bearer token from request headers
///
/// The scheme is matched case-insensitively (RFC 9110 §11.1). Exactly one
/// non-empty token must follow a single space.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?;

    let value = value.to_str().map_err(|_| BearerError::Malformed)?;
    parse_bearer(value)
}

/// Parse a raw `Authorization` header value
pub fn parse_bearer(value: &str) -> Result<&str, BearerError> {
    let (scheme, token) = value.split_once(' ').ok_or(BearerError::Malformed)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Malformed);
    }

    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}
