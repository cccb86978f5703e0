//! User Password Value Object
//!
//! Stored and compared as plaintext. Hashing is out of scope for this
//! service; the comparison is still constant-time so response timing does
//! not reveal how much of a guess matched.

use platform::crypto::constant_time_eq;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password is required")]
    Empty,
}

/// Plaintext password
#[derive(Clone)]
pub struct UserPassword(String);

impl UserPassword {
    /// Validate a signup password. No trimming; whitespace is significant.
    pub fn new(raw: impl Into<String>) -> Result<Self, PasswordError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(raw))
    }

    /// Rebuild from a stored row
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    /// Exact byte-for-byte match
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.0.as_bytes(), candidate.as_bytes())
    }

    /// Value written to the `password` column
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserPassword([REDACTED])")
    }
}
