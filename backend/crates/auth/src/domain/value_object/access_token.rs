//! Access Token Value Object
//!
//! Opaque bearer credential. Generated once at signup and never rotated.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Fresh random token from `len` bytes of OS randomness
    pub fn generate(len: usize) -> Self {
        Self(platform::crypto::random_token(len))
    }

    /// Rebuild from a stored row
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}
