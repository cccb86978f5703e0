//! Application Configuration
//!
//! Configuration for the Auth application layer.

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Random bytes per bearer token (before base64url encoding)
    pub token_bytes_len: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_bytes_len: 32,
        }
    }
}
