//! Application Configuration
//!
//! Configuration for the tracker application layer.

/// Tracker application configuration
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Status given to applications created without one
    pub default_status: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_status: "Applied".to_string(),
        }
    }
}
