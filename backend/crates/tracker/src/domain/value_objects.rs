//! Domain Value Objects
//!
//! Immutable value types for the tracker domain.

use derive_more::Display;

/// Free-form status of an application ("Applied", "Interview", ...)
///
/// There is no transition graph: any status may replace any other.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{value}")]
pub struct ApplicationStatus {
    value: String,
}

impl ApplicationStatus {
    pub fn new(raw: &str) -> Result<Self, String> {
        Ok(Self {
            value: required_text("status", raw)?,
        })
    }

    /// Trusted value read back from the database
    pub fn from_db(value: String) -> Self {
        Self { value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Summary bucket this status counts towards, if any
    pub fn category(&self) -> Option<StatusCategory> {
        StatusCategory::from_status(&self.value)
    }
}

/// The fixed buckets of the summary endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusCategory {
    #[display("applied")]
    Applied,
    #[display("interview")]
    Interview,
    #[display("offer")]
    Offer,
    #[display("rejected")]
    Rejected,
    #[display("no response")]
    NoResponse,
}

impl StatusCategory {
    pub const ALL: [StatusCategory; 5] = [
        StatusCategory::Applied,
        StatusCategory::Interview,
        StatusCategory::Offer,
        StatusCategory::Rejected,
        StatusCategory::NoResponse,
    ];

    /// Case-insensitive exact match against the category keys.
    /// "Interview scheduled" matches nothing.
    pub fn from_status(status: &str) -> Option<Self> {
        let key = status.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.to_string() == key)
    }
}

/// Reject blank input; the value is kept exactly as given
pub fn required_text(field: &str, raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(raw.to_string())
}
