//! Domain Entities
//!
//! Core business entities for the tracker domain.

use chrono::NaiveDate;
use kernel::id::{ApplicationId, UserId};

use crate::domain::value_objects::{ApplicationStatus, required_text};

/// A job application owned by exactly one user
#[derive(Debug, Clone)]
pub struct Application {
    pub application_id: ApplicationId,
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    pub status: ApplicationStatus,
    pub owner_id: UserId,
}

/// Application about to be inserted. The owner is always the requester.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    pub status: ApplicationStatus,
    pub owner_id: UserId,
}

impl NewApplication {
    pub fn new(
        owner_id: UserId,
        company: &str,
        role: &str,
        date_applied: NaiveDate,
        status: ApplicationStatus,
    ) -> Result<Self, String> {
        Ok(Self {
            company: required_text("company", company)?,
            role: required_text("role", role)?,
            date_applied,
            status,
            owner_id,
        })
    }

    pub fn into_application(self, application_id: ApplicationId) -> Application {
        Application {
            application_id,
            company: self.company,
            role: self.role,
            date_applied: self.date_applied,
            status: self.status,
            owner_id: self.owner_id,
        }
    }
}

/// Partial update. Only the status is mutable.
#[derive(Debug, Clone, Default)]
pub struct ApplicationPatch {
    pub status: Option<ApplicationStatus>,
}
