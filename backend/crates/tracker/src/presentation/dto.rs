//! API DTOs (Data Transfer Objects)

use chrono::NaiveDate;
use kernel::id::{ApplicationId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Application;
use crate::domain::services::Summary;

/// Body of `POST /applications`
///
/// Unknown fields are ignored, so a client-supplied `user_id` never
/// reaches the use case.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApplicationRequest {
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `PATCH /applications/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchApplicationRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// Application as returned to the client
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub id: ApplicationId,
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    pub status: String,
    pub user_id: UserId,
}

impl From<Application> for ApplicationResponse {
    fn from(app: Application) -> Self {
        Self {
            id: app.application_id,
            company: app.company,
            role: app.role,
            date_applied: app.date_applied,
            status: app.status.to_string(),
            user_id: app.owner_id,
        }
    }
}

/// Response for `DELETE /applications/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
    pub id: ApplicationId,
}

/// Response for `GET /analytics/summary`
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub total: u64,
    pub applied: u64,
    pub interview: u64,
    pub offer: u64,
    pub rejected: u64,
    #[serde(rename = "no response")]
    pub no_response: u64,
}

impl From<Summary> for SummaryResponse {
    fn from(s: Summary) -> Self {
        Self {
            total: s.total,
            applied: s.applied,
            interview: s.interview,
            offer: s.offer,
            rejected: s.rejected,
            no_response: s.no_response,
        }
    }
}
