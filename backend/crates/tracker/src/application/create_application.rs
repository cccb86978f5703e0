//! Create Application Use Case

use chrono::NaiveDate;
use kernel::principal::Principal;
use std::sync::Arc;

use crate::application::config::TrackerConfig;
use crate::domain::entities::{Application, NewApplication};
use crate::domain::repository::ApplicationRepository;
use crate::domain::value_objects::ApplicationStatus;
use crate::error::{TrackerError, TrackerResult};

/// Input for create application. There is no owner field: the owner is
/// always the requesting principal.
#[derive(Debug, Clone)]
pub struct CreateApplicationInput {
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    pub status: Option<String>,
}

/// Create Application Use Case
pub struct CreateApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    repo: Arc<R>,
    config: Arc<TrackerConfig>,
}

impl<R> CreateApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<TrackerConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        input: CreateApplicationInput,
    ) -> TrackerResult<Application> {
        let raw_status = input
            .status
            .as_deref()
            .unwrap_or(&self.config.default_status);
        let status = ApplicationStatus::new(raw_status).map_err(TrackerError::Validation)?;

        let new_application = NewApplication::new(
            principal.user_id,
            &input.company,
            &input.role,
            input.date_applied,
            status,
        )
        .map_err(TrackerError::Validation)?;

        let application = self.repo.insert(&new_application).await?;

        tracing::info!(
            user_id = %principal.user_id,
            application_id = %application.application_id,
            "Application created"
        );

        Ok(application)
    }
}
