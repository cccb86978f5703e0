//! Update Application Use Case

use kernel::id::ApplicationId;
use kernel::principal::Principal;
use std::sync::Arc;

use crate::application::ownership::load_owned;
use crate::domain::entities::{Application, ApplicationPatch};
use crate::domain::repository::ApplicationRepository;
use crate::domain::value_objects::ApplicationStatus;
use crate::error::{TrackerError, TrackerResult};

/// Input for update application
#[derive(Debug, Clone)]
pub struct UpdateApplicationInput {
    pub application_id: ApplicationId,
    pub status: Option<String>,
}

/// Update Application Use Case
pub struct UpdateApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        input: UpdateApplicationInput,
    ) -> TrackerResult<Application> {
        // Existence and ownership come before input validation
        let current = load_owned(self.repo.as_ref(), principal, input.application_id).await?;

        let patch = ApplicationPatch {
            status: input
                .status
                .as_deref()
                .map(ApplicationStatus::new)
                .transpose()
                .map_err(TrackerError::Validation)?,
        };

        let Some(status) = patch.status else {
            return Ok(current);
        };

        // Deleted between the ownership check and the update
        let updated = self
            .repo
            .update_status(input.application_id, &status)
            .await?
            .ok_or(TrackerError::ApplicationNotFound)?;

        tracing::info!(
            user_id = %principal.user_id,
            application_id = %updated.application_id,
            status = %updated.status,
            "Application status updated"
        );

        Ok(updated)
    }
}
