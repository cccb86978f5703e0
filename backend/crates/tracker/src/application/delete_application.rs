//! Delete Application Use Case

use kernel::id::ApplicationId;
use kernel::principal::Principal;
use std::sync::Arc;

use crate::application::ownership::load_owned;
use crate::domain::repository::ApplicationRepository;
use crate::error::{TrackerError, TrackerResult};

/// Delete Application Use Case
pub struct DeleteApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteApplicationUseCase<R>
where
    R: ApplicationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Hard delete. Returns the id that was removed.
    pub async fn execute(
        &self,
        principal: &Principal,
        application_id: ApplicationId,
    ) -> TrackerResult<ApplicationId> {
        load_owned(self.repo.as_ref(), principal, application_id).await?;

        if !self.repo.delete(application_id).await? {
            return Err(TrackerError::ApplicationNotFound);
        }

        tracing::info!(
            user_id = %principal.user_id,
            application_id = %application_id,
            "Application deleted"
        );

        Ok(application_id)
    }
}
