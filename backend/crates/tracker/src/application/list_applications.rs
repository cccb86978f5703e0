//! List Applications Use Case

use kernel::principal::Principal;
use std::sync::Arc;

use crate::domain::entities::Application;
use crate::domain::repository::ApplicationRepository;
use crate::error::TrackerResult;

/// List Applications Use Case
pub struct ListApplicationsUseCase<R>
where
    R: ApplicationRepository,
{
    repo: Arc<R>,
}

impl<R> ListApplicationsUseCase<R>
where
    R: ApplicationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, principal: &Principal) -> TrackerResult<Vec<Application>> {
        self.repo.list_by_owner(principal.user_id).await
    }
}
