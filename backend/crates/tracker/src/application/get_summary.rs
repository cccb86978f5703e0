//! Get Summary Use Case

use kernel::principal::Principal;
use std::sync::Arc;

use crate::domain::repository::ApplicationRepository;
use crate::domain::services::{Summary, tally};
use crate::error::TrackerResult;

/// Get Summary Use Case
pub struct GetSummaryUseCase<R>
where
    R: ApplicationRepository,
{
    repo: Arc<R>,
}

impl<R> GetSummaryUseCase<R>
where
    R: ApplicationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Counts over the requester's own applications only
    pub async fn execute(&self, principal: &Principal) -> TrackerResult<Summary> {
        let applications = self.repo.list_by_owner(principal.user_id).await?;
        Ok(tally(applications.iter().map(|a| &a.status)))
    }
}
