//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{ApplicationId, UserId};

use crate::domain::entities::{Application, NewApplication};
use crate::domain::value_objects::ApplicationStatus;
use crate::error::TrackerResult;

/// Application repository trait
#[trait_variant::make(ApplicationRepository: Send)]
pub trait LocalApplicationRepository {
    /// Insert a new application and return it with its generated id
    async fn insert(&self, application: &NewApplication) -> TrackerResult<Application>;

    /// Load an application by id regardless of owner
    async fn find_by_id(&self, application_id: ApplicationId)
    -> TrackerResult<Option<Application>>;

    /// All applications owned by `owner_id`, in storage order
    async fn list_by_owner(&self, owner_id: UserId) -> TrackerResult<Vec<Application>>;

    /// Replace the status. Returns `None` if the row no longer exists.
    async fn update_status(
        &self,
        application_id: ApplicationId,
        status: &ApplicationStatus,
    ) -> TrackerResult<Option<Application>>;

    /// Delete permanently. Returns whether a row was removed.
    async fn delete(&self, application_id: ApplicationId) -> TrackerResult<bool>;
}
