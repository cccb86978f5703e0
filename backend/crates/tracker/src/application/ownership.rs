//! Shared load-and-check step for mutating use cases

use kernel::id::ApplicationId;
use kernel::principal::Principal;

use crate::domain::entities::Application;
use crate::domain::repository::ApplicationRepository;
use crate::error::{TrackerError, TrackerResult};

/// Load an application and make sure `principal` owns it.
///
/// A missing id is `ApplicationNotFound`; someone else's row is `NotOwner`.
pub(crate) async fn load_owned<R>(
    repo: &R,
    principal: &Principal,
    application_id: ApplicationId,
) -> TrackerResult<Application>
where
    R: ApplicationRepository,
{
    let application = repo
        .find_by_id(application_id)
        .await?
        .ok_or(TrackerError::ApplicationNotFound)?;

    if !principal.owns(application.owner_id) {
        tracing::warn!(
            user_id = %principal.user_id,
            application_id = %application_id,
            owner_id = %application.owner_id,
            "Access to another user's application"
        );
        return Err(TrackerError::NotOwner);
    }

    Ok(application)
}
