//! Check Token Use Case
//!
//! Resolves a bearer token to the user it was issued to.

use std::sync::Arc;

use kernel::principal::Principal;

use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Check token use case
pub struct CheckTokenUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CheckTokenUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Look the token up. Tokens never expire, so presence is validity.
    pub async fn execute(&self, token: &str) -> AuthResult<Principal> {
        let user = self
            .user_repo
            .find_by_token(token)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        Ok(user.to_principal())
    }
}
