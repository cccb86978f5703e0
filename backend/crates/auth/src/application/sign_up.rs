//! Sign Up Use Case
//!
//! Creates a new user account with a freshly generated bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        // Existence check before insert; the UNIQUE constraint covers races
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UsernameTaken);
        }

        let password =
            UserPassword::new(input.password).map_err(|e| AuthError::Validation(e.to_string()))?;

        let new_user = NewUser::new(user_name, password, self.config.token_bytes_len);
        let user = self.user_repo.create(&new_user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(user)
    }
}
