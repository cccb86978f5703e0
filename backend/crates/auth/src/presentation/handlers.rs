//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use kernel::extract::AppJson;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{CredentialsRequest, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<CredentialsRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(SignUpInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(user.into()))
}

/// POST /login
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<CredentialsRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone());

    let user = use_case
        .execute(SignInInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(user.into()))
}
