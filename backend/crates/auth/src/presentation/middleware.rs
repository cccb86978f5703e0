//! Auth Middleware
//!
//! Middleware for requiring a bearer token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::CheckTokenUseCase;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

/// Middleware that requires a valid bearer token
///
/// On success the resolved [`kernel::principal::Principal`] is stored in
/// the request extensions for the handler to extract.
pub async fn require_bearer_token<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(req.headers())?.to_owned();

    let use_case = CheckTokenUseCase::new(state.repo.clone());
    let principal = use_case.execute(&token).await?;

    tracing::debug!(user_id = %principal.user_id, "Bearer token accepted");

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
