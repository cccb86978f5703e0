//! HTTP Handlers
//!
//! All handlers require a [`Principal`] placed in the request by the
//! bearer middleware.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{AppJson, AppPath};
use kernel::id::ApplicationId;
use kernel::principal::Principal;
use std::sync::Arc;

use crate::application::config::TrackerConfig;
use crate::application::{
    CreateApplicationInput, CreateApplicationUseCase, DeleteApplicationUseCase,
    GetSummaryUseCase, ListApplicationsUseCase, UpdateApplicationInput,
    UpdateApplicationUseCase,
};
use crate::domain::repository::ApplicationRepository;
use crate::error::TrackerResult;
use crate::presentation::dto::{
    ApplicationResponse, CreateApplicationRequest, DeleteResponse, PatchApplicationRequest,
    SummaryResponse,
};

/// Shared state for tracker handlers
#[derive(Clone)]
pub struct TrackerAppState<R>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<TrackerConfig>,
}

/// POST /applications
pub async fn create_application<R>(
    State(state): State<TrackerAppState<R>>,
    principal: Principal,
    AppJson(req): AppJson<CreateApplicationRequest>,
) -> TrackerResult<(StatusCode, Json<ApplicationResponse>)>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateApplicationUseCase::new(state.repo.clone(), state.config.clone());

    let input = CreateApplicationInput {
        company: req.company,
        role: req.role,
        date_applied: req.date_applied,
        status: req.status,
    };

    let application = use_case.execute(&principal, input).await?;

    Ok((StatusCode::CREATED, Json(application.into())))
}

/// GET /applications
pub async fn list_applications<R>(
    State(state): State<TrackerAppState<R>>,
    principal: Principal,
) -> TrackerResult<Json<Vec<ApplicationResponse>>>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListApplicationsUseCase::new(state.repo.clone());

    let applications = use_case.execute(&principal).await?;

    Ok(Json(applications.into_iter().map(Into::into).collect()))
}

/// PATCH /applications/{id}
pub async fn update_application<R>(
    State(state): State<TrackerAppState<R>>,
    principal: Principal,
    AppPath(application_id): AppPath<ApplicationId>,
    AppJson(req): AppJson<PatchApplicationRequest>,
) -> TrackerResult<Json<ApplicationResponse>>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateApplicationUseCase::new(state.repo.clone());

    let input = UpdateApplicationInput {
        application_id,
        status: req.status,
    };

    let application = use_case.execute(&principal, input).await?;

    Ok(Json(application.into()))
}

/// DELETE /applications/{id}
pub async fn delete_application<R>(
    State(state): State<TrackerAppState<R>>,
    principal: Principal,
    AppPath(application_id): AppPath<ApplicationId>,
) -> TrackerResult<Json<DeleteResponse>>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteApplicationUseCase::new(state.repo.clone());

    let id = use_case.execute(&principal, application_id).await?;

    Ok(Json(DeleteResponse { ok: true, id }))
}

/// GET /analytics/summary
pub async fn get_summary<R>(
    State(state): State<TrackerAppState<R>>,
    principal: Principal,
) -> TrackerResult<Json<SummaryResponse>>
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetSummaryUseCase::new(state.repo.clone());

    let summary = use_case.execute(&principal).await?;

    Ok(Json(summary.into()))
}
