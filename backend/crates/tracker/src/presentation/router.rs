//! Tracker Router

use axum::{
    Router,
    routing::{get, patch},
};
use std::sync::Arc;

use crate::application::config::TrackerConfig;
use crate::domain::repository::ApplicationRepository;
use crate::infra::sqlite::SqliteTrackerRepository;
use crate::presentation::handlers::{self, TrackerAppState};

/// Create the tracker router with the SQLite repository.
///
/// The caller layers the bearer middleware on top.
pub fn tracker_router(repo: SqliteTrackerRepository, config: TrackerConfig) -> Router {
    tracker_router_generic(repo, config)
}

/// Create a generic tracker router for any repository implementation
pub fn tracker_router_generic<R>(repo: R, config: TrackerConfig) -> Router
where
    R: ApplicationRepository + Clone + Send + Sync + 'static,
{
    let state = TrackerAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/applications",
            get(handlers::list_applications::<R>).post(handlers::create_application::<R>),
        )
        .route(
            "/applications/{id}",
            patch(handlers::update_application::<R>).delete(handlers::delete_application::<R>),
        )
        .route("/analytics/summary", get(handlers::get_summary::<R>))
        .with_state(state)
}
