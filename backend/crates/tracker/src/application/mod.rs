//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Every use case takes the requesting [`Principal`] explicitly.
//!
//! [`Principal`]: kernel::principal::Principal

pub mod config;
pub mod create_application;
pub mod delete_application;
pub mod get_summary;
pub mod list_applications;
mod ownership;
pub mod update_application;

// Re-exports
pub use config::TrackerConfig;
pub use create_application::{CreateApplicationInput, CreateApplicationUseCase};
pub use delete_application::DeleteApplicationUseCase;
pub use get_summary::GetSummaryUseCase;
pub use list_applications::ListApplicationsUseCase;
pub use update_application::{UpdateApplicationInput, UpdateApplicationUseCase};
