//! Tracker Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, summary tally, repository traits
//! - `application/` - Use cases (create, list, update, delete, summary)
//! - `infra/` - SQLite implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every route expects a [`Principal`] in the request extensions, put
//! there by the auth crate's bearer middleware. Ownership is checked per
//! row: a user only ever sees and mutates their own applications.
//!
//! [`Principal`]: kernel::principal::Principal

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TrackerConfig;
pub use error::{TrackerError, TrackerResult};
pub use infra::sqlite::SqliteTrackerRepository;
pub use presentation::router::tracker_router;
