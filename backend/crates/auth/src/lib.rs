//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (sign up, sign in, token check)
//! - `infra/` - SQLite implementation
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - User signup/login with username + password
//! - One permanent opaque bearer token per user, issued at signup
//! - Middleware resolving `Authorization: Bearer <token>` to a [`Principal`]
//!
//! ## Security Model
//! Passwords are stored and compared as plaintext, and tokens never
//! expire.
//!
//! [`Principal`]: kernel::principal::Principal

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteAuthRepository;
pub use presentation::middleware::{AuthMiddlewareState, require_bearer_token};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
