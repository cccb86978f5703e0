//! Application Layer
//!
//! Use cases and application services.

pub mod check_token;
pub mod config;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use check_token::CheckTokenUseCase;
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
