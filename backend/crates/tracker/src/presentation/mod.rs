//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::TrackerAppState;
pub use router::{tracker_router, tracker_router_generic};
