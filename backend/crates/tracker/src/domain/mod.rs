//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Application, NewApplication, ApplicationPatch)
//! - Domain value objects (ApplicationStatus, StatusCategory)
//! - Domain services (summary tally)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
