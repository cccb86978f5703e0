//! Infrastructure Layer
//!
//! Database implementations of repository traits.

pub mod sqlite;

pub use sqlite::SqliteAuthRepository;
