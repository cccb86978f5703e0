//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - SQLite connection pool (per-request scoped checkout)
//! - Bearer credential parsing for the `Authorization` header
//! - Random token generation and constant-time comparison

pub mod bearer;
pub mod crypto;
pub mod database;
