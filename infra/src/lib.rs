//! # LeadFlow Infrastructure
//!
//! Infrastructure layer for the LeadFlow backend: MySQL implementations of
//! the repository ports defined in `lf_core`, plus connection pool
//! management.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlTokenRepository, MySqlUserRepository};
