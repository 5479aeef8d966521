//! Shared utilities and common types for LeadFlow server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Common type definitions

pub mod config;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, JwtConfig};
