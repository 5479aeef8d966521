//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - JWT access token generation and verification
//! - Refresh token issuance and persistence
//! - Refresh token verification against record state and signature
//! - Revocation and garbage collection of expired records

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
