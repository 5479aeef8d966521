//! Business services for authentication and token lifecycle

pub mod auth;
pub mod token;

pub use auth::AuthService;
pub use token::{TokenService, TokenServiceConfig};
