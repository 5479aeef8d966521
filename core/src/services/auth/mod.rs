//! Authentication service module
//!
//! Handles credential verification against stored bcrypt hashes and the
//! login / rotation / logout flows built on top of the token service.

mod service;


pub use service::AuthService;
