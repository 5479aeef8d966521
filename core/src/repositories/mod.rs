//! Repository interfaces (ports) for the domain layer
//!
//! Concrete implementations live in the infrastructure crate; in-memory
//! mocks for testing live next to each trait.

pub mod token;
pub mod user;

pub use token::TokenRepository;
pub use user::UserRepository;
