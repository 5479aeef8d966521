//! Domain layer containing entities and core business types

pub mod entities;

pub use entities::*;
