//! Domain layer for Skycast
//!
//! Contains the request-scoped value objects of the address-to-forecast pipeline
//! and the temperature normalization rules. This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
