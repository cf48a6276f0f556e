//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Address was absent, empty or whitespace-only
    #[error("Address must not be blank")]
    BlankAddress,
}
