//! Free-text postal address value object
//!
//! The address is opaque: it is forwarded to the geocoder exactly as the
//! caller typed it. The only rule enforced here is that it is not blank.

use std::fmt;

use crate::errors::DomainError;

/// A caller-supplied address that is guaranteed to contain non-whitespace text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Parse an optional raw query value into an address
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BlankAddress` when the input is absent, empty,
    /// or consists only of whitespace.
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            Some(text) if !text.trim().is_empty() => Ok(Self(text.to_string())),
            _ => Err(DomainError::BlankAddress),
        }
    }

    /// The raw address text, untrimmed
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
