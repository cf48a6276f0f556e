//! Geocoding port
//!
//! Defines the interface for resolving a free-text address to coordinates.

use async_trait::async_trait;
use domain::value_objects::{Address, Coordinates};
#[cfg(test)]
use mockall::automock;
use tokio_util::sync::CancellationToken;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to coordinates
    ///
    /// Returns `Ok(None)` when the provider has no match for the address.
    /// Cancellation of `cancel` aborts the in-flight request and yields
    /// `ApplicationError::Cancelled`.
    async fn resolve(
        &self,
        address: &Address,
        cancel: &CancellationToken,
    ) -> Result<Option<Coordinates>, ApplicationError>;
}
