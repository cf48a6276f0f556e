//! Geocoding adapter - Implements GeocodingPort using integration_census

use std::sync::Arc;

use application::{error::ApplicationError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::{
    DomainError,
    value_objects::{Address, Coordinates},
};
use integration_census::{CensusConfig, CensusGeocodingClient, GeocodingClient, GeocodingError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Adapter for address geocoding via the Census geocoder
pub struct CensusGeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for CensusGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CensusGeocodingAdapter")
            .field("client", &"GeocodingClient")
            .finish()
    }
}

impl CensusGeocodingAdapter {
    /// Create an adapter with its own Census client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &CensusConfig) -> Result<Self, ApplicationError> {
        let client = CensusGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::InvalidAddress(_) => ApplicationError::Domain(DomainError::BlankAddress),
            e @ GeocodingError::MalformedResponse(_) => ApplicationError::UpstreamDataMissing {
                reason: e.reason(),
                detail: e.to_string(),
            },
            GeocodingError::Cancelled => ApplicationError::Cancelled,
            e @ (GeocodingError::ConnectionFailed(_)
            | GeocodingError::Timeout
            | GeocodingError::ParseError(_)) => ApplicationError::ExternalService(e.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for CensusGeocodingAdapter {
    #[instrument(skip(self, address, cancel))]
    async fn resolve(
        &self,
        address: &Address,
        cancel: &CancellationToken,
    ) -> Result<Option<Coordinates>, ApplicationError> {
        let result = self.client.geocode(address.as_str(), cancel).await;

        match &result {
            Ok(Some(coords)) => debug!(%coords, "Address resolved"),
            Ok(None) => debug!("Address has no match"),
            Err(e) => debug!(reason = e.reason(), error = %e, "Geocoding failed"),
        }

        result.map_err(Self::map_error)
    }
}
