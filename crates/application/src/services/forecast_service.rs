//! Forecast service
//!
//! Drives one address-to-forecast request: validate the address, geocode it,
//! then fetch the forecast for the resulting coordinates. Each call owns its
//! own state; the service holds nothing but the two ports.

use std::{fmt, sync::Arc};

use domain::value_objects::{Address, DailyForecast};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ForecastPort, GeocodingPort},
};

/// Message carried by every unexpected failure leaving the service
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Address-to-forecast orchestration
pub struct ForecastService {
    geocoder: Arc<dyn GeocodingPort>,
    weather: Arc<dyn ForecastPort>,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService").finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service
    pub fn new(geocoder: Arc<dyn GeocodingPort>, weather: Arc<dyn ForecastPort>) -> Self {
        Self { geocoder, weather }
    }

    /// Geocode an address and return the forecast periods for it
    ///
    /// Outcomes:
    /// - blank or absent address: `Domain(BlankAddress)`, no port is called
    /// - no geocoding match: `AddressNotFound`, the forecast port is not called
    /// - cancellation: `Cancelled`, returned untouched
    /// - anything else: logged with the address, then `Internal`
    #[instrument(skip(self, address, cancel))]
    pub async fn forecast_for_address(
        &self,
        address: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Vec<DailyForecast>, ApplicationError> {
        let address = Address::parse(address)
            .inspect_err(|_| warn!("Forecast requested without an address"))?;

        info!(address = %address, "Received forecast request");

        match self.geocode_then_forecast(&address, cancel).await {
            Ok(forecast) => Ok(forecast),
            Err(err @ (ApplicationError::Cancelled | ApplicationError::AddressNotFound(_))) => {
                Err(err)
            },
            Err(err) => {
                error!(
                    address = %address,
                    reason = err.reason(),
                    error = %err,
                    "Error while processing forecast request"
                );
                Err(ApplicationError::Internal(INTERNAL_ERROR_MESSAGE.to_string()))
            },
        }
    }

    async fn geocode_then_forecast(
        &self,
        address: &Address,
        cancel: &CancellationToken,
    ) -> Result<Vec<DailyForecast>, ApplicationError> {
        if cancel.is_cancelled() {
            return Err(ApplicationError::Cancelled);
        }

        info!(address = %address, "Geocoding address");
        let Some(coordinates) = self.geocoder.resolve(address, cancel).await? else {
            warn!(address = %address, "Address could not be geocoded");
            return Err(ApplicationError::AddressNotFound(
                address.as_str().to_string(),
            ));
        };
        info!(
            latitude = coordinates.latitude(),
            longitude = coordinates.longitude(),
            "Geocoded address"
        );

        if cancel.is_cancelled() {
            return Err(ApplicationError::Cancelled);
        }

        let forecast = self.weather.forecast(&coordinates, cancel).await?;
        info!(count = forecast.len(), "Retrieved forecast");

        Ok(forecast)
    }
}
