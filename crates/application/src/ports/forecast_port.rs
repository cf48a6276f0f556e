//! Forecast port
//!
//! Defines the interface for retrieving forecast periods for a location.

use async_trait::async_trait;
use domain::value_objects::{Coordinates, DailyForecast};
#[cfg(test)]
use mockall::automock;
use tokio_util::sync::CancellationToken;

use crate::error::ApplicationError;

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Get the forecast periods for a location, in provider order
    async fn forecast(
        &self,
        location: &Coordinates,
        cancel: &CancellationToken,
    ) -> Result<Vec<DailyForecast>, ApplicationError>;
}
