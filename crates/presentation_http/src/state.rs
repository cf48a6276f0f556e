//! Application state shared across handlers

use std::sync::Arc;

use application::ForecastService;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Forecast orchestration service
    pub forecast_service: Arc<ForecastService>,
}

impl AppState {
    /// Create the shared state
    #[must_use]
    pub const fn new(forecast_service: Arc<ForecastService>) -> Self {
        Self { forecast_service }
    }
}
