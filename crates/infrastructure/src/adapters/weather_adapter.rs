//! Weather adapter - Implements ForecastPort using integration_weather

use std::sync::Arc;

use application::{error::ApplicationError, ports::ForecastPort};
use async_trait::async_trait;
use domain::value_objects::{Coordinates, DailyForecast};
use integration_weather::{NwsConfig, NwsWeatherClient, WeatherClient, WeatherError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Adapter for forecasts from the National Weather Service
pub struct NwsForecastAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for NwsForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NwsForecastAdapter")
            .field("client", &"WeatherClient")
            .finish()
    }
}

impl NwsForecastAdapter {
    /// Create an adapter with its own NWS client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: NwsConfig) -> Result<Self, ApplicationError> {
        let client = NwsWeatherClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::PointsLookupFailed { status } => {
                ApplicationError::UpstreamLookupFailed { status }
            },
            WeatherError::ForecastFetchFailed { status } => {
                ApplicationError::UpstreamFetchFailed { status }
            },
            e @ (WeatherError::ForecastUrlMissing(_)
            | WeatherError::PeriodsMissing
            | WeatherError::MalformedPeriod { .. }) => ApplicationError::UpstreamDataMissing {
                reason: e.reason(),
                detail: e.to_string(),
            },
            WeatherError::Cancelled => ApplicationError::Cancelled,
            e @ (WeatherError::InvalidCoordinates
            | WeatherError::ConnectionFailed(_)
            | WeatherError::Timeout
            | WeatherError::ParseError(_)) => ApplicationError::ExternalService(e.to_string()),
        }
    }
}

#[async_trait]
impl ForecastPort for NwsForecastAdapter {
    #[instrument(skip(self, cancel), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn forecast(
        &self,
        location: &Coordinates,
        cancel: &CancellationToken,
    ) -> Result<Vec<DailyForecast>, ApplicationError> {
        let result = self
            .client
            .seven_day_forecast(location.latitude(), location.longitude(), cancel)
            .await;

        match &result {
            Ok(periods) => debug!(count = periods.len(), "Forecast retrieved"),
            Err(e) => debug!(reason = e.reason(), error = %e, "Forecast retrieval failed"),
        }

        result.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    struct FixedClient(fn() -> Result<Vec<DailyForecast>, WeatherError>);

    #[async_trait]
    impl WeatherClient for FixedClient {
        async fn seven_day_forecast(
            &self,
            _latitude: f64,
            _longitude: f64,
            _cancel: &CancellationToken,
        ) -> Result<Vec<DailyForecast>, WeatherError> {
            (self.0)()
        }
    }

    fn location() -> Coordinates {
        Coordinates::new(38.8977, -77.0365).unwrap()
    }

    #[test]
    fn new_creates_adapter() {
        assert!(NwsForecastAdapter::new(NwsConfig::for_testing()).is_ok());
    }

    #[test]
    fn debug_impl() {
        let adapter = NwsForecastAdapter::new(NwsConfig::for_testing()).unwrap();
        assert!(format!("{adapter:?}").contains("NwsForecastAdapter"));
    }

    #[tokio::test]
    async fn passes_periods_through() {
        let adapter = NwsForecastAdapter::with_client(Arc::new(FixedClient(|| {
            Ok(vec![DailyForecast::new(
                NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
                20,
                "Sunny",
                true,
            )])
        })));

        let periods = adapter
            .forecast(&location(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].summary, "Sunny");
    }

    #[tokio::test]
    async fn maps_errors_from_client() {
        let adapter = NwsForecastAdapter::with_client(Arc::new(FixedClient(|| {
            Err(WeatherError::PointsLookupFailed { status: 404 })
        })));

        let result = adapter.forecast(&location(), &CancellationToken::new()).await;
        assert!(matches!(
            result,
            Err(ApplicationError::UpstreamLookupFailed { status: 404 })
        ));
    }

    #[test]
    fn map_error_fetch_failed() {
        assert!(matches!(
            NwsForecastAdapter::map_error(WeatherError::ForecastFetchFailed { status: 500 }),
            ApplicationError::UpstreamFetchFailed { status: 500 }
        ));
    }

    #[test]
    fn map_error_missing_data_keeps_message() {
        let mapped = NwsForecastAdapter::map_error(WeatherError::ForecastUrlMissing(
            "NWS response missing forecast URL".into(),
        ));
        assert!(matches!(
            &mapped,
            ApplicationError::UpstreamDataMissing { detail, .. }
                if detail == "NWS response missing forecast URL"
        ));
    }

    #[test]
    fn map_error_missing_forecast_url_keeps_tag() {
        let mapped =
            NwsForecastAdapter::map_error(WeatherError::ForecastUrlMissing("blank".into()));
        assert_eq!(mapped.reason(), "forecast_url_missing");
    }

    #[test]
    fn map_error_missing_periods_keeps_tag() {
        let mapped = NwsForecastAdapter::map_error(WeatherError::PeriodsMissing);
        assert!(matches!(mapped, ApplicationError::UpstreamDataMissing { .. }));
        assert_eq!(mapped.reason(), "periods_missing");
    }

    #[test]
    fn map_error_malformed_period_keeps_tag() {
        let mapped = NwsForecastAdapter::map_error(WeatherError::MalformedPeriod {
            index: 0,
            field: "startTime",
        });
        assert!(matches!(mapped, ApplicationError::UpstreamDataMissing { .. }));
        assert_eq!(mapped.reason(), "malformed_period");
    }

    #[test]
    fn map_error_status_failures_keep_tags() {
        assert_eq!(
            NwsForecastAdapter::map_error(WeatherError::PointsLookupFailed { status: 500 })
                .reason(),
            "points_lookup_failed"
        );
        assert_eq!(
            NwsForecastAdapter::map_error(WeatherError::ForecastFetchFailed { status: 500 })
                .reason(),
            "forecast_fetch_failed"
        );
    }

    #[test]
    fn map_error_cancelled() {
        assert!(matches!(
            NwsForecastAdapter::map_error(WeatherError::Cancelled),
            ApplicationError::Cancelled
        ));
    }

    #[test]
    fn map_error_transport_is_external_service() {
        for err in [
            WeatherError::Timeout,
            WeatherError::ConnectionFailed("refused".into()),
            WeatherError::ParseError("eof".into()),
            WeatherError::InvalidCoordinates,
        ] {
            assert!(matches!(
                NwsForecastAdapter::map_error(err),
                ApplicationError::ExternalService(_)
            ));
        }
    }
}
