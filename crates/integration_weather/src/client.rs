//! NWS forecast client
//!
//! HTTP client for the National Weather Service gridpoint forecast API.

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use domain::value_objects::DailyForecast;
use reqwest::{
    Client, StatusCode, Url,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::response::{forecast_locator, parse_periods};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The `/points` lookup returned a non-success status
    #[error("NWS points lookup failed (status {status})")]
    PointsLookupFailed {
        /// HTTP status returned by the provider
        status: u16,
    },

    /// The `/points` response carried no usable forecast URL
    #[error("{0}")]
    ForecastUrlMissing(String),

    /// The forecast fetch returned a non-success status
    #[error("NWS forecast fetch failed (status {status})")]
    ForecastFetchFailed {
        /// HTTP status returned by the provider
        status: u16,
    },

    /// The forecast response carried no `properties.periods` array
    #[error("NWS forecast JSON missing periods")]
    PeriodsMissing,

    /// A forecast period lacked a required field
    #[error("Forecast period {index} has a missing or invalid '{field}'")]
    MalformedPeriod {
        /// Position of the period in the upstream array
        index: usize,
        /// Name of the offending field
        field: &'static str,
    },

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,
}

impl WeatherError {
    /// Stable diagnostic tag for logs
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::PointsLookupFailed { .. } => "points_lookup_failed",
            Self::ForecastUrlMissing(_) => "forecast_url_missing",
            Self::ForecastFetchFailed { .. } => "forecast_fetch_failed",
            Self::PeriodsMissing => "periods_missing",
            Self::MalformedPeriod { .. } => "malformed_period",
            Self::InvalidCoordinates => "invalid_coordinates",
            Self::ConnectionFailed(_) => "connection_failed",
            Self::Timeout => "timeout",
            Self::ParseError(_) => "parse_error",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::ParseError(err.to_string())
        } else {
            Self::ConnectionFailed(err.to_string())
        }
    }
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NwsConfig {
    /// NWS API base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header; NWS rejects requests without one
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("Skycast/", env!("CARGO_PKG_VERSION"), " (+https://example.com)").to_string()
}

impl Default for NwsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl NwsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if Url::parse(&self.base_url).is_err() {
            return Err(format!("base_url is not a valid URL: '{}'", self.base_url));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        Ok(())
    }
}

/// Weather client trait for fetching forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get every forecast period the provider reports for a location
    ///
    /// Periods are returned in provider order, typically fourteen (day and
    /// night for seven days), but the count is not guaranteed.
    async fn seven_day_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        cancel: &CancellationToken,
    ) -> Result<Vec<DailyForecast>, WeatherError>;
}

/// NWS HTTP client implementation
#[derive(Debug, Clone)]
pub struct NwsWeatherClient {
    client: Client,
    config: NwsConfig,
}

impl NwsWeatherClient {
    /// Create a new NWS client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: NwsConfig) -> Result<Self, WeatherError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/geo+json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the `/points` URL; `f64` formatting is locale-independent
    fn build_points_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/points/{latitude},{longitude}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Resolve the forecast locator; absolute URLs are used as given
    fn resolve_forecast_url(&self, locator: &str) -> Result<Url, WeatherError> {
        if let Ok(url) = Url::parse(locator) {
            return Ok(url);
        }

        let base = format!("{}/", self.config.base_url.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|base| base.join(locator.trim_start_matches('/')))
            .map_err(|e| WeatherError::ForecastUrlMissing(format!("Invalid forecast URL: {e}")))
    }

    /// GET a URL and decode its JSON body, aborting on cancellation
    async fn get_json(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<(StatusCode, Option<Value>), WeatherError> {
        let response = until_cancelled(cancel, self.client.get(url).send()).await?;

        let status = response.status();
        if !status.is_success() {
            return Ok((status, None));
        }

        let body = until_cancelled(cancel, response.json::<Value>()).await?;
        Ok((status, Some(body)))
    }
}

async fn until_cancelled<T>(
    cancel: &CancellationToken,
    request: impl Future<Output = Result<T, reqwest::Error>>,
) -> Result<T, WeatherError> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(WeatherError::Cancelled),
        result = request => result.map_err(WeatherError::from),
    }
}

#[async_trait]
impl WeatherClient for NwsWeatherClient {
    #[instrument(skip(self, cancel), fields(lat = %latitude, lon = %longitude))]
    async fn seven_day_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        cancel: &CancellationToken,
    ) -> Result<Vec<DailyForecast>, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let points_url = self.build_points_url(latitude, longitude);
        debug!(url = %points_url, "Resolving forecast location");

        let (status, points) = self.get_json(&points_url, cancel).await?;
        let Some(points) = points else {
            return Err(WeatherError::PointsLookupFailed {
                status: status.as_u16(),
            });
        };

        let forecast_url = self.resolve_forecast_url(forecast_locator(&points)?)?;
        debug!(url = %forecast_url, "Fetching forecast");

        let (status, forecast) = self.get_json(forecast_url.as_str(), cancel).await?;
        let Some(forecast) = forecast else {
            return Err(WeatherError::ForecastFetchFailed {
                status: status.as_u16(),
            });
        };

        let periods = parse_periods(&forecast)?;
        debug!(count = periods.len(), "Parsed forecast periods");

        Ok(periods)
    }
}
