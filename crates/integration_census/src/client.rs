//! Census one-line-address geocoding client

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Coordinates;
use reqwest::Client;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use crate::{config::CensusConfig, error::GeocodingError};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form address to coordinates
    ///
    /// Returns `Ok(None)` when the provider has no match.
    async fn geocode(
        &self,
        address: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<Coordinates>, GeocodingError>;
}

/// Geocoding client for the Census Bureau `onelineaddress` endpoint
#[derive(Debug, Clone)]
pub struct CensusGeocodingClient {
    client: Client,
    config: CensusConfig,
}

impl CensusGeocodingClient {
    /// Create a new Census geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &CensusConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/geocoder/locations/onelineaddress",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl GeocodingClient for CensusGeocodingClient {
    #[instrument(skip(self, cancel))]
    async fn geocode(
        &self,
        address: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<Coordinates>, GeocodingError> {
        if address.trim().is_empty() {
            return Err(GeocodingError::InvalidAddress(
                "Address is required".to_string(),
            ));
        }

        let params = [
            ("address", address),
            ("benchmark", self.config.benchmark.as_str()),
            ("format", "json"),
        ];

        debug!(benchmark = %self.config.benchmark, "Geocoding address");

        let request = self.client.get(self.endpoint()).query(&params).send();
        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(GeocodingError::Cancelled),
            result = request => result?,
        };

        let status = response.status();
        if !status.is_success() {
            // The geocoder answers unknown and malformed addresses with error
            // statuses, so any non-success is reported as "no match". This also
            // hides real provider outages behind a not-found; callers rely on it.
            warn!(status = status.as_u16(), "Geocoder returned non-success status");
            return Ok(None);
        }

        let body: Value = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(GeocodingError::Cancelled),
            result = response.json::<Value>() => result?,
        };

        let coordinates = first_match(&body)?;
        match &coordinates {
            Some(coords) => debug!(%coords, "Geocoded address"),
            None => debug!("Geocoder returned no address matches"),
        }

        Ok(coordinates)
    }
}

/// Navigate `result.addressMatches[0].coordinates.{x,y}`
///
/// The provider reports `x` as longitude and `y` as latitude.
fn first_match(body: &Value) -> Result<Option<Coordinates>, GeocodingError> {
    let result = body
        .get("result")
        .ok_or_else(|| GeocodingError::MalformedResponse("missing result".to_string()))?;

    let matches = match result.get("addressMatches") {
        None => return Ok(None),
        Some(Value::Array(matches)) => matches,
        Some(_) => {
            return Err(GeocodingError::MalformedResponse(
                "addressMatches is not a list".to_string(),
            ));
        },
    };

    let Some(first) = matches.first() else {
        return Ok(None);
    };

    let coordinates = first.get("coordinates").ok_or_else(|| {
        GeocodingError::MalformedResponse("address match missing coordinates".to_string())
    })?;

    let longitude = coordinates
        .get("x")
        .and_then(Value::as_f64)
        .ok_or_else(|| GeocodingError::MalformedResponse("missing coordinate x".to_string()))?;
    let latitude = coordinates
        .get("y")
        .and_then(Value::as_f64)
        .ok_or_else(|| GeocodingError::MalformedResponse("missing coordinate y".to_string()))?;

    Coordinates::new(latitude, longitude)
        .map(Some)
        .map_err(|e| GeocodingError::MalformedResponse(e.to_string()))
}
