//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - The full address-to-forecast chain through both adapters against wiremock
//! - Error mapping from provider failures to the application taxonomy

use std::sync::Arc;

use application::{ApplicationError, ForecastService, GeocodingPort, INTERNAL_ERROR_MESSAGE};
use domain::{DomainError, value_objects::Address};
use infrastructure::{CensusGeocodingAdapter, NwsForecastAdapter};
use integration_census::CensusConfig;
use integration_weather::NwsConfig;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEOCODER_PATH: &str = "/geocoder/locations/onelineaddress";
const POINTS_PATH: &str = "/points/38.8977,-77.0365";
const FORECAST_PATH: &str = "/gridpoints/LWX/97,71/forecast";

fn geocoder_match() -> serde_json::Value {
    serde_json::json!({
        "result": {
            "addressMatches": [
                { "coordinates": { "x": -77.0365, "y": 38.8977 } }
            ]
        }
    })
}

fn points(server: &MockServer) -> serde_json::Value {
    serde_json::json!({
        "properties": { "forecast": format!("{}{FORECAST_PATH}", server.uri()) }
    })
}

fn forecast() -> serde_json::Value {
    serde_json::json!({
        "properties": {
            "periods": [
                {
                    "startTime": "2025-01-06T06:00:00-05:00",
                    "isDaytime": true,
                    "temperature": 45,
                    "temperatureUnit": "F",
                    "shortForecast": "Sunny"
                },
                {
                    "startTime": "2025-01-06T18:00:00-05:00",
                    "isDaytime": false,
                    "temperature": 30,
                    "temperatureUnit": "F",
                    "shortForecast": "Clear"
                }
            ]
        }
    })
}

#[allow(clippy::expect_used)]
fn service(server: &MockServer) -> ForecastService {
    let geocoding = CensusConfig {
        base_url: server.uri(),
        ..CensusConfig::for_testing()
    };
    let weather = NwsConfig {
        base_url: server.uri(),
        ..NwsConfig::for_testing()
    };

    ForecastService::new(
        Arc::new(CensusGeocodingAdapter::new(&geocoding).expect("geocoding adapter")),
        Arc::new(NwsForecastAdapter::new(weather).expect("forecast adapter")),
    )
}

async fn mount_geocoder(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(GEOCODER_PATH))
        .and(query_param("benchmark", "2020"))
        .and(query_param("format", "json"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// End-to-end forecast chain
// ============================================================================

mod forecast_chain_tests {
    use super::*;

    #[tokio::test]
    async fn resolves_address_and_converts_forecast() {
        let server = MockServer::start().await;
        mount_geocoder(
            &server,
            ResponseTemplate::new(200).set_body_json(geocoder_match()),
        )
        .await;
        Mock::given(method("GET"))
            .and(path(POINTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(points(&server)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(FORECAST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast()))
            .expect(1)
            .mount(&server)
            .await;

        let result = service(&server)
            .forecast_for_address(Some("1600 Pennsylvania Ave"), &CancellationToken::new())
            .await;

        let periods = result.expect("forecast should succeed");
        let json = serde_json::to_value(&periods).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!([
                { "date": "2025-01-06", "temperatureC": 7, "summary": "Sunny", "isDaytime": true },
                { "date": "2025-01-06", "temperatureC": -1, "summary": "Clear", "isDaytime": false }
            ])
        );
    }

    #[tokio::test]
    async fn no_match_never_calls_weather() {
        let server = MockServer::start().await;
        mount_geocoder(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "result": { "addressMatches": [] } })),
        )
        .await;
        Mock::given(method("GET"))
            .and(path(POINTS_PATH))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = service(&server)
            .forecast_for_address(Some("Nowhere"), &CancellationToken::new())
            .await;

        assert!(
            matches!(result, Err(ApplicationError::AddressNotFound(_))),
            "got: {result:?}"
        );
    }

    #[tokio::test]
    async fn geocoder_outage_reads_as_not_found() {
        let server = MockServer::start().await;
        mount_geocoder(&server, ResponseTemplate::new(502)).await;

        let result = service(&server)
            .forecast_for_address(Some("1600 Pennsylvania Ave"), &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(ApplicationError::AddressNotFound(_))));
    }

    #[tokio::test]
    async fn points_failure_is_internal() {
        let server = MockServer::start().await;
        mount_geocoder(
            &server,
            ResponseTemplate::new(200).set_body_json(geocoder_match()),
        )
        .await;
        Mock::given(method("GET"))
            .and(path(POINTS_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = service(&server)
            .forecast_for_address(Some("1600 Pennsylvania Ave"), &CancellationToken::new())
            .await;

        assert!(
            matches!(&result, Err(ApplicationError::Internal(msg)) if msg == INTERNAL_ERROR_MESSAGE),
            "got: {result:?}"
        );
    }

    #[tokio::test]
    async fn blank_address_sends_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = service(&server)
            .forecast_for_address(Some("  "), &CancellationToken::new())
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::BlankAddress))
        ));
    }
}

// ============================================================================
// Adapter error mapping
// ============================================================================

mod adapter_mapping_tests {
    use super::*;

    #[tokio::test]
    async fn geocoding_adapter_reports_cancellation() {
        let server = MockServer::start().await;
        mount_geocoder(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(geocoder_match())
                .set_delay(std::time::Duration::from_secs(10)),
        )
        .await;

        #[allow(clippy::expect_used)]
        let adapter = CensusGeocodingAdapter::new(&CensusConfig {
            base_url: server.uri(),
            ..CensusConfig::for_testing()
        })
        .expect("adapter");
        #[allow(clippy::expect_used)]
        let address = Address::parse(Some("1600 Pennsylvania Ave")).expect("address");

        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let result = adapter.resolve(&address, &cancel).await;
        assert!(matches!(result, Err(ApplicationError::Cancelled)));
    }

    #[tokio::test]
    async fn geocoding_adapter_maps_malformed_body() {
        let server = MockServer::start().await;
        mount_geocoder(
            &server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "errors": [] })),
        )
        .await;

        #[allow(clippy::expect_used)]
        let adapter = CensusGeocodingAdapter::new(&CensusConfig {
            base_url: server.uri(),
            ..CensusConfig::for_testing()
        })
        .expect("adapter");
        #[allow(clippy::expect_used)]
        let address = Address::parse(Some("1600 Pennsylvania Ave")).expect("address");

        let result = adapter.resolve(&address, &CancellationToken::new()).await;
        assert!(matches!(
            result,
            Err(ApplicationError::UpstreamDataMissing {
                reason: "malformed_response",
                ..
            })
        ));
    }
}
