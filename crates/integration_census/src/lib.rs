//! US Census Bureau geocoder integration for Skycast
//!
//! Resolves a one-line postal address to coordinates via the
//! [Census geocoder](https://geocoding.geo.census.gov) `onelineaddress` endpoint.
//!
//! # Architecture
//!
//! [`GeocodingClient`] defines the interface, implemented by
//! [`CensusGeocodingClient`]. A non-success HTTP status from the provider is
//! reported as "no match" rather than as an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_census::{CensusConfig, CensusGeocodingClient, GeocodingClient};
//! use tokio_util::sync::CancellationToken;
//!
//! let client = CensusGeocodingClient::new(&CensusConfig::default())?;
//! let coords = client
//!     .geocode("4600 Silver Hill Rd, Washington, DC 20233", &CancellationToken::new())
//!     .await?;
//! ```

mod client;
mod config;
mod error;

pub use client::{CensusGeocodingClient, GeocodingClient};
pub use config::CensusConfig;
pub use error::GeocodingError;
