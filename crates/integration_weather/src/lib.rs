//! National Weather Service forecast integration
//!
//! Client for the NWS API (<https://api.weather.gov>). A forecast takes two
//! requests: `/points/{lat},{lon}` resolves the gridpoint forecast URL, which
//! is then fetched for its `periods`. No API key is required, but the service
//! rejects requests without a `User-Agent`.

pub mod client;
mod response;

pub use client::{NwsConfig, NwsWeatherClient, WeatherClient, WeatherError};
