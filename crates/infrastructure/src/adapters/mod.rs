//! Adapters - Implementations of application ports

mod geocoding_adapter;
mod weather_adapter;

pub use geocoding_adapter::CensusGeocodingAdapter;
pub use weather_adapter::NwsForecastAdapter;
