//! Value Objects - Immutable, identity-less domain primitives

mod address;
mod coordinates;
mod daily_forecast;
mod temperature;

pub use address::Address;
pub use coordinates::{Coordinates, InvalidCoordinates};
pub use daily_forecast::DailyForecast;
pub use temperature::{TemperatureUnit, normalize_to_celsius};
