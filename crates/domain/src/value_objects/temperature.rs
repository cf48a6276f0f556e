//! Temperature units and Celsius normalization

/// Unit tag reported alongside an upstream temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Degrees Fahrenheit, tag "F"
    Fahrenheit,
    /// Degrees Celsius, tag "C"
    Celsius,
    /// Any other or missing tag; values pass through untouched
    Other,
}

impl TemperatureUnit {
    /// Interpret an optional unit tag, ignoring case
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(t) if t.eq_ignore_ascii_case("F") => Self::Fahrenheit,
            Some(t) if t.eq_ignore_ascii_case("C") => Self::Celsius,
            _ => Self::Other,
        }
    }
}

/// Convert an integer temperature to whole degrees Celsius
///
/// Fahrenheit is converted with `round((value - 32) * 5 / 9)`, rounding half
/// away from zero. Every other unit is returned unchanged.
///
/// ```
/// use domain::value_objects::{TemperatureUnit, normalize_to_celsius};
///
/// assert_eq!(normalize_to_celsius(45, TemperatureUnit::Fahrenheit), 7);
/// assert_eq!(normalize_to_celsius(30, TemperatureUnit::Fahrenheit), -1);
/// assert_eq!(normalize_to_celsius(20, TemperatureUnit::Celsius), 20);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)] // |result| <= |value| + 18 for any i32 input
pub fn normalize_to_celsius(value: i32, unit: TemperatureUnit) -> i32 {
    match unit {
        TemperatureUnit::Fahrenheit => ((f64::from(value) - 32.0) * 5.0 / 9.0).round() as i32,
        TemperatureUnit::Celsius | TemperatureUnit::Other => value,
    }
}
