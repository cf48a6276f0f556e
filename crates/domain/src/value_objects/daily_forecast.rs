//! Normalized forecast period

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One upstream forecast period with its temperature in whole degrees Celsius
///
/// Despite the name this is one entry per period, not per day: a daytime and a
/// nighttime period on the same date produce two entries. Callers that need
/// per-day grouping do it themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar date of the period start, in the offset the provider reported
    pub date: NaiveDate,
    /// Temperature in whole degrees Celsius
    #[serde(rename = "temperatureC")]
    pub temperature_celsius: i32,
    /// Short human-readable summary, empty when the provider omits one
    pub summary: String,
    /// Whether the period is a daytime period
    #[serde(rename = "isDaytime")]
    pub is_daytime: bool,
}

impl DailyForecast {
    /// Create a new forecast entry
    #[must_use]
    pub fn new(
        date: NaiveDate,
        temperature_celsius: i32,
        summary: impl Into<String>,
        is_daytime: bool,
    ) -> Self {
        Self {
            date,
            temperature_celsius,
            summary: summary.into(),
            is_daytime,
        }
    }
}
