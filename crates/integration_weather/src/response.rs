//! Navigation of NWS GeoJSON responses
//!
//! Responses are walked field by field instead of deserialized into fixed
//! structs, so that each absent field maps onto its own error.

use chrono::DateTime;
use domain::value_objects::{DailyForecast, TemperatureUnit, normalize_to_celsius};
use serde_json::Value;

use crate::client::WeatherError;

/// Extract `properties.forecast` from a `/points` response
pub(crate) fn forecast_locator(body: &Value) -> Result<&str, WeatherError> {
    let locator = body
        .get("properties")
        .and_then(|props| props.get("forecast"))
        .ok_or_else(|| {
            WeatherError::ForecastUrlMissing("NWS response missing forecast URL".to_string())
        })?;

    match locator.as_str() {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(WeatherError::ForecastUrlMissing(
            "Forecast URL is empty".to_string(),
        )),
    }
}

/// Convert `properties.periods` into forecast entries, keeping upstream order
pub(crate) fn parse_periods(body: &Value) -> Result<Vec<DailyForecast>, WeatherError> {
    let periods = body
        .get("properties")
        .and_then(|props| props.get("periods"))
        .and_then(Value::as_array)
        .ok_or(WeatherError::PeriodsMissing)?;

    periods
        .iter()
        .enumerate()
        .map(|(index, period)| parse_period(index, period))
        .collect()
}

fn parse_period(index: usize, period: &Value) -> Result<DailyForecast, WeatherError> {
    let malformed = |field: &'static str| WeatherError::MalformedPeriod { index, field };

    // The date is taken in the offset the provider reported, not converted
    let date = period
        .get("startTime")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|start| start.date_naive())
        .ok_or_else(|| malformed("startTime"))?;

    let is_daytime = period
        .get("isDaytime")
        .and_then(Value::as_bool)
        .ok_or_else(|| malformed("isDaytime"))?;

    let temperature = period
        .get("temperature")
        .and_then(Value::as_i64)
        .and_then(|t| i32::try_from(t).ok())
        .ok_or_else(|| malformed("temperature"))?;

    let unit = TemperatureUnit::from_tag(period.get("temperatureUnit").and_then(Value::as_str));

    let summary = period
        .get("shortForecast")
        .and_then(Value::as_str)
        .unwrap_or_default();

    Ok(DailyForecast::new(
        date,
        normalize_to_celsius(temperature, unit),
        summary,
        is_daytime,
    ))
}
