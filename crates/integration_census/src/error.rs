//! Census geocoder error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Address was blank; no request was sent
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,

    /// Response body was not valid JSON
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Response JSON lacked a required field
    #[error("Malformed geocoding response: {0}")]
    MalformedResponse(String),

    /// The caller cancelled the request
    #[error("Geocoding request cancelled")]
    Cancelled,
}

impl GeocodingError {
    /// Stable diagnostic tag for logs
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidAddress(_) => "invalid_address",
            Self::ConnectionFailed(_) => "connection_failed",
            Self::Timeout => "timeout",
            Self::ParseError(_) => "parse_error",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<reqwest::Error> for GeocodingError {
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
