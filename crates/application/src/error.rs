//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The geocoder found no match for the address
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// The forecast location lookup returned a non-success status
    #[error("Forecast location lookup failed (status {status})")]
    UpstreamLookupFailed {
        /// HTTP status returned by the provider
        status: u16,
    },

    /// The forecast payload fetch returned a non-success status
    #[error("Forecast fetch failed (status {status})")]
    UpstreamFetchFailed {
        /// HTTP status returned by the provider
        status: u16,
    },

    /// A provider response lacked a required field or had the wrong shape
    #[error("Upstream data missing: {detail}")]
    UpstreamDataMissing {
        /// Tag naming what was missing, e.g. `forecast_url_missing`
        reason: &'static str,
        /// Provider-specific description
        detail: String,
    },

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The operation was cancelled by the caller
    #[error("Operation cancelled")]
    Cancelled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Stable diagnostic tag for logs
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Domain(_) => "domain",
            Self::AddressNotFound(_) => "address_not_found",
            Self::UpstreamLookupFailed { .. } => "points_lookup_failed",
            Self::UpstreamFetchFailed { .. } => "forecast_fetch_failed",
            Self::UpstreamDataMissing { reason, .. } => *reason,
            Self::ExternalService(_) => "external_service",
            Self::Cancelled => "cancelled",
            Self::Configuration(_) => "configuration",
            Self::Internal(_) => "internal",
        }
    }
}
