//! API error handling
//!
//! Every error response carries a fixed, client-safe message. The payload of
//! each variant is diagnostic only and never leaves the process.

use application::{ApplicationError, INTERNAL_ERROR_MESSAGE};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when `address` is absent or blank
pub const MISSING_ADDRESS_MESSAGE: &str = "Query parameter 'address' is required.";

/// Message returned when the geocoder finds no match
pub const NOT_FOUND_MESSAGE: &str = "Address could not be geocoded.";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Client-facing message
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => MISSING_ADDRESS_MESSAGE,
            Self::NotFound(_) => NOT_FOUND_MESSAGE,
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.public_message().to_string(),
            code: self.code().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::AddressNotFound(address) => Self::NotFound(address),
            // The service already collapses upstream failures; anything left is internal.
            other => Self::Internal(other.to_string()),
        }
    }
}
