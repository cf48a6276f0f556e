//! Skycast HTTP presentation layer
//!
//! This crate exposes the forecast lookup over HTTP.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestId, RequestIdLayer};
pub use routes::{cors_layer, create_router};
pub use state::AppState;
