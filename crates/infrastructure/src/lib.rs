//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the Census
//! and NWS integration clients, and owns configuration and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
