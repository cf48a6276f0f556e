//! Application configuration
//!
//! Split into the HTTP server settings (`server`) and the two provider
//! configurations, which live with their integration crates.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. `config.toml` (or any format `config` understands) in the working directory
//! 3. environment variables prefixed `SKYCAST_`, nested with `__`,
//!    e.g. `SKYCAST_SERVER__PORT=8080` or `SKYCAST_WEATHER__USER_AGENT=...`

mod server;

use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, builder::DefaultState};
use integration_census::CensusConfig;
use integration_weather::NwsConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Census geocoder configuration
    #[serde(default)]
    pub geocoding: CensusConfig,

    /// National Weather Service configuration
    #[serde(default)]
    pub weather: NwsConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            // Load from file if exists
            .add_source(File::with_name("config").required(false))
            // Override with environment variables (e.g., SKYCAST_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix("SKYCAST")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a TOML document layered over the defaults
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)
    }

    /// Validate every section, reporting the first problem found
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending section.
    pub fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("server: {e}"))?;
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.weather
            .validate()
            .map_err(|e| format!("weather: {e}"))?;
        Ok(())
    }
}
