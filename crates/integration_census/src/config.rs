//! Census geocoder configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Census geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusConfig {
    /// Base URL for the Census geocoder
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Address dataset benchmark to query
    #[serde(default = "default_benchmark")]
    pub benchmark: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://geocoding.geo.census.gov".to_string()
}

// 2020 is the last full benchmark the geocoder publishes
fn default_benchmark() -> String {
    "2020".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("Skycast/", env!("CARGO_PKG_VERSION"), " (+https://example.com)").to_string()
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            benchmark: default_benchmark(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl CensusConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.benchmark.trim().is_empty() {
            return Err("benchmark must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        Ok(())
    }
}
