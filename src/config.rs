//! Configuration for the `SeasonCast` application
//!
//! There are no config files or environment variables to load; the defaults
//! point at the public Open-Meteo hosts. Tests construct a config pointing
//! at a mock server instead.

use serde::{Deserialize, Serialize};

/// Root configuration structure for the `SeasonCast` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonCastConfig {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Base URL for the forecast API
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
    /// Place looked up on startup before the first user input
    #[serde(default = "default_place")]
    pub default_place: String,
}

impl Default for SeasonCastConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_seconds: default_timeout_seconds(),
            default_place: default_place(),
        }
    }
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_place() -> String {
    "London".to_string()
}
