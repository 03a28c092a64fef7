//! `SeasonCast` - current weather lookup with seasonal theming
//!
//! This library resolves a free-text place name to coordinates via the
//! Open-Meteo geocoding API, fetches the current conditions for those
//! coordinates, and formats them for display together with a calendar-season
//! theme derived from the observation month and hemisphere.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod presenter;
pub mod season;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use app::App;
pub use config::SeasonCastConfig;
pub use error::{SeasonCastError, Service};
pub use models::{CurrentConditions, Place};
pub use presenter::{Console, DisplayModel};
pub use season::SeasonKey;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SeasonCastError>;
