//! Place model for geographic coordinates and geocoding metadata

use serde::{Deserialize, Serialize};

/// A resolved place, built from the best geocoding match
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Place name (city, region, etc.)
    pub name: String,
    /// Country name, when the geocoder knows it
    pub country: Option<String>,
    /// Time zone identifier, forwarded verbatim to the forecast request
    pub timezone: String,
}

impl Place {
    /// Create a new place without a country
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String, timezone: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: None,
            timezone,
        }
    }

    /// Format the coordinates for log output
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
