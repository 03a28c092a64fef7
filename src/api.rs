//! Weather API client for Open-Meteo integration
//!
//! This module provides HTTP client functionality for the two calls a lookup
//! makes: geocoding a free-text place name and fetching current conditions
//! for the resolved coordinates. Both endpoints are API-key-free. Requests
//! are never retried; a failed call surfaces immediately as a status line
//! and the user may simply submit again.

use crate::config::SeasonCastConfig;
use crate::error::{SeasonCastError, Service};
use crate::models::{CurrentConditions, Place};
use anyhow::Context;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the geocoding and forecast endpoints
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: SeasonCastConfig,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: SeasonCastConfig) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("SeasonCast/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Resolve a free-text place name to the best-matching place.
    ///
    /// Always takes the first candidate the geocoder returns; there is no
    /// ranking or disambiguation between multiple matches. Known
    /// limitation, documented in the README.
    pub async fn locate(&self, query: &str) -> crate::Result<Place> {
        info!("Geocoding location: '{}'", query);

        let url = format!(
            "{}/v1/search?name={}&count=1&language=en&format=json",
            self.config.geocoding_base_url,
            urlencoding::encode(query)
        );
        debug!("Geocoding request URL: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Geocoding request failed: {}", e);
            SeasonCastError::unavailable(Service::Geocoding, e)
        })?;

        if !response.status().is_success() {
            warn!("Geocoding returned HTTP {}", response.status());
            return Err(SeasonCastError::unavailable(
                Service::Geocoding,
                format!("HTTP {}", response.status()),
            ));
        }

        let body: openmeteo::GeocodingResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse geocoding response: {}", e);
            SeasonCastError::unavailable(Service::Geocoding, e)
        })?;

        let Some(first) = body.results.unwrap_or_default().into_iter().next() else {
            info!("No geocoding results for '{}'", query);
            return Err(SeasonCastError::not_found(query));
        };

        let place = Place::from(first);
        info!(
            "Resolved '{}' to {} ({})",
            query,
            place.name,
            place.format_coordinates()
        );
        Ok(place)
    }

    /// Fetch the current conditions for coordinates.
    ///
    /// The time zone string is forwarded verbatim so the provider reports
    /// the observation timestamp in local time; it is not validated here.
    pub async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> crate::Result<CurrentConditions> {
        info!(
            "Fetching current weather for coordinates: {:.4}, {:.4}",
            latitude, longitude
        );

        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true&timezone={}",
            self.config.forecast_base_url,
            latitude,
            longitude,
            urlencoding::encode(timezone)
        );
        debug!("Forecast request URL: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Forecast request failed: {}", e);
            SeasonCastError::unavailable(Service::Forecast, e)
        })?;

        if !response.status().is_success() {
            warn!("Forecast returned HTTP {}", response.status());
            return Err(SeasonCastError::unavailable(
                Service::Forecast,
                format!("HTTP {}", response.status()),
            ));
        }

        let body: openmeteo::ForecastResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse forecast response: {}", e);
            SeasonCastError::unavailable(Service::Forecast, e)
        })?;

        let Some(current) = body.current_weather else {
            warn!(
                "Forecast response for {:.4}, {:.4} has no current weather",
                latitude, longitude
            );
            return Err(SeasonCastError::NoData);
        };

        let conditions = CurrentConditions {
            observed_at: openmeteo::parse_observation_time(&current.time),
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
            weather_code: current.weathercode,
        };
        info!(
            "Current weather: {:.1}°C, {:.1} km/h, code {}",
            conditions.temperature_c, conditions.wind_speed_kmh, conditions.weather_code
        );
        Ok(conditions)
    }
}

/// `OpenMeteo` API response structures and conversion utilities
mod openmeteo {
    use crate::models::Place;
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::Deserialize;

    /// Geocoding response from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
        pub timezone: Option<String>,
    }

    impl From<GeocodingResult> for Place {
        fn from(result: GeocodingResult) -> Self {
            Place {
                latitude: result.latitude,
                longitude: result.longitude,
                name: result.name,
                country: result.country,
                // "auto" makes the forecast endpoint resolve the zone itself
                timezone: result.timezone.unwrap_or_else(|| "auto".to_string()),
            }
        }
    }

    /// Forecast response from `OpenMeteo`, reduced to the current payload
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current_weather: Option<CurrentWeather>,
    }

    /// Current weather payload from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeather {
        pub temperature: f64,
        pub windspeed: f64,
        pub weathercode: i32,
        pub time: String,
    }

    /// Parse an `OpenMeteo` timestamp like "2024-03-15T12:00", read as UTC.
    /// An unparseable timestamp falls back to the current time.
    pub fn parse_observation_time(raw: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
            .map_or_else(|_| Utc::now(), |dt| dt.and_utc())
    }
}
