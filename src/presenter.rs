//! Display formatting and the console surface
//!
//! The presenter turns a resolved place, an observation, and a season into
//! human-readable strings, and owns the terminal output exclusively: status
//! lines while a lookup is in flight and the result card after a full cycle
//! succeeds. No other component prints results.

use crate::models::{CurrentConditions, Place};
use crate::season::SeasonKey;

/// Human-readable strings for one completed lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    /// "City, Country" label, or "Unknown place" when the geocoder gave
    /// neither part
    pub place: String,
    /// Time-zone line, empty when the zone is unknown
    pub meta: String,
    /// Whole degrees with a °C suffix
    pub temperature: String,
    /// Condition text from the weather-code table
    pub condition: String,
    /// km/h with the m/s equivalent in parentheses
    pub wind: String,
    /// Observation time shown in the success status
    pub updated: String,
    /// Season label for the theme chip
    pub season_label: &'static str,
    /// Theme identifier for the result card
    pub theme: &'static str,
}

/// Convert a WMO weather code to display text.
///
/// Unrecognized codes get a generic label rather than failing the render.
#[must_use]
pub fn condition_text(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Current weather",
    }
}

/// Compose the "City, Country" label; either part may be missing or empty.
/// Returns an empty string when neither is usable.
#[must_use]
pub fn place_label(name: Option<&str>, country: Option<&str>) -> String {
    [name, country]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a temperature rounded to the nearest whole degree
#[must_use]
pub fn format_temperature(temperature_c: f64) -> String {
    format!("{}°C", temperature_c.round() as i64)
}

/// Format wind speed in km/h with the m/s equivalent, one decimal each
#[must_use]
pub fn format_wind(wind_speed_kmh: f64) -> String {
    format!("{:.1} km/h ({:.1} m/s)", wind_speed_kmh, wind_speed_kmh / 3.6)
}

/// Build the display strings for a completed lookup
#[must_use]
pub fn render(place: &Place, conditions: &CurrentConditions, season: SeasonKey) -> DisplayModel {
    let label = place_label(Some(&place.name), place.country.as_deref());

    DisplayModel {
        place: if label.is_empty() {
            "Unknown place".to_string()
        } else {
            label
        },
        meta: if place.timezone.is_empty() {
            String::new()
        } else {
            format!("Time zone: {}", place.timezone)
        },
        temperature: format_temperature(conditions.temperature_c),
        condition: condition_text(conditions.weather_code).to_string(),
        wind: format_wind(conditions.wind_speed_kmh),
        updated: conditions.observed_at.format("%Y-%m-%d %H:%M").to_string(),
        season_label: season.label(),
        theme: season.theme(),
    }
}

/// Kind of status line shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A lookup stage is in flight
    Progress,
    /// A full cycle completed
    Success,
    /// The cycle failed; the user may retry immediately
    Error,
}

/// Exclusive owner of the terminal display surface
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    /// Print a one-line status message
    pub fn status(&self, kind: Status, message: &str) {
        match kind {
            Status::Progress | Status::Success => println!("{message}"),
            Status::Error => println!("Error: {message}"),
        }
    }

    /// Print the result card for a successful lookup
    pub fn show_card(&self, model: &DisplayModel) {
        println!();
        println!("  {}", model.place);
        if !model.meta.is_empty() {
            println!("  {}", model.meta);
        }
        println!("  {}  {}", model.temperature, model.condition);
        println!("  Wind: {}", model.wind);
        println!("  Season: {} [{}]", model.season_label, model.theme);
        println!();
    }
}
