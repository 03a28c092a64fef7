//! Season resolution from observation month and hemisphere
//!
//! Pure lookup, no clock access: the caller extracts the month from the
//! observation timestamp in UTC. The month is read in UTC regardless of the
//! place's own time zone, so readings near a month boundary at far-eastern
//! or far-western longitudes can land in the neighbouring month's season.
//! Intentional; documented in the README.

use serde::{Deserialize, Serialize};

/// One of the four calendar seasons, with a fixed label and display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonKey {
    Spring,
    Summer,
    Autumn,
    Winter,
}

use SeasonKey::{Autumn, Spring, Summer, Winter};

/// Season per month (0-based) for latitudes >= 0
const NORTHERN: [SeasonKey; 12] = [
    Winter, Winter, Spring, Spring, Spring, Summer, Summer, Summer, Autumn, Autumn, Autumn, Winter,
];

/// Season per month (0-based) for latitudes < 0
const SOUTHERN: [SeasonKey; 12] = [
    Summer, Summer, Autumn, Autumn, Autumn, Winter, Winter, Winter, Spring, Spring, Spring, Summer,
];

impl SeasonKey {
    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Spring => "Spring",
            Summer => "Summer",
            Autumn => "Autumn",
            Winter => "Winter",
        }
    }

    /// Theme identifier used to style the result card
    #[must_use]
    pub fn theme(self) -> &'static str {
        match self {
            Spring => "season-spring",
            Summer => "season-summer",
            Autumn => "season-autumn",
            Winter => "season-winter",
        }
    }
}

/// Map an observation month (0-11) and latitude to a season.
///
/// Latitude >= 0 selects the northern table, so the equator counts as
/// northern. An out-of-range month falls back to spring; unreachable for
/// valid input, kept as a guard.
#[must_use]
pub fn resolve(month0: u32, latitude: f64) -> SeasonKey {
    let table = if latitude >= 0.0 { &NORTHERN } else { &SOUTHERN };
    table
        .get(month0 as usize)
        .copied()
        .unwrap_or(SeasonKey::Spring)
}
