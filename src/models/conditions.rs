//! Current weather observation model

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single instantaneous weather reading, not a series
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Timestamp for this weather observation
    pub observed_at: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Wind speed in km/h (the provider's default unit)
    pub wind_speed_kmh: f64,
    /// WMO weather code
    pub weather_code: i32,
}

impl CurrentConditions {
    /// Wind speed converted to m/s
    #[must_use]
    pub fn wind_speed_ms(&self) -> f64 {
        self.wind_speed_kmh / 3.6
    }

    /// Calendar month of the observation (0-11), extracted in UTC
    #[must_use]
    pub fn month0(&self) -> u32 {
        self.observed_at.month0()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation(temperature_c: f64, wind_speed_kmh: f64) -> CurrentConditions {
        CurrentConditions {
            observed_at: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
                .and_utc(),
            temperature_c,
            wind_speed_kmh,
            weather_code: 3,
        }
    }

    #[test]
    fn test_wind_speed_ms() {
        assert_eq!(observation(15.4, 36.0).wind_speed_ms(), 10.0);
        assert_eq!(observation(15.4, 0.0).wind_speed_ms(), 0.0);
    }

    #[test]
    fn test_month0_is_zero_based() {
        // March observation -> index 2
        assert_eq!(observation(15.4, 10.0).month0(), 2);
    }
}
