//! Error types and handling for the `SeasonCast` application

use thiserror::Error;

/// Remote service involved in a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Open-Meteo geocoding endpoint
    Geocoding,
    /// Open-Meteo forecast endpoint
    Forecast,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Service::Geocoding => write!(f, "geocoding"),
            Service::Forecast => write!(f, "weather"),
        }
    }
}

/// Main error type for the `SeasonCast` application
///
/// One variant per failure the lookup pipeline can hit. All of them surface
/// as a one-line status message; none are fatal to the session.
#[derive(Error, Debug)]
pub enum SeasonCastError {
    /// Blank input, rejected before any network call
    #[error("no place name given")]
    EmptyQuery,

    /// An HTTP call to a provider did not succeed
    #[error("the {service} service is unavailable: {reason}")]
    ServiceUnavailable { service: Service, reason: String },

    /// The geocoder returned no candidates
    #[error("no match for place '{query}'")]
    NotFound { query: String },

    /// The forecast response lacked a current-conditions payload
    #[error("no current weather data in forecast response")]
    NoData,
}

impl SeasonCastError {
    /// Create a service-unavailable error
    pub fn unavailable<R: ToString>(service: Service, reason: R) -> Self {
        Self::ServiceUnavailable {
            service,
            reason: reason.to_string(),
        }
    }

    /// Create a not-found error for a query
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            SeasonCastError::EmptyQuery => "Enter a place to search.",
            SeasonCastError::ServiceUnavailable {
                service: Service::Geocoding,
                ..
            } => "Could not reach the geocoding service.",
            SeasonCastError::ServiceUnavailable {
                service: Service::Forecast,
                ..
            } => "Could not reach the weather service.",
            SeasonCastError::NotFound { .. } => "Place not found. Try another city or spelling.",
            SeasonCastError::NoData => "No weather data available for this location right now.",
        }
    }
}
