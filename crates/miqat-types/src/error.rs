use thiserror::Error;
use serde::{Serialize, Deserialize};

/// Largest fixed UTC offset accepted for local clock conversion, in minutes.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Errors from miqat operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum MiqatError {
    /// Location record has no latitude/longitude.
    #[error("Location {city}, {country} has no latitude/longitude")]
    MissingCoordinate {
        city: String,
        country: String,
    },

    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error("Coordinate ({lat}, {lng}) is out of range")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// Calendar date that does not exist.
    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Calculation method code that is not in the table.
    #[error("Unknown calculation method: {0}")]
    UnknownMethod(String),

    /// Madhab code that is not recognized.
    #[error("Unknown madhab: {0}")]
    UnknownMadhab(String),

    /// Clock string that is neither `HH:mm` nor `h:mm AM/PM`.
    #[error("Invalid clock time: {0}")]
    InvalidTime(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl MiqatError {
    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Creates a `MissingCoordinate` error for a named place.
    pub fn missing_coordinate(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self::MissingCoordinate {
            city: city.into(),
            country: country.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MiqatError::missing_coordinate("London", "United Kingdom");
        assert_eq!(err.to_string(), "Location London, United Kingdom has no latitude/longitude");

        let err = MiqatError::InvalidDate { year: 2024, month: 2, day: 30 };
        assert_eq!(err.to_string(), "Invalid date 2024-02-30");
    }
}
