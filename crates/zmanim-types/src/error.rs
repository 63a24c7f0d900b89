use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from zmanim operations.
///
/// A missing solar event (polar day or night) is not an error; it is reported
/// as `None` by the solvers. These variants cover caller misuse only.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZmanimError {
    /// Latitude outside [-90, 90].
    #[error("Latitude {value} is out of range (-90 to 90)")]
    InvalidLatitude { value: f64 },

    /// Longitude outside [-180, 180].
    #[error("Longitude {value} is out of range (-180 to 180)")]
    InvalidLongitude { value: f64 },

    /// Negative or non-finite elevation.
    #[error("Elevation {value} must be a finite, non-negative number of meters")]
    InvalidElevation { value: f64 },

    /// Zone name not found in the IANA database.
    #[error("Unknown time zone: {name}")]
    UnknownTimeZone { name: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl ZmanimError {
    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Creates an `UnknownTimeZone` error.
    pub fn unknown_zone(name: impl Into<String>) -> Self {
        Self::UnknownTimeZone { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ZmanimError::InvalidLatitude { value: 91.0 };
        assert_eq!(err.to_string(), "Latitude 91 is out of range (-90 to 90)");

        let err = ZmanimError::invalid_config("earth radius must be positive");
        assert!(err.to_string().contains("earth radius"));
    }
}
