//! Error types for the Almanac library.
//!
//! Only construction and parsing can fail recoverably. Calendar queries
//! report missing information as `None`, and broken preconditions panic.

use thiserror::Error;

/// A specialized Result type for Almanac operations.
pub type AlmanacResult<T> = Result<T, AlmanacError>;

/// The main error type for Almanac operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlmanacError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A month/day pair that does not exist in any year.
    #[error("Invalid month/day: {month}/{day}")]
    InvalidMonthDay {
        /// Month component (1-12).
        month: u32,
        /// Day-of-month component.
        day: u32,
    },

    /// Calendar name not recognized.
    #[error("unknown calendar: '{name}'")]
    UnknownCalendar {
        /// The name that failed to parse.
        name: String,
    },

    /// Day count convention name not recognized.
    #[error("unknown day count convention: '{name}'")]
    UnknownDayCount {
        /// The name that failed to parse.
        name: String,
    },

    /// Business day convention name not recognized.
    #[error("unknown business day convention: '{name}'")]
    UnknownBusinessDayConvention {
        /// The name that failed to parse.
        name: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl AlmanacError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unknown calendar error.
    #[must_use]
    pub fn unknown_calendar(name: impl Into<String>) -> Self {
        Self::UnknownCalendar { name: name.into() }
    }

    /// Creates an unknown day count error.
    #[must_use]
    pub fn unknown_day_count(name: impl Into<String>) -> Self {
        Self::UnknownDayCount { name: name.into() }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config_error(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for AlmanacError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_error(err.to_string())
    }
}

impl From<serde_json::Error> for AlmanacError {
    fn from(err: serde_json::Error) -> Self {
        Self::config_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlmanacError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_unknown_names() {
        let err = AlmanacError::unknown_calendar("LSE");
        assert_eq!(err.to_string(), "unknown calendar: 'LSE'");

        let err = AlmanacError::unknown_day_count("ACT/999");
        assert!(err.to_string().contains("ACT/999"));
    }

    #[test]
    fn test_month_day_error() {
        let err = AlmanacError::InvalidMonthDay { month: 2, day: 30 };
        assert_eq!(err.to_string(), "Invalid month/day: 2/30");
    }
}
