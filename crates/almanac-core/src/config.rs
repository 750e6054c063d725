//! Calendar and day count configuration.
//!
//! Bundles a calendar with the conventions usually chosen alongside it, so
//! applications can select them from a TOML or JSON file.
//!
//! ```toml
//! day_count = "Act365Fixed"
//! business_day_convention = "ModifiedFollowing"
//! search_window_days = 30
//! interval = "Closed"
//!
//! [calendar]
//! kind = "USNyse"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::calendars::{
    BusinessDayConvention, BusinessDaySearch, Calendar, MarketCalendar, DEFAULT_SEARCH_WINDOW_DAYS,
};
use crate::daycounts::DayCountConvention;
use crate::error::{AlmanacError, AlmanacResult};
use crate::types::{Date, IntervalBounds};

/// Calendar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmanacConfig {
    /// Calendar used for business day logic
    #[serde(default)]
    pub calendar: MarketCalendar,

    /// Day count convention for year fractions
    #[serde(default)]
    pub day_count: DayCountConvention,

    /// Adjustment applied by [`AlmanacConfig::adjust`]
    #[serde(default)]
    pub business_day_convention: BusinessDayConvention,

    /// Calendar days searched for a business day
    #[serde(default = "default_search_window_days")]
    pub search_window_days: u32,

    /// Endpoint inclusion for business day counts
    #[serde(default)]
    pub interval: IntervalBounds,
}

fn default_search_window_days() -> u32 {
    DEFAULT_SEARCH_WINDOW_DAYS
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            calendar: MarketCalendar::default(),
            day_count: DayCountConvention::default(),
            business_day_convention: BusinessDayConvention::default(),
            search_window_days: default_search_window_days(),
            interval: IntervalBounds::default(),
        }
    }
}

impl AlmanacConfig {
    /// Parses and validates a TOML configuration.
    pub fn from_toml_str(content: &str) -> AlmanacResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(content: &str) -> AlmanacResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AlmanacResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AlmanacError::config_error(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks the configured values are usable.
    pub fn validate(self) -> AlmanacResult<Self> {
        if self.search_window_days == 0 {
            return Err(AlmanacError::config_error(
                "search_window_days must be positive",
            ));
        }
        Ok(self)
    }

    /// Search options for business day adjustment.
    #[must_use]
    pub fn search(&self) -> BusinessDaySearch {
        BusinessDaySearch::starting_on_date().with_window(self.search_window_days)
    }

    /// Adjusts `date` with the configured calendar and convention.
    #[must_use]
    pub fn adjust(&self, date: Date) -> Option<Date> {
        self.calendar
            .adjust_with(date, self.business_day_convention, self.search())
    }

    /// Year fraction with the configured day count, calendar and interval.
    ///
    /// # Panics
    ///
    /// Panics where the day count itself does, e.g. ACT/365A across more
    /// than one year boundary.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count
            .year_fraction_with(start, end, Some(&self.calendar), self.interval)
    }

    /// Business days between the dates under the configured interval.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    #[must_use]
    pub fn business_days(&self, from: Date, to: Date) -> Vec<Date> {
        self.calendar.business_days_in_range(from, to, self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_default() {
        let config = AlmanacConfig::default();
        assert_eq!(config.calendar, MarketCalendar::USFederalGovt);
        assert_eq!(config.day_count, DayCountConvention::Act360);
        assert_eq!(config.business_day_convention, BusinessDayConvention::Following);
        assert_eq!(config.search_window_days, 60);
        assert_eq!(config.interval, IntervalBounds::RightOpen);
    }

    #[test]
    fn test_from_toml() {
        let config = AlmanacConfig::from_toml_str(
            r#"
            day_count = "Act365Fixed"
            business_day_convention = "ModifiedFollowing"
            search_window_days = 30
            interval = "Closed"

            [calendar]
            kind = "USNyse"
            "#,
        )
        .unwrap();

        assert_eq!(config.calendar, MarketCalendar::USNyse);
        assert_eq!(config.day_count, DayCountConvention::Act365Fixed);
        assert_eq!(config.search_window_days, 30);
        // Saturday May 31 2025 rolls back into May
        assert_eq!(config.adjust(d(2025, 5, 31)), Some(d(2025, 5, 30)));
    }

    #[test]
    fn test_from_toml_defaults_missing_fields() {
        let config = AlmanacConfig::from_toml_str("").unwrap();
        assert_eq!(config, AlmanacConfig::default());
    }

    #[test]
    fn test_from_json_static_calendar() {
        let config = AlmanacConfig::from_json_str(
            r#"{
                "calendar": {
                    "kind": "StaticHolidays",
                    "name": "Desk",
                    "holidays": [{"month": 12, "day": 25}],
                    "weekends": ["Sat", "Sun"]
                },
                "day_count": "Business252",
                "interval": "Closed"
            }"#,
        )
        .unwrap();

        // Christmas 2025 is a Thursday
        assert_eq!(config.calendar.is_business_day(d(2025, 12, 25)), Some(false));
        let days = config.business_days(d(2025, 12, 22), d(2025, 12, 26));
        assert_eq!(days.len(), 4);
        assert_relative_eq!(config.year_fraction(d(2025, 12, 22), d(2025, 12, 26)), 3.0 / 252.0);
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = AlmanacConfig::from_toml_str("search_window_days = 0").unwrap_err();
        assert!(matches!(err, AlmanacError::ConfigError { .. }));
    }

    #[test]
    fn test_unknown_calendar_kind_rejected() {
        let err = AlmanacConfig::from_json_str(r#"{"calendar": {"kind": "LSE"}}"#).unwrap_err();
        assert!(matches!(err, AlmanacError::ConfigError { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = AlmanacConfig::from_file("/nonexistent/almanac.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
