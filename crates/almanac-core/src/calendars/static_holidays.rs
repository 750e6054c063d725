//! Calendars built from a fixed list of annual holidays.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::types::{Date, MonthDay, WeekendSet};

/// A calendar whose holidays are the same month/day pairs every year.
///
/// Holidays are kept sorted and deduplicated so lookups are a binary
/// search. There is no weekend observance: a holiday on a weekend day is
/// simply a weekend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStaticHolidays")]
pub struct StaticHolidayCalendar {
    name: String,
    holidays: Vec<MonthDay>,
    weekends: WeekendSet,
}

#[derive(Deserialize)]
struct RawStaticHolidays {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default)]
    holidays: Vec<MonthDay>,
    #[serde(default)]
    weekends: WeekendSet,
}

fn default_name() -> String {
    "Static Holidays".to_string()
}

impl From<RawStaticHolidays> for StaticHolidayCalendar {
    fn from(raw: RawStaticHolidays) -> Self {
        Self::new(raw.name, raw.holidays, raw.weekends)
    }
}

impl StaticHolidayCalendar {
    /// Creates a calendar from any list of month/day pairs.
    pub fn new(
        name: impl Into<String>,
        holidays: impl IntoIterator<Item = MonthDay>,
        weekends: WeekendSet,
    ) -> Self {
        let mut holidays: Vec<MonthDay> = holidays.into_iter().collect();
        holidays.sort_unstable();
        holidays.dedup();
        Self {
            name: name.into(),
            holidays,
            weekends,
        }
    }

    /// The holidays, sorted by month then day.
    #[must_use]
    pub fn holidays(&self) -> &[MonthDay] {
        &self.holidays
    }

    /// The weekend days.
    #[must_use]
    pub fn weekends(&self) -> WeekendSet {
        self.weekends
    }
}

impl Calendar for StaticHolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_weekend(&self, date: Date) -> Option<bool> {
        Some(self.weekends.contains(date.weekday()))
    }

    fn is_holiday(&self, date: Date) -> Option<bool> {
        Some(self.holidays.binary_search(&date.month_day()).is_ok())
    }

    fn describe(&self) -> String {
        format!(
            "{} ({} holidays, weekends: {})",
            self.name,
            self.holidays.len(),
            self.weekends
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn sample() -> StaticHolidayCalendar {
        StaticHolidayCalendar::new(
            "Sample",
            [MonthDay::new(12, 25), MonthDay::new(1, 1), MonthDay::new(12, 25)],
            WeekendSet::saturday_sunday(),
        )
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let cal = sample();
        assert_eq!(cal.holidays(), &[MonthDay::new(1, 1), MonthDay::new(12, 25)]);
    }

    #[test]
    fn test_lookup() {
        let cal = sample();
        assert_eq!(cal.is_holiday(d(2025, 12, 25)), Some(true));
        assert_eq!(cal.is_holiday(d(2025, 12, 24)), Some(false));
        assert_eq!(cal.is_business_day(d(2025, 1, 1)), Some(false));
        assert_eq!(cal.is_business_day(d(2025, 1, 2)), Some(true));
    }

    #[test]
    fn test_weekend_holiday_not_observed() {
        let cal = sample();
        // Christmas 2021 is a Saturday: no substitute day
        assert_eq!(cal.is_business_day(d(2021, 12, 24)), Some(true));
        assert_eq!(cal.is_business_day(d(2021, 12, 27)), Some(true));
        assert!(cal.observed_holidays_in_year(2021).len() == 1);
    }

    #[test]
    fn test_leap_day_holiday() {
        let cal = StaticHolidayCalendar::new("Leap", [MonthDay::new(2, 29)], WeekendSet::empty());
        assert_eq!(cal.is_holiday(d(2024, 2, 29)), Some(true));
        assert_eq!(cal.is_holiday(d(2025, 2, 28)), Some(false));
        assert_eq!(cal.is_holiday(d(2025, 3, 1)), Some(false));
    }

    #[test]
    fn test_deserialize_sorts() {
        let json = r#"{
            "name": "Desk",
            "holidays": [{"month":12,"day":26},{"month":1,"day":1},{"month":12,"day":26}],
            "weekends": ["Fri","Sat"]
        }"#;
        let cal: StaticHolidayCalendar = serde_json::from_str(json).unwrap();
        assert_eq!(cal.name(), "Desk");
        assert_eq!(cal.holidays(), &[MonthDay::new(1, 1), MonthDay::new(12, 26)]);
        assert!(cal.weekends().contains(Weekday::Fri));
        assert!(!cal.weekends().contains(Weekday::Sun));
    }
}
