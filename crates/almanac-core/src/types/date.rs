//! Calendar date type.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::MonthDay;
use crate::error::{AlmanacError, AlmanacResult};

/// A calendar date (year, month, day) with no time-of-day component.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Equality and
/// ordering are calendar ordering, which is what every calendar and day
/// count operation in this crate works with. Timestamps are projected onto
/// a `Date` through [`CalendarDate`](super::CalendarDate).
///
/// # Example
///
/// ```rust
/// use almanac_core::types::Date;
///
/// let date = Date::from_ymd(2024, 2, 29).unwrap();
/// assert!(date.is_last_day_of_february());
/// assert_eq!(date.add_years(1), Date::from_ymd(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AlmanacResult<Self> {
        Self::from_ymd_opt(year, month, day)
            .ok_or_else(|| AlmanacError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a new date, returning `None` if it does not exist.
    #[must_use]
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Date)
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> AlmanacResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| AlmanacError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// January 1st of `year`.
    #[must_use]
    pub fn first_of_year(year: i32) -> Self {
        Date(NaiveDate::from_ymd_opt(year, 1, 1).expect("first of year should always be valid"))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the (month, day) pair, dropping the year.
    #[must_use]
    pub fn month_day(&self) -> MonthDay {
        MonthDay::new(self.month(), self.day())
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// The following calendar day.
    #[must_use]
    pub fn succ(&self) -> Self {
        self.add_days(1)
    }

    /// The preceding calendar day.
    #[must_use]
    pub fn pred(&self) -> Self {
        self.add_days(-1)
    }

    /// Adds a number of years to the date.
    ///
    /// February 29th rolls back to February 28th when the target year is
    /// not a leap year.
    #[must_use]
    pub fn add_years(&self, years: i32) -> Self {
        let new_year = self.year() + years;
        let new_day = self.day().min(days_in_month(new_year, self.month()));
        Date(
            NaiveDate::from_ymd_opt(new_year, self.month(), new_day)
                .expect("clamped day should always be valid"),
        )
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the first day of the date's month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), 1)
                .expect("first of month should always be valid"),
        )
    }

    /// Returns the end of month for the current date.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), self.days_in_month())
                .expect("end of month should always be valid"),
        )
    }

    /// Checks if the date is the end of month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// February 29th in leap years, February 28th otherwise.
    #[must_use]
    pub fn is_last_day_of_february(&self) -> bool {
        self.month() == 2 && self.is_end_of_month()
    }

    /// True when both dates fall in the same month of the same year.
    #[must_use]
    pub fn same_month(&self, other: &Date) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Long human readable form, e.g. `Sunday, January 4, 2015`.
    #[must_use]
    pub fn long_format(&self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl std::str::FromStr for Date {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Number of days in `month` of `year`.
///
/// # Panics
///
/// Panics if `month` is not in 1..=12.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("Invalid month: {month}"),
    }
}

/// Gregorian leap year test.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd_opt(2023, 2, 29).is_none());
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        let leap = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(leap.add_years(1), Date::from_ymd(2025, 2, 28).unwrap());
        assert_eq!(leap.add_years(4), Date::from_ymd(2028, 2, 29).unwrap());
        assert_eq!(leap.add_years(-4), Date::from_ymd(2020, 2, 29).unwrap());
    }

    #[test]
    fn test_leap_year() {
        assert!(Date::from_ymd(2024, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2025, 1, 1).unwrap().is_leap_year());
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_last_day_of_february() {
        assert!(Date::from_ymd(2023, 2, 28).unwrap().is_last_day_of_february());
        assert!(!Date::from_ymd(2024, 2, 28).unwrap().is_last_day_of_february());
        assert!(Date::from_ymd(2024, 2, 29).unwrap().is_last_day_of_february());
        assert!(!Date::from_ymd(2023, 3, 31).unwrap().is_last_day_of_february());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 30);
        assert_eq!(d2 - d1, 30);
        assert_eq!(d1 + 30, d2);
        assert_eq!(d2 - 30, d1);
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
        assert!(Date::parse("15/06/2025").is_err());
        assert_eq!("2025-06-15".parse::<Date>().unwrap(), date);
    }

    #[test]
    fn test_month_boundaries() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.start_of_month(), Date::from_ymd(2025, 6, 1).unwrap());
        assert_eq!(date.end_of_month(), Date::from_ymd(2025, 6, 30).unwrap());
        assert!(date.end_of_month().is_end_of_month());
        assert!(date.same_month(&date.end_of_month()));
        assert!(!date.same_month(&Date::from_ymd(2024, 6, 15).unwrap()));
    }

    #[test]
    fn test_long_format() {
        let date = Date::from_ymd(2015, 1, 4).unwrap();
        assert_eq!(date.long_format(), "Sunday, January 4, 2015");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
