//! Actual/365 day count conventions and their fixed-basis relatives.
//!
//! This module provides ACT/365 Fixed, ACT/365.25, ACT/366, ACT/365 Leap,
//! ACT/365 Actual and NL/365.

use super::DayCount;
use crate::types::{is_leap_year, Date};

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 365 days (ignoring leap years).
///
/// # Usage
///
/// - UK Gilts
/// - AUD and NZD markets
/// - Sterling interest rate swaps (fixed leg)
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 365.0
    }
}

/// Actual/365.25 day count convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act36525;

impl DayCount for Act36525 {
    fn name(&self) -> &'static str {
        "ACT/365.25"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 365.25
    }
}

/// Actual/366 day count convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act366;

impl DayCount for Act366 {
    fn name(&self) -> &'static str {
        "ACT/366"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 366.0
    }
}

/// Actual/365 Leap day count convention (ACT/365L).
///
/// The denominator is 366 if the end date falls in a leap year,
/// otherwise 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Leap;

impl DayCount for Act365Leap {
    fn name(&self) -> &'static str {
        "ACT/365L"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        let basis = if end.is_leap_year() { 366.0 } else { 365.0 };
        start.days_between(&end) as f64 / basis
    }
}

/// True if February 29th falls in `(start, end]`.
///
/// # Panics
///
/// Panics if the period spans more than one year boundary.
fn contains_feb_29(start: Date, end: Date, convention: &str) -> bool {
    assert!(
        end.year() - start.year() <= 1,
        "{convention} requires a period spanning at most one year boundary, got {start} to {end}"
    );

    [start.year(), end.year()]
        .into_iter()
        .find(|year| is_leap_year(*year))
        .and_then(|year| Date::from_ymd_opt(year, 2, 29))
        .is_some_and(|feb_29| feb_29 > start && feb_29 <= end)
}

/// Actual/365 Actual day count convention (ACT/365A).
///
/// Actual days over 366 if the period contains February 29th, else 365.
/// Only defined for periods crossing at most one year boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Actual;

impl DayCount for Act365Actual {
    fn name(&self) -> &'static str {
        "ACT/365A"
    }

    /// # Panics
    ///
    /// Panics if the period spans more than one year boundary.
    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = start.days_between(&end) as f64;
        if contains_feb_29(start, end, self.name()) {
            days / 366.0
        } else {
            days / 365.0
        }
    }
}

/// No-leap/365 day count convention (NL/365).
///
/// Actual days, skipping February 29th, over 365. Only defined for periods
/// crossing at most one year boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nl365;

impl DayCount for Nl365 {
    fn name(&self) -> &'static str {
        "NL/365"
    }

    /// # Panics
    ///
    /// Panics if the period spans more than one year boundary.
    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = start.days_between(&end);
        if contains_feb_29(start, end, self.name()) {
            (days - 1) as f64 / 365.0
        } else {
            days as f64 / 365.0
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let (from, to, sign) = if end < start {
            (end, start, -1)
        } else {
            (start, end, 1)
        };
        let leap_days = i64::from(contains_feb_29(from, to, self.name()));
        sign * (from.days_between(&to) - leap_days)
    }
}
