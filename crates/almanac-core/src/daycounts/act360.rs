//! Actual/360 and Actual/364 day count conventions.
//!
//! Used primarily for money market instruments.

use super::DayCount;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 360 days.
///
/// # Usage
///
/// - Money market instruments (T-Bills, Commercial Paper)
/// - SOFR-based floating rate instruments
/// - EUR interest rate swaps (floating leg)
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 360.0
    }
}

/// Actual/364 day count convention.
///
/// Actual days over a 52-week year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act364;

impl DayCount for Act364 {
    fn name(&self) -> &'static str {
        "ACT/364"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 364.0
    }
}
