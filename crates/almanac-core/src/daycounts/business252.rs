//! Business/252 day count convention.
//!
//! Brazilian convention: business days between the dates over a 252-day
//! business year. The calendar is part of the convention.

use super::DayCount;
use crate::calendars::Calendar;
use crate::types::{Date, IntervalBounds};

/// Business/252 day count convention.
///
/// Counts the business days of `calendar` between the dates, with the
/// endpoints included according to `bounds`. A count of zero or one gives
/// a year fraction of zero; otherwise the fraction is `(count - 1) / 252`.
#[derive(Debug, Clone, Copy)]
pub struct Business252<'a, C: Calendar + ?Sized> {
    calendar: &'a C,
    bounds: IntervalBounds,
}

impl<'a, C: Calendar + ?Sized> Business252<'a, C> {
    /// Creates a BUS/252 day count over `calendar`.
    #[must_use]
    pub fn new(calendar: &'a C, bounds: IntervalBounds) -> Self {
        Self { calendar, bounds }
    }

    /// The calendar business days are counted in.
    #[must_use]
    pub fn calendar(&self) -> &'a C {
        self.calendar
    }

    /// The interval bounds used when counting.
    #[must_use]
    pub fn bounds(&self) -> IntervalBounds {
        self.bounds
    }

    fn ordered_business_days(&self, start: Date, end: Date) -> usize {
        self.calendar.business_day_count(start, end, self.bounds)
    }
}

impl<C: Calendar + ?Sized> DayCount for Business252<'_, C> {
    fn name(&self) -> &'static str {
        "BUS/252"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        match self.ordered_business_days(start, end) {
            0 | 1 => 0.0,
            count => (count - 1) as f64 / 252.0,
        }
    }

    /// Signed number of business days in the period.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        if end < start {
            -(self.ordered_business_days(end, start) as i64)
        } else {
            self.ordered_business_days(start, end) as i64
        }
    }
}
