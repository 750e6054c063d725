//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`Calendar`] capability set shared by every calendar
//! - Built-in market calendars and the [`MarketCalendar`] sum type
//! - Business day adjustment conventions
//! - The holiday rule library and Easter computation
//! - Cached queries over precomputed business day sequences
//!
//! Calendar predicates are partial: `None` means the calendar cannot say,
//! typically because the date precedes its coverage.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod cache;
mod conventions;
pub mod easter;
pub mod holidays;
mod market;
mod nyse;
pub mod special;
mod static_holidays;
mod target2;
mod us_calendar;

pub use cache::BusinessDaySeq;
pub use conventions::BusinessDayConvention;
pub use holidays::{is_holiday, resolve_holiday, GatedHoliday, HolidayKind, YearGate};
pub use market::MarketCalendar;
pub use nyse::NyseCalendar;
pub use static_holidays::StaticHolidayCalendar;
pub use target2::Target2Calendar;
pub use us_calendar::{USBondMarketCalendar, USFederalCalendar};

pub use crate::types::IntervalBounds;
use crate::types::{Date, WeekendSet};

/// Default number of calendar days searched for a business day.
pub const DEFAULT_SEARCH_WINDOW_DAYS: u32 = 60;

/// Direction of a business day search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

impl Direction {
    /// Signed one-day step.
    #[must_use]
    pub const fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Direction of a signed business day count.
    #[must_use]
    pub const fn of(n: i32) -> Self {
        if n >= 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Options for a business day search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessDaySearch {
    /// Calendar days to look at before giving up. Must be positive.
    pub window_days: u32,
    /// Return the starting date itself if it is a business day.
    pub start_on_date: bool,
}

impl Default for BusinessDaySearch {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_SEARCH_WINDOW_DAYS,
            start_on_date: false,
        }
    }
}

impl BusinessDaySearch {
    /// Search that accepts the starting date.
    #[must_use]
    pub fn starting_on_date() -> Self {
        Self {
            start_on_date: true,
            ..Self::default()
        }
    }

    /// Same search with a different window.
    #[must_use]
    pub fn with_window(self, window_days: u32) -> Self {
        Self {
            window_days,
            ..self
        }
    }

    /// Same search, excluding the starting date.
    #[must_use]
    pub fn strict(self) -> Self {
        Self {
            start_on_date: false,
            ..self
        }
    }
}

fn status(value: Option<bool>, yes: &str, no: &str) -> String {
    match value {
        Some(true) => yes.to_string(),
        Some(false) => no.to_string(),
        None => format!("{yes}?"),
    }
}

/// Trait for business day calendars.
///
/// Implementors supply the weekend and holiday predicates; everything else
/// is derived from them. Calendars are immutable, so every method is a pure
/// function of the calendar and its arguments.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Whether `date` is a weekend day, or `None` if unknown.
    fn is_weekend(&self, date: Date) -> Option<bool>;

    /// Whether `date` is a holiday, or `None` if unknown.
    fn is_holiday(&self, date: Date) -> Option<bool>;

    /// Whether `date` is a business day.
    ///
    /// Known only when both the weekend and holiday predicates are known.
    fn is_business_day(&self, date: Date) -> Option<bool> {
        match (self.is_holiday(date), self.is_weekend(date)) {
            (Some(holiday), Some(weekend)) => Some(!(holiday || weekend)),
            _ => None,
        }
    }

    /// Short description of the calendar.
    fn describe(&self) -> String {
        self.name().to_string()
    }

    /// Human readable status of `date`, e.g.
    /// `Sunday, January 4, 2015: not a business day, not a holiday, weekend`.
    fn info(&self, date: Date) -> String {
        format!(
            "{}: {}, {}, {}",
            date.long_format(),
            status(self.is_business_day(date), "business day", "not a business day"),
            status(self.is_holiday(date), "holiday", "not a holiday"),
            status(self.is_weekend(date), "weekend", "not a weekend"),
        )
    }

    /// The nearest business day after (or before) `date`, using the default
    /// 60 day window and excluding `date` itself.
    fn next_business_day(&self, date: Date, direction: Direction) -> Option<Date> {
        self.next_business_day_with(date, direction, BusinessDaySearch::default())
    }

    /// Walks day by day from `date` looking for a business day.
    ///
    /// Returns `None` if none is found within the window. Days whose status
    /// is unknown are skipped.
    ///
    /// # Panics
    ///
    /// Panics if `search.window_days` is zero.
    fn next_business_day_with(
        &self,
        date: Date,
        direction: Direction,
        search: BusinessDaySearch,
    ) -> Option<Date> {
        assert!(
            search.window_days > 0,
            "business day search window must be positive"
        );
        if search.start_on_date && self.is_business_day(date) == Some(true) {
            return Some(date);
        }

        let found = (1..=i64::from(search.window_days))
            .map(|offset| date.add_days(direction.step() * offset))
            .find(|candidate| self.is_business_day(*candidate) == Some(true));

        if found.is_none() {
            log::debug!(
                "{}: no business day within {} days {:?} of {}",
                self.name(),
                search.window_days,
                direction,
                date
            );
        }
        found
    }

    /// Business days between `from` and `to` in ascending order, with the
    /// endpoints included according to `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    fn business_days_in_range(&self, from: Date, to: Date, bounds: IntervalBounds) -> Vec<Date> {
        assert!(
            from <= to,
            "business day range requires from <= to, got {from} > {to}"
        );
        let Some((first, last)) = bounds.inclusive_window(from, to) else {
            return Vec::new();
        };

        let mut days = Vec::new();
        let mut current = first;
        while current <= last {
            if self.is_business_day(current) == Some(true) {
                days.push(current);
            }
            current = current.succ();
        }

        log::trace!(
            "{}: {} business days in {} {}..{}",
            self.name(),
            days.len(),
            bounds,
            from,
            to
        );
        days
    }

    /// Number of business days between `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    fn business_day_count(&self, from: Date, to: Date, bounds: IntervalBounds) -> usize {
        self.business_days_in_range(from, to, bounds).len()
    }

    /// Adjusts `date` by `convention`, accepting `date` itself when it is a
    /// business day and searching up to 60 days.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Option<Date> {
        conventions::adjust(self, date, convention, BusinessDaySearch::starting_on_date())
    }

    /// Adjusts `date` by `convention` with explicit search options.
    fn adjust_with(
        &self,
        date: Date,
        convention: BusinessDayConvention,
        search: BusinessDaySearch,
    ) -> Option<Date> {
        conventions::adjust(self, date, convention, search)
    }

    /// Moves `n` business days from `date`; negative `n` moves backward.
    ///
    /// Each step is a [`next_business_day`](Calendar::next_business_day);
    /// `start_count_on_date` lets the first step land on `date` itself when
    /// it is a business day. Returns `None` as soon as a step fails.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    fn add_business_days(&self, date: Date, n: i32, start_count_on_date: bool) -> Option<Date> {
        assert!(n != 0, "business day shift count must be non-zero");
        let direction = Direction::of(n);

        let mut current = date;
        for step in 0..n.unsigned_abs() {
            let search = BusinessDaySearch {
                start_on_date: step == 0 && start_count_on_date,
                ..BusinessDaySearch::default()
            };
            current = self.next_business_day_with(current, direction, search)?;
        }
        Some(current)
    }

    /// Weekdays in `[from, to]` that are not business days, ascending.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    fn observed_holidays(&self, from: Date, to: Date) -> Vec<Date> {
        let business_days = self.business_days_in_range(from, to, IntervalBounds::Closed);

        let mut holidays = Vec::new();
        let mut unknown = 0_usize;
        let mut current = from;
        while current <= to {
            match (self.is_weekend(current), self.is_holiday(current)) {
                (Some(false), Some(_)) if business_days.binary_search(&current).is_err() => {
                    holidays.push(current);
                }
                (None, _) | (_, None) => unknown += 1,
                _ => {}
            }
            current = current.succ();
        }

        if unknown > 0 {
            log::debug!(
                "{}: {} days of unknown status skipped in {}..{}",
                self.name(),
                unknown,
                from,
                to
            );
        }
        holidays
    }

    /// Observed holidays in one month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is not in 1..=12.
    fn observed_holidays_in_month(&self, year: i32, month: u32) -> Vec<Date> {
        let first = Date::from_ymd_opt(year, month, 1)
            .unwrap_or_else(|| panic!("invalid month {year}-{month}"));
        self.observed_holidays(first, first.end_of_month())
    }

    /// Observed holidays in one year.
    fn observed_holidays_in_year(&self, year: i32) -> Vec<Date> {
        self.observed_holidays_in_years(year, year)
    }

    /// Observed holidays from January 1st of `from_year` through
    /// December 31st of `to_year`.
    ///
    /// # Panics
    ///
    /// Panics if `from_year > to_year`.
    fn observed_holidays_in_years(&self, from_year: i32, to_year: i32) -> Vec<Date> {
        let from = Date::first_of_year(from_year);
        let to = Date::first_of_year(to_year + 1).pred();
        self.observed_holidays(from, to)
    }
}

/// A calendar with no holidays and no weekends: every day is a business day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "No Holidays or Weekends"
    }

    fn is_weekend(&self, _date: Date) -> Option<bool> {
        Some(false)
    }

    fn is_holiday(&self, _date: Date) -> Option<bool> {
        Some(false)
    }
}

/// A weekend-only calendar (no holidays).
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendCalendar {
    /// Non-business weekdays.
    #[serde(default)]
    pub weekends: WeekendSet,
}

impl WeekendCalendar {
    /// Creates a weekend-only calendar.
    #[must_use]
    pub const fn new(weekends: WeekendSet) -> Self {
        Self { weekends }
    }
}

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_weekend(&self, date: Date) -> Option<bool> {
        Some(self.weekends.contains(date.weekday()))
    }

    fn is_holiday(&self, _date: Date) -> Option<bool> {
        Some(false)
    }

    fn describe(&self) -> String {
        format!("Weekend Only ({})", self.weekends)
    }
}

impl fmt::Display for dyn Calendar + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
