//! Annual (month, day) dates.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{date::days_in_month, Date};
use crate::error::AlmanacError;

/// A fixed annual date such as December 25th, with no year attached.
///
/// Ordering is month first, then day. [`MonthDay::new`] performs no
/// validation; callers must not build combinations such as February 30th.
/// Deserialization and [`MonthDay::try_new`] do validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthDay")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

#[derive(Deserialize)]
struct RawMonthDay {
    month: u32,
    day: u32,
}

impl TryFrom<RawMonthDay> for MonthDay {
    type Error = AlmanacError;

    fn try_from(raw: RawMonthDay) -> Result<Self, Self::Error> {
        MonthDay::try_new(raw.month, raw.day)
    }
}

impl MonthDay {
    /// Creates a month/day pair without validation.
    #[must_use]
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Creates a month/day pair, rejecting combinations that exist in no
    /// year. February 29th is accepted.
    ///
    /// # Errors
    ///
    /// Returns `AlmanacError::InvalidMonthDay` for impossible combinations.
    pub fn try_new(month: u32, day: u32) -> Result<Self, AlmanacError> {
        // 2000 is a leap year, so Feb 29 passes
        if (1..=12).contains(&month) && day >= 1 && day <= days_in_month(2000, month) {
            Ok(Self { month, day })
        } else {
            Err(AlmanacError::InvalidMonthDay { month, day })
        }
    }

    /// Month component (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day-of-month component.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// The date of this month/day in `year`, or `None` when it does not
    /// exist that year (February 29th outside leap years).
    #[must_use]
    pub fn in_year(&self, year: i32) -> Option<Date> {
        Date::from_ymd_opt(year, self.month, self.day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}
