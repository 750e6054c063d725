//! Day count conventions for fixed income calculations.
//!
//! Day count conventions determine how accrued interest is calculated
//! by specifying how to count days between two dates and the year basis.
//!
//! # Supported Conventions
//!
//! ## ACT Family (Actual numerator)
//!
//! - [`Act360`], [`Act364`], [`Act365Fixed`], [`Act36525`], [`Act366`]:
//!   actual days over a fixed basis
//! - [`Act365Leap`]: Actual/365 Leap - basis from the end date's year
//! - [`Act365Actual`]: Actual/365 Actual - basis from a contained Feb 29
//! - [`Nl365`]: No-leap/365 - skips Feb 29
//! - [`ActActIsda`]: Actual/Actual ISDA - Year-based split
//! - [`ActActAfb`]: Actual/Actual AFB - French convention
//!
//! ## 30/360 Family (Assumes 30-day months, 360-day years)
//!
//! - [`Thirty360A`]: 30A/360 - Bond basis
//! - [`Thirty360US`]: 30/360 US - US corporate bonds (with Feb EOM rules)
//! - [`Thirty360E`]: 30E/360 - Eurobond convention
//! - [`Thirty360EPlus`]: 30E+/360
//! - [`Thirty360German`]: 30/360 German - German market convention
//!
//! ## Others
//!
//! - [`Business252`]: business days over 252, needs a calendar
//! - [`OneOne`]: always one
//!
//! # Usage
//!
//! ```rust
//! use almanac_core::daycounts::{DayCount, Thirty360US};
//! use almanac_core::types::Date;
//!
//! let dc = Thirty360US;
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 180);
//! assert_eq!(dc.year_fraction(start, end), 0.5);
//! ```

mod act360;
mod act365;
mod actact;
mod business252;
mod thirty360;

pub use act360::{Act360, Act364};
pub use act365::{Act365Actual, Act365Fixed, Act365Leap, Act36525, Act366, Nl365};
pub use actact::{ActActAfb, ActActIsda};
pub use business252::Business252;
pub use thirty360::{Thirty360A, Thirty360E, Thirty360EPlus, Thirty360German, Thirty360US};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calendars::Calendar;
use crate::error::AlmanacError;
use crate::types::{Date, IntervalBounds};

/// Trait for day count conventions.
///
/// Implementations provide the year fraction for an ordered period; the
/// provided [`year_fraction`](DayCount::year_fraction) handles reversed
/// dates by negation.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention (e.g., "ACT/360", "30/360 US").
    fn name(&self) -> &'static str;

    /// Year fraction between `start` and `end`, where `start <= end`.
    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end < start`, with the same magnitude as the swapped call.
    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if end < start {
            -self.ordered_year_fraction(end, start)
        } else {
            self.ordered_year_fraction(start, end)
        }
    }

    /// Signed day count between two dates.
    ///
    /// Actual calendar days unless the convention counts otherwise.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// The 1/1 day count convention: every period is one year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneOne;

impl DayCount for OneOne {
    fn name(&self) -> &'static str {
        "1/1"
    }

    fn ordered_year_fraction(&self, _start: Date, _end: Date) -> f64 {
        1.0
    }

    fn year_fraction(&self, _start: Date, _end: Date) -> f64 {
        1.0
    }
}

/// Enumeration of all supported day count conventions.
///
/// This enum provides a convenient way to select conventions at runtime.
///
/// # Example
///
/// ```rust
/// use almanac_core::daycounts::DayCountConvention;
/// use almanac_core::types::Date;
///
/// let convention: DayCountConvention = "30/360 US".parse().unwrap();
///
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 7, 1).unwrap();
/// assert_eq!(convention.year_fraction(start, end), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    // =========================================================================
    // 30/360 Family
    // =========================================================================
    /// 30A/360 (Bond Basis)
    Thirty360A,

    /// 30/360 US - US corporate, agency, municipal bonds
    Thirty360US,

    /// 30E/360 (Eurobond Basis)
    Thirty360E,

    /// 30E+/360
    Thirty360EPlus,

    /// 30/360 German
    Thirty360German,

    // =========================================================================
    // ACT Family
    // =========================================================================
    /// Actual/360 - Money market instruments, FRNs
    #[default]
    Act360,

    /// Actual/364
    Act364,

    /// Actual/365 Fixed - UK Gilts, AUD/NZD markets
    Act365Fixed,

    /// Actual/365.25
    Act36525,

    /// Actual/366
    Act366,

    /// Actual/365 Leap - 366 basis when the end date is in a leap year
    Act365Leap,

    /// Actual/365 Actual - 366 basis when the period contains Feb 29
    Act365Actual,

    /// No-leap/365
    Nl365,

    /// Actual/Actual ISDA - Year-based calculation for swaps
    ActActIsda,

    /// Actual/Actual AFB - French convention
    ActActAfb,

    // =========================================================================
    // Others
    // =========================================================================
    /// Business days/252 - needs a calendar
    Business252,

    /// 1/1
    OneOne,
}

impl DayCountConvention {
    /// Returns the name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Thirty360A => Thirty360A.name(),
            DayCountConvention::Thirty360US => Thirty360US.name(),
            DayCountConvention::Thirty360E => Thirty360E.name(),
            DayCountConvention::Thirty360EPlus => Thirty360EPlus.name(),
            DayCountConvention::Thirty360German => Thirty360German.name(),
            DayCountConvention::Act360 => Act360.name(),
            DayCountConvention::Act364 => Act364.name(),
            DayCountConvention::Act365Fixed => Act365Fixed.name(),
            DayCountConvention::Act36525 => Act36525.name(),
            DayCountConvention::Act366 => Act366.name(),
            DayCountConvention::Act365Leap => Act365Leap.name(),
            DayCountConvention::Act365Actual => Act365Actual.name(),
            DayCountConvention::Nl365 => Nl365.name(),
            DayCountConvention::ActActIsda => ActActIsda.name(),
            DayCountConvention::ActActAfb => ActActAfb.name(),
            DayCountConvention::Business252 => "BUS/252",
            DayCountConvention::OneOne => OneOne.name(),
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Thirty360A,
            DayCountConvention::Thirty360US,
            DayCountConvention::Thirty360E,
            DayCountConvention::Thirty360EPlus,
            DayCountConvention::Thirty360German,
            DayCountConvention::Act360,
            DayCountConvention::Act364,
            DayCountConvention::Act365Fixed,
            DayCountConvention::Act36525,
            DayCountConvention::Act366,
            DayCountConvention::Act365Leap,
            DayCountConvention::Act365Actual,
            DayCountConvention::Nl365,
            DayCountConvention::ActActIsda,
            DayCountConvention::ActActAfb,
            DayCountConvention::Business252,
            DayCountConvention::OneOne,
        ]
    }

    /// True for conventions that count business days of a calendar.
    #[must_use]
    pub const fn requires_calendar(&self) -> bool {
        matches!(self, DayCountConvention::Business252)
    }

    /// Year fraction for conventions that need no calendar.
    ///
    /// # Panics
    ///
    /// Panics for [`DayCountConvention::Business252`], which needs a
    /// calendar; use [`year_fraction_with`](Self::year_fraction_with).
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.year_fraction_with(start, end, None, IntervalBounds::default())
    }

    /// Year fraction with an optional calendar and interval bounds.
    ///
    /// The calendar and bounds are only used by BUS/252.
    ///
    /// # Panics
    ///
    /// Panics if the convention is BUS/252 and `calendar` is `None`, and for
    /// ACT/365A and NL/365 if the period spans more than one year boundary.
    #[must_use]
    pub fn year_fraction_with(
        &self,
        start: Date,
        end: Date,
        calendar: Option<&dyn Calendar>,
        bounds: IntervalBounds,
    ) -> f64 {
        match self {
            DayCountConvention::Thirty360A => Thirty360A.year_fraction(start, end),
            DayCountConvention::Thirty360US => Thirty360US.year_fraction(start, end),
            DayCountConvention::Thirty360E => Thirty360E.year_fraction(start, end),
            DayCountConvention::Thirty360EPlus => Thirty360EPlus.year_fraction(start, end),
            DayCountConvention::Thirty360German => Thirty360German.year_fraction(start, end),
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::Act364 => Act364.year_fraction(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
            DayCountConvention::Act36525 => Act36525.year_fraction(start, end),
            DayCountConvention::Act366 => Act366.year_fraction(start, end),
            DayCountConvention::Act365Leap => Act365Leap.year_fraction(start, end),
            DayCountConvention::Act365Actual => Act365Actual.year_fraction(start, end),
            DayCountConvention::Nl365 => Nl365.year_fraction(start, end),
            DayCountConvention::ActActIsda => ActActIsda.year_fraction(start, end),
            DayCountConvention::ActActAfb => ActActAfb.year_fraction(start, end),
            DayCountConvention::Business252 => {
                let Some(calendar) = calendar else {
                    panic!("BUS/252 year fraction requires a calendar");
                };
                Business252::new(calendar, bounds).year_fraction(start, end)
            }
            DayCountConvention::OneOne => OneOne.year_fraction(start, end),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = AlmanacError;

    /// Parses a day count convention from a string.
    ///
    /// Supports multiple formats:
    /// - Market names: "ACT/360", "30/360 US", "ACT/ACT ISDA"
    /// - Rust enum-style: "Act360", "Thirty360US", "ActActIsda"
    /// - Common aliases: "BOND", "ACTUAL/360", "EUROBOND"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Normalize to uppercase for matching
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            // 30/360 family
            "30A/360" | "30/360" | "BOND" | "THIRTY360A" | "THIRTYA360" => {
                Ok(DayCountConvention::Thirty360A)
            }
            "30/360 US" | "30U/360" | "30/360US" | "THIRTY360US" | "THIRTYU360" => {
                Ok(DayCountConvention::Thirty360US)
            }
            "30E/360" | "30/360 ICMA" | "EUROBOND" | "THIRTY360E" | "THIRTYE360" => {
                Ok(DayCountConvention::Thirty360E)
            }
            "30E+/360" | "THIRTY360EPLUS" | "THIRTYEPLUS360" => {
                Ok(DayCountConvention::Thirty360EPlus)
            }
            "30/360 GERMAN" | "30E/360 GERMAN" | "GERMAN" | "THIRTY360GERMAN" | "THIRTYG360" => {
                Ok(DayCountConvention::Thirty360German)
            }

            // ACT family
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "ACT/364" | "ACTUAL/364" | "ACT364" => Ok(DayCountConvention::Act364),
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACTUAL/365 FIXED"
            | "ACT365FIXED" | "ACT365F" | "ACT365" => Ok(DayCountConvention::Act365Fixed),
            "ACT/365.25" | "ACTUAL/365.25" | "ACT36525" => Ok(DayCountConvention::Act36525),
            "ACT/366" | "ACTUAL/366" | "ACT366" => Ok(DayCountConvention::Act366),
            "ACT/365L" | "ACT/365 LEAP" | "ACTUAL/365 LEAP" | "ACT365LEAP" | "ACT365L" => {
                Ok(DayCountConvention::Act365Leap)
            }
            "ACT/365A" | "ACT/365 ACTUAL" | "ACTUAL/365 ACTUAL" | "ACT365ACTUAL" | "ACT365A" => {
                Ok(DayCountConvention::Act365Actual)
            }
            "NL/365" | "NL365" | "ACT/365 NL" => Ok(DayCountConvention::Nl365),
            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL ISDA" | "ACTACTISDA"
            | "ACTACT" => Ok(DayCountConvention::ActActIsda),
            "ACT/ACT AFB" | "ACTUAL/ACTUAL AFB" | "ACTACTAFB" | "AFB" => {
                Ok(DayCountConvention::ActActAfb)
            }

            // Others
            "BUS/252" | "BD/252" | "BUSINESS252" | "BUSINESSDAYS252" => {
                Ok(DayCountConvention::Business252)
            }
            "1/1" | "ONEONE" => Ok(DayCountConvention::OneOne),

            _ => Err(AlmanacError::unknown_day_count(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::WeekendCalendar;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_convention_enum() {
        let cal = WeekendCalendar::default();
        let start = d(2025, 1, 1);
        let end = d(2025, 7, 1);

        for convention in DayCountConvention::all() {
            let yf = convention.year_fraction_with(start, end, Some(&cal), IntervalBounds::RightOpen);

            // All conventions should give roughly half a year, except 1/1
            if *convention == DayCountConvention::OneOne {
                assert_eq!(yf, 1.0);
            } else {
                assert!(yf > 0.4 && yf < 0.6, "{convention}: {yf}");
            }
        }
    }

    #[test]
    fn test_reference_values() {
        assert_relative_eq!(
            DayCountConvention::Act360.year_fraction(d(2008, 1, 31), d(2008, 2, 28)),
            28.0 / 360.0
        );
        assert_relative_eq!(
            DayCountConvention::Thirty360US.year_fraction(d(2007, 2, 28), d(2007, 3, 31)),
            30.0 / 360.0
        );
        assert_relative_eq!(
            DayCountConvention::Thirty360A.year_fraction(d(2007, 2, 28), d(2007, 3, 31)),
            33.0 / 360.0
        );
    }

    #[test]
    fn test_antisymmetry() {
        let start = d(2023, 12, 15);
        let end = d(2024, 8, 31);
        let cal = WeekendCalendar::default();

        for convention in DayCountConvention::all() {
            if *convention == DayCountConvention::OneOne {
                continue;
            }
            let forward = convention.year_fraction_with(start, end, Some(&cal), IntervalBounds::Closed);
            let backward = convention.year_fraction_with(end, start, Some(&cal), IntervalBounds::Closed);
            assert_relative_eq!(forward, -backward);
        }
    }

    #[test]
    fn test_one_one_ignores_dates() {
        assert_eq!(DayCountConvention::OneOne.year_fraction(d(2025, 1, 1), d(2030, 1, 1)), 1.0);
        assert_eq!(DayCountConvention::OneOne.year_fraction(d(2030, 1, 1), d(2025, 1, 1)), 1.0);
    }

    #[test]
    #[should_panic(expected = "requires a calendar")]
    fn test_bus252_without_calendar_panics() {
        let _ = DayCountConvention::Business252.year_fraction(d(2025, 1, 1), d(2025, 2, 1));
    }

    #[test]
    fn test_bus252_with_calendar() {
        let cal = WeekendCalendar::default();
        // Monday to next Monday, right-open: five business days
        let yf = DayCountConvention::Business252.year_fraction_with(
            d(2025, 1, 6),
            d(2025, 1, 13),
            Some(&cal),
            IntervalBounds::RightOpen,
        );
        assert_relative_eq!(yf, 4.0 / 252.0);
        assert!(DayCountConvention::Business252.requires_calendar());
        assert!(!DayCountConvention::Act360.requires_calendar());
    }

    #[test]
    fn test_convention_names() {
        assert_eq!(DayCountConvention::Act360.name(), "ACT/360");
        assert_eq!(DayCountConvention::Act365Fixed.name(), "ACT/365F");
        assert_eq!(DayCountConvention::Thirty360US.name(), "30/360 US");
        assert_eq!(DayCountConvention::Thirty360E.name(), "30E/360");
        assert_eq!(DayCountConvention::Business252.name(), "BUS/252");
        assert_eq!(format!("{}", DayCountConvention::Nl365), "NL/365");
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("ACTUAL/360".parse::<DayCountConvention>().unwrap(), DayCountConvention::Act360);
        assert_eq!("act/365".parse::<DayCountConvention>().unwrap(), DayCountConvention::Act365Fixed);
        assert_eq!("BOND".parse::<DayCountConvention>().unwrap(), DayCountConvention::Thirty360A);
        assert_eq!("EUROBOND".parse::<DayCountConvention>().unwrap(), DayCountConvention::Thirty360E);
        assert_eq!("ACT/ACT".parse::<DayCountConvention>().unwrap(), DayCountConvention::ActActIsda);
        assert_eq!("thirtyu360".parse::<DayCountConvention>().unwrap(), DayCountConvention::Thirty360US);
    }

    #[test]
    fn test_from_str_invalid() {
        let result = "INVALID".parse::<DayCountConvention>();
        assert_eq!(result, Err(AlmanacError::unknown_day_count("INVALID")));
        assert!(result.unwrap_err().to_string().contains("unknown"));
    }

    #[test]
    fn test_from_str_roundtrip() {
        // Test that name() output can be parsed back
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.name().parse().unwrap();
            assert_eq!(*convention, parsed);
        }
    }

    #[test]
    fn test_serde_by_variant_name() {
        let json = serde_json::to_string(&DayCountConvention::ActActIsda).unwrap();
        assert_eq!(json, r#""ActActIsda""#);
        let parsed: DayCountConvention = serde_json::from_str(r#""Thirty360EPlus""#).unwrap();
        assert_eq!(parsed, DayCountConvention::Thirty360EPlus);
    }
}
