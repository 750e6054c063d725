//! 30/360 day count conventions.
//!
//! Every variant adjusts the day-of-month components and then applies
//!
//! $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
//!
//! The variants differ only in the end-of-month rules.

use super::DayCount;
use crate::types::Date;

// =============================================================================
// Helper Functions
// =============================================================================

/// Applies the 360-day formula to adjusted components.
#[inline]
fn thirty360_days(start: Date, end: Date, d1: u32, d2: u32) -> i64 {
    thirty360_days_ymd(start, end.year(), end.month(), d1, d2)
}

#[inline]
fn thirty360_days_ymd(start: Date, y2: i32, m2: u32, d1: u32, d2: u32) -> i64 {
    let y1 = i64::from(start.year());
    let m1 = i64::from(start.month());
    360 * (i64::from(y2) - y1) + 30 * (i64::from(m2) - m1) + (i64::from(d2) - i64::from(d1))
}

/// Signed day count from an ordered one.
#[inline]
fn signed_days(start: Date, end: Date, ordered: impl Fn(Date, Date) -> i64) -> i64 {
    if end < start {
        -ordered(end, start)
    } else {
        ordered(start, end)
    }
}

// =============================================================================
// 30A/360 (Bond Basis)
// =============================================================================

/// 30A/360 day count convention, also known as "30/360" or "Bond Basis".
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31 and D1 is now 30, change D2 to 30
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360A;

impl Thirty360A {
    fn ordered_days(start: Date, end: Date) -> i64 {
        let d1 = if start.day() == 31 { 30 } else { start.day() };
        let d2 = if d1 == 30 && end.day() == 31 {
            30
        } else {
            end.day()
        };
        thirty360_days(start, end, d1, d2)
    }
}

impl DayCount for Thirty360A {
    fn name(&self) -> &'static str {
        "30A/360"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        Self::ordered_days(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        signed_days(start, end, Self::ordered_days)
    }
}

// =============================================================================
// 30/360 US
// =============================================================================

/// 30/360 US day count convention.
///
/// # Usage
///
/// - US corporate bonds
/// - US agency bonds
/// - US municipal bonds
///
/// # Rules
///
/// 1. If D1 and D2 are both the last day of February, change D2 to 30
/// 2. If D1 is the last day of February, change D1 to 30
/// 3. If D2 is 31 and D1 is now 30 or 31, change D2 to 30
/// 4. If D1 is 31, change D1 to 30
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl Thirty360US {
    fn ordered_days(start: Date, end: Date) -> i64 {
        let start_feb_eom = start.is_last_day_of_february();
        let mut d1 = start.day();
        let mut d2 = end.day();

        if start_feb_eom && end.is_last_day_of_february() {
            d2 = 30;
        }
        if start_feb_eom {
            d1 = 30;
        }
        if d2 == 31 && d1 >= 30 {
            d2 = 30;
        }
        if d1 == 31 {
            d1 = 30;
        }

        thirty360_days(start, end, d1, d2)
    }
}

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        Self::ordered_days(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        signed_days(start, end, Self::ordered_days)
    }
}

// =============================================================================
// 30E/360 (Eurobond Basis)
// =============================================================================

/// 30E/360 day count convention (Eurobond Basis).
///
/// Also known as "30/360 ICMA" or "Eurobond Basis".
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31, change D2 to 30
///
/// Simpler than 30/360 US - no special February handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl Thirty360E {
    fn ordered_days(start: Date, end: Date) -> i64 {
        let d1 = start.day().min(30);
        let d2 = end.day().min(30);
        thirty360_days(start, end, d1, d2)
    }
}

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        Self::ordered_days(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        signed_days(start, end, Self::ordered_days)
    }
}

// =============================================================================
// 30E+/360
// =============================================================================

/// 30E+/360 day count convention.
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31, move the end date to the first of the next month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360EPlus;

impl Thirty360EPlus {
    fn ordered_days(start: Date, end: Date) -> i64 {
        let d1 = start.day().min(30);
        let end = if end.day() == 31 { end.succ() } else { end };
        thirty360_days_ymd(start, end.year(), end.month(), d1, end.day())
    }
}

impl DayCount for Thirty360EPlus {
    fn name(&self) -> &'static str {
        "30E+/360"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        Self::ordered_days(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        signed_days(start, end, Self::ordered_days)
    }
}

// =============================================================================
// 30/360 German
// =============================================================================

/// 30/360 German day count convention.
///
/// # Rules
///
/// 1. If D1 is 31 or the last day of February, change D1 to 30
/// 2. If D2 is 31 or the last day of February, change D2 to 30
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360German;

impl Thirty360German {
    fn ordered_days(start: Date, end: Date) -> i64 {
        let d1 = if start.day() == 31 || start.is_last_day_of_february() {
            30
        } else {
            start.day()
        };
        let d2 = if end.day() == 31 || end.is_last_day_of_february() {
            30
        } else {
            end.day()
        };
        thirty360_days(start, end, d1, d2)
    }
}

impl DayCount for Thirty360German {
    fn name(&self) -> &'static str {
        "30/360 German"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        Self::ordered_days(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        signed_days(start, end, Self::ordered_days)
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
    fn test_feb_end_to_march_31() {
        let start = d(2007, 2, 28);
        let end = d(2007, 3, 31);

        assert_eq!(Thirty360US.day_count(start, end), 30);
        assert_eq!(Thirty360A.day_count(start, end), 33);
        assert_eq!(Thirty360E.day_count(start, end), 32);
        assert_eq!(Thirty360EPlus.day_count(start, end), 33);
        assert_eq!(Thirty360German.day_count(start, end), 30);

        assert_relative_eq!(Thirty360US.year_fraction(start, end), 30.0 / 360.0);
        assert_relative_eq!(Thirty360A.year_fraction(start, end), 33.0 / 360.0);
    }

    #[test]
    fn test_feb_end_to_feb_end() {
        let start = d(2008, 2, 29);
        let end = d(2009, 2, 28);

        assert_eq!(Thirty360US.day_count(start, end), 360);
        assert_eq!(Thirty360German.day_count(start, end), 360);
        assert_eq!(Thirty360E.day_count(start, end), 359);
        assert_eq!(Thirty360A.day_count(start, end), 359);
    }

    #[test]
    fn test_thirty360_us_d1_31() {
        // D1=31 -> 30, D2=31 with D1>=30 -> 30
        assert_eq!(Thirty360US.day_count(d(2025, 1, 31), d(2025, 3, 31)), 60);
        // D2=31 stays when D1 < 30
        assert_eq!(Thirty360US.day_count(d(2025, 1, 15), d(2025, 3, 31)), 76);
    }

    #[test]
    fn test_thirty360_us_accrued_days() {
        // Semi-annual coupon on the 15th, settlement 04/29
        assert_eq!(Thirty360US.day_count(d(2019, 12, 15), d(2020, 4, 29)), 134);
    }

    #[test]
    fn test_thirty_e_plus_year_end() {
        // Dec 31 rolls to Jan 1 of the next year
        assert_eq!(Thirty360EPlus.day_count(d(2024, 12, 1), d(2024, 12, 31)), 30);
        assert_eq!(Thirty360EPlus.day_count(d(2024, 1, 31), d(2024, 12, 31)), 331);
    }

    #[test]
    fn test_full_year() {
        for dc in [
            &Thirty360A as &dyn DayCount,
            &Thirty360US,
            &Thirty360E,
            &Thirty360EPlus,
            &Thirty360German,
        ] {
            assert_relative_eq!(dc.year_fraction(d(2025, 1, 1), d(2026, 1, 1)), 1.0);
        }
    }

    #[test]
    fn test_reversed_is_negated() {
        let start = d(2007, 2, 28);
        let end = d(2007, 3, 31);
        assert_eq!(Thirty360US.day_count(end, start), -30);
        assert_relative_eq!(Thirty360A.year_fraction(end, start), -33.0 / 360.0);
    }
}
