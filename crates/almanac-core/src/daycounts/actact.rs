//! Actual/Actual day count conventions.

use super::{Act365Leap, DayCount};
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The year fraction is calculated by splitting the period into
/// portions that fall in leap years vs non-leap years.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap year}}{365} + \frac{\text{Days in leap year}}{366}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        let (y1, y2) = (start.year(), end.year());
        let basis = |date: Date| f64::from(date.days_in_year());

        if y1 == y2 {
            return start.days_between(&end) as f64 / basis(start);
        }

        // Split at the first and last January 1st inside the period
        let first_jan = Date::first_of_year(y1 + 1);
        let last_jan = Date::first_of_year(y2);

        start.days_between(&first_jan) as f64 / basis(start)
            + f64::from(y2 - y1 - 1)
            + last_jan.days_between(&end) as f64 / basis(end)
    }
}

/// Actual/Actual AFB day count convention.
///
/// French convention (Association Française des Banques): whole years are
/// counted back from the end date, and the remaining stub uses ACT/365L.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActAfb;

impl DayCount for ActActAfb {
    fn name(&self) -> &'static str {
        "ACT/ACT AFB"
    }

    fn ordered_year_fraction(&self, start: Date, end: Date) -> f64 {
        if start.add_years(1) > end {
            return Act365Leap.year_fraction(start, end);
        }

        let years = end.year() - start.year();
        let intermediate = end.add_years(-years);
        f64::from(years) + Act365Leap.year_fraction(start, intermediate)
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
    fn test_actact_isda_same_year() {
        let dc = ActActIsda;
        assert_relative_eq!(dc.year_fraction(d(2025, 1, 1), d(2025, 7, 1)), 181.0 / 365.0);
        assert_relative_eq!(dc.year_fraction(d(2024, 1, 1), d(2024, 7, 1)), 182.0 / 366.0);
    }

    #[test]
    fn test_actact_isda_cross_year() {
        let dc = ActActIsda;

        // 61 days in 2003, 121 days in 2004
        assert_relative_eq!(
            dc.year_fraction(d(2003, 11, 1), d(2004, 5, 1)),
            61.0 / 365.0 + 121.0 / 366.0
        );
    }

    #[test]
    fn test_actact_isda_full_years() {
        let dc = ActActIsda;

        assert_relative_eq!(dc.year_fraction(d(2024, 1, 1), d(2025, 1, 1)), 1.0);
        assert_relative_eq!(dc.year_fraction(d(2023, 1, 1), d(2026, 1, 1)), 3.0);
        // 184 days of 2023, all of 2024, 59 days of 2025
        assert_relative_eq!(
            dc.year_fraction(d(2023, 7, 1), d(2025, 3, 1)),
            184.0 / 365.0 + 1.0 + 59.0 / 365.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_actact_afb_short_period() {
        let dc = ActActAfb;

        // Less than a year: ACT/365L with the 2004 end year
        assert_relative_eq!(dc.year_fraction(d(2003, 11, 1), d(2004, 5, 1)), 182.0 / 366.0);
    }

    #[test]
    fn test_actact_afb_whole_years() {
        let dc = ActActAfb;

        assert_relative_eq!(dc.year_fraction(d(1994, 6, 30), d(1997, 6, 30)), 3.0);
        assert_relative_eq!(dc.year_fraction(d(2025, 3, 1), d(2026, 3, 1)), 1.0);
    }

    #[test]
    fn test_actact_afb_with_stub() {
        let dc = ActActAfb;

        // Four years back from 2008-02-29 lands on 2004-02-29
        assert_relative_eq!(
            dc.year_fraction(d(2004, 2, 28), d(2008, 2, 29)),
            4.0 + 1.0 / 366.0
        );
    }

    #[test]
    fn test_reversed_is_negated() {
        let start = d(2003, 11, 1);
        let end = d(2004, 5, 1);
        assert_relative_eq!(
            ActActIsda.year_fraction(end, start),
            -ActActIsda.year_fraction(start, end)
        );
        assert_relative_eq!(
            ActActAfb.year_fraction(end, start),
            -ActActAfb.year_fraction(start, end)
        );
    }
}
