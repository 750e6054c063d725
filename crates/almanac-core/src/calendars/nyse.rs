//! New York Stock Exchange calendar.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::holidays::{is_gated_holiday, GatedHoliday, HolidayKind};
use super::special::nyse_special_closure;
use super::Calendar;
use crate::types::Date;

/// First year covered by the NYSE calendar.
pub const NYSE_FIRST_YEAR: i32 = 1960;

const NYSE_HOLIDAYS: &[GatedHoliday] = &[
    GatedHoliday::always(HolidayKind::NewYearsDaySundayObserved),
    GatedHoliday::after(HolidayKind::MartinLutherKingDay, 1997),
    GatedHoliday::after(HolidayKind::WashingtonsBirthday, 1970),
    GatedHoliday::except(HolidayKind::GoodFriday, &[1898, 1906, 1907]),
    GatedHoliday::after(HolidayKind::MemorialDay, 1970),
    GatedHoliday::always(HolidayKind::IndependenceDayObserved),
    GatedHoliday::after(HolidayKind::LaborDay, 1887),
    GatedHoliday::always(HolidayKind::Thanksgiving),
    GatedHoliday::always(HolidayKind::ChristmasDayObserved),
    GatedHoliday::after(HolidayKind::JuneteenthObserved, 2022),
];

/// NYSE full-day closures from 1960.
///
/// Recurring holidays come from the rule library; everything else
/// (funerals, storms, the 1968 Wednesday closures) from the special
/// closure table. Early closes are not modelled. Dates before 1960 are
/// unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NyseCalendar;

impl Calendar for NyseCalendar {
    fn name(&self) -> &str {
        "NYSE"
    }

    fn is_weekend(&self, date: Date) -> Option<bool> {
        (date.year() >= NYSE_FIRST_YEAR)
            .then(|| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
    }

    fn is_holiday(&self, date: Date) -> Option<bool> {
        if date.year() < NYSE_FIRST_YEAR {
            return None;
        }
        if is_gated_holiday(date, NYSE_HOLIDAYS) {
            return Some(true);
        }
        nyse_special_closure(date)
    }

    fn describe(&self) -> String {
        "NYSE (New York Stock Exchange)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::Direction;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_nyse_observed_2025() {
        assert_eq!(
            NyseCalendar.observed_holidays_in_year(2025),
            vec![
                d(2025, 1, 1),
                d(2025, 1, 20),
                d(2025, 2, 17),
                d(2025, 4, 18),
                d(2025, 5, 26),
                d(2025, 6, 19),
                d(2025, 7, 4),
                d(2025, 9, 1),
                d(2025, 11, 27),
                d(2025, 12, 25),
            ]
        );
    }

    #[test]
    fn test_no_columbus_or_veterans_day() {
        assert_eq!(NyseCalendar.is_business_day(d(2025, 10, 13)), Some(true));
        assert_eq!(NyseCalendar.is_business_day(d(2025, 11, 11)), Some(true));
    }

    #[test]
    fn test_new_years_saturday_not_observed() {
        // January 1 2022 is a Saturday; the NYSE stayed open on the 31st
        assert_eq!(NyseCalendar.is_business_day(d(2021, 12, 31)), Some(true));
        // Christmas 2021 is a Saturday, observed Friday the 24th
        assert_eq!(NyseCalendar.is_business_day(d(2021, 12, 25)), Some(false));
        assert_eq!(NyseCalendar.is_business_day(d(2021, 12, 24)), Some(false));
    }

    #[test]
    fn test_special_closures() {
        assert_eq!(NyseCalendar.is_business_day(d(2001, 9, 11)), Some(false));
        assert_eq!(NyseCalendar.is_business_day(d(2012, 10, 29)), Some(false));
        assert_eq!(NyseCalendar.is_business_day(d(1968, 10, 16)), Some(false));
        assert_eq!(NyseCalendar.is_business_day(d(2001, 9, 17)), Some(true));
    }

    #[test]
    fn test_mlk_day_from_1998() {
        assert_eq!(NyseCalendar.is_holiday(d(1997, 1, 20)), Some(false));
        assert_eq!(NyseCalendar.is_holiday(d(1998, 1, 19)), Some(true));
    }

    #[test]
    fn test_unknown_before_1960() {
        let date = d(1959, 7, 6);
        assert_eq!(NyseCalendar.is_weekend(date), None);
        assert_eq!(NyseCalendar.is_holiday(date), None);
        assert_eq!(NyseCalendar.is_business_day(date), None);
        assert!(NyseCalendar.observed_holidays_in_year(1959).is_empty());
        assert_eq!(NyseCalendar.next_business_day(date, Direction::Backward), None);
    }

    #[test]
    fn test_pre_1960_closures_only_through_table() {
        // Bank holiday of March 1933 and Lincoln's Birthday 1951
        for date in [d(1933, 3, 10), d(1951, 2, 12)] {
            assert_eq!(NyseCalendar.is_holiday(date), None);
            assert_eq!(nyse_special_closure(date), Some(true));
        }
    }

    #[test]
    fn test_next_business_day_crosses_coverage_start() {
        assert_eq!(
            NyseCalendar.next_business_day(d(1959, 12, 31), Direction::Forward),
            Some(d(1960, 1, 4))
        );
    }
}
