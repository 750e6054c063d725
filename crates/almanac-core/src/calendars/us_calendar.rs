//! US Federal government and US bond market (SIFMA) calendars.
//!
//! Both calendars share nine federal holidays with identical effective
//! years. They differ in New Year's Day observance, Good Friday, Inauguration
//! Day and the first year of Juneteenth.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::holidays::{is_gated_holiday, GatedHoliday, HolidayKind};
use super::special::{is_special_closure, BOND_MARKET_SPECIAL_CLOSURES};
use super::Calendar;
use crate::types::Date;

/// Holidays observed by both the federal government and the bond market.
const US_SHARED_HOLIDAYS: &[GatedHoliday] = &[
    GatedHoliday::after(HolidayKind::MartinLutherKingDay, 1983),
    GatedHoliday::after(HolidayKind::WashingtonsBirthday, 1879),
    GatedHoliday::after(HolidayKind::MemorialDay, 1968),
    GatedHoliday::after(HolidayKind::IndependenceDayObserved, 1870),
    GatedHoliday::after(HolidayKind::LaborDay, 1894),
    GatedHoliday::after(HolidayKind::ColumbusDay, 1968),
    GatedHoliday::after(HolidayKind::VeteransDayObserved, 1938),
    GatedHoliday::after(HolidayKind::Thanksgiving, 1941),
    GatedHoliday::after(HolidayKind::ChristmasDayObserved, 1870),
];

const US_FEDERAL_HOLIDAYS: &[GatedHoliday] = &[
    GatedHoliday::after(HolidayKind::NewYearsDayObserved, 1870),
    GatedHoliday::always(HolidayKind::InaugurationDayObserved),
    GatedHoliday::after(HolidayKind::JuneteenthObserved, 2020),
];

const US_BOND_MARKET_HOLIDAYS: &[GatedHoliday] = &[
    GatedHoliday::after(HolidayKind::NewYearsDaySundayObserved, 1870),
    GatedHoliday::after(HolidayKind::GoodFriday, 1886),
    GatedHoliday::after(HolidayKind::JuneteenthObserved, 2021),
];

fn is_us_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// True if `date` is one of the holidays common to the US calendars.
fn is_us_shared_holiday(date: Date) -> bool {
    is_gated_holiday(date, US_SHARED_HOLIDAYS)
}

/// US Federal government calendar.
///
/// Federal holidays with Saturday/Sunday observance (a Saturday New Year's
/// Day is observed on the preceding December 31st), plus Inauguration Day
/// with Sunday observance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct USFederalCalendar;

impl Calendar for USFederalCalendar {
    fn name(&self) -> &str {
        "US Federal Government"
    }

    fn is_weekend(&self, date: Date) -> Option<bool> {
        Some(is_us_weekend(date))
    }

    fn is_holiday(&self, date: Date) -> Option<bool> {
        Some(is_us_shared_holiday(date) || is_gated_holiday(date, US_FEDERAL_HOLIDAYS))
    }
}

/// US bond market calendar, following SIFMA recommendations.
///
/// The federal holidays with Sunday-only observance of New Year's Day,
/// plus Good Friday and SIFMA's one-off closures. Early closes are not
/// modelled; those days count as business days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct USBondMarketCalendar;

impl Calendar for USBondMarketCalendar {
    fn name(&self) -> &str {
        "US Bond Market (SIFMA)"
    }

    fn is_weekend(&self, date: Date) -> Option<bool> {
        Some(is_us_weekend(date))
    }

    fn is_holiday(&self, date: Date) -> Option<bool> {
        Some(
            is_us_shared_holiday(date)
                || is_gated_holiday(date, US_BOND_MARKET_HOLIDAYS)
                || is_special_closure(date, BOND_MARKET_SPECIAL_CLOSURES),
        )
    }
}
