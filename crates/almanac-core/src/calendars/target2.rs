//! TARGET2 calendar for Eurozone payments and securities settlement.
//!
//! TARGET2 (Trans-European Automated Real-time Gross Settlement Express Transfer)
//! is the real-time gross settlement system owned and operated by the Eurosystem.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::holidays::{is_gated_holiday, GatedHoliday, HolidayKind};
use super::Calendar;
use crate::types::Date;

/// First year of TARGET operation.
pub const TARGET_FIRST_YEAR: i32 = 1999;

const TARGET_HOLIDAYS: &[GatedHoliday] = &[
    GatedHoliday::always(HolidayKind::NewYearsDay),
    GatedHoliday::after(HolidayKind::GoodFriday, 1999),
    GatedHoliday::after(HolidayKind::EasterMonday, 1999),
    GatedHoliday::after(HolidayKind::LabourDay, 1999),
    GatedHoliday::always(HolidayKind::ChristmasDay),
    GatedHoliday::after(HolidayKind::BoxingDay, 1999),
    // Millennium and euro changeover closures
    GatedHoliday::only(HolidayKind::NewYearsEve, &[1999, 2001]),
];

/// TARGET2 holiday calendar for Eurozone markets.
///
/// ## Holidays
///
/// - New Year's Day (January 1)
/// - Good Friday, from 2000
/// - Easter Monday, from 2000
/// - Labour Day (May 1), from 2000
/// - Christmas Day (December 25)
/// - Boxing Day (December 26), from 2000
/// - December 31 in 1999 and 2001
///
/// Note: TARGET2 does NOT observe:
/// - National holidays of individual countries
/// - Any weekend observations (holidays on weekends are simply lost)
///
/// Dates before 1999 are unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target2Calendar;

impl Target2Calendar {
    /// Create a new TARGET2 calendar.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Calendar for Target2Calendar {
    fn name(&self) -> &str {
        "TARGET"
    }

    fn is_weekend(&self, date: Date) -> Option<bool> {
        (date.year() >= TARGET_FIRST_YEAR)
            .then(|| matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
    }

    fn is_holiday(&self, date: Date) -> Option<bool> {
        (date.year() >= TARGET_FIRST_YEAR).then(|| is_gated_holiday(date, TARGET_HOLIDAYS))
    }

    fn describe(&self) -> String {
        "TARGET (Eurosystem RTGS)".to_string()
    }
}
