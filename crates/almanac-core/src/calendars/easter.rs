//! Gregorian Easter and the movable feasts derived from it.

use crate::types::Date;

/// First year of the Gregorian calendar.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Easter Sunday using the Anonymous Gregorian algorithm.
///
/// Returns `None` for years before 1583.
#[allow(clippy::many_single_char_names)]
#[must_use]
pub fn gregorian_easter_sunday(year: i32) -> Option<Date> {
    if year < FIRST_GREGORIAN_YEAR {
        return None;
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    Date::from_ymd_opt(year, month as u32, day as u32)
}

fn easter_offset(year: i32, days: i64) -> Option<Date> {
    gregorian_easter_sunday(year).map(|easter| easter.add_days(days))
}

/// Easter Monday, one day after Easter Sunday.
#[must_use]
pub fn easter_monday(year: i32) -> Option<Date> {
    easter_offset(year, 1)
}

/// Good Friday, two days before Easter Sunday.
#[must_use]
pub fn good_friday(year: i32) -> Option<Date> {
    easter_offset(year, -2)
}

/// Ascension Thursday, 39 days after Easter Sunday.
#[must_use]
pub fn ascension_day(year: i32) -> Option<Date> {
    easter_offset(year, 39)
}

/// Whit Sunday (Pentecost), 49 days after Easter Sunday.
#[must_use]
pub fn whit_sunday(year: i32) -> Option<Date> {
    easter_offset(year, 49)
}

/// Whit Monday, 50 days after Easter Sunday.
#[must_use]
pub fn whit_monday(year: i32) -> Option<Date> {
    easter_offset(year, 50)
}
