//! Calendar-date comparison and weekday arithmetic.
//!
//! Timestamps carry a time of day and possibly a UTC offset; calendar logic
//! only cares about the local date. [`CalendarDate`] projects any supported
//! value onto a [`Date`], and the comparison functions refuse to compare
//! values taken in different offsets.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Offset, TimeZone, Weekday};
use std::cmp::Ordering;

use super::{date::days_in_month, Date, MonthDay};

/// A value that has a calendar date, ignoring any time of day.
pub trait CalendarDate {
    /// The calendar date in the value's own time zone.
    fn calendar_date(&self) -> Date;

    /// The UTC offset the date was taken in, if the value has one.
    fn utc_offset(&self) -> Option<chrono::FixedOffset> {
        None
    }
}

impl CalendarDate for Date {
    fn calendar_date(&self) -> Date {
        *self
    }
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> Date {
        Date::from(*self)
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> Date {
        Date::from(self.date())
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_date(&self) -> Date {
        Date::from(self.date_naive())
    }

    fn utc_offset(&self) -> Option<chrono::FixedOffset> {
        Some(self.offset().fix())
    }
}

/// Compares two values by year, month and day only.
///
/// # Panics
///
/// Panics if the operands were taken in different UTC offsets, since their
/// local dates are then not comparable.
pub fn calendar_compare<T: CalendarDate + ?Sized>(a: &T, b: &T) -> Ordering {
    assert_eq!(
        a.utc_offset(),
        b.utc_offset(),
        "calendar comparison requires operands in the same time zone"
    );
    a.calendar_date().cmp(&b.calendar_date())
}

/// Like [`calendar_compare`] but ties compare as `Greater`, so that
/// `calendar_compare_strict(a, b) == Less` means strictly before.
///
/// # Panics
///
/// Panics if the operands were taken in different UTC offsets.
pub fn calendar_compare_strict<T: CalendarDate + ?Sized>(a: &T, b: &T) -> Ordering {
    match calendar_compare(a, b) {
        Ordering::Equal => Ordering::Greater,
        other => other,
    }
}

/// Compares two annual dates, month first, then day.
#[must_use]
pub fn month_day_compare(a: &MonthDay, b: &MonthDay) -> Ordering {
    a.cmp(b)
}

/// Day of the week of any calendar-dated value.
pub fn weekday_of<T: CalendarDate + ?Sized>(value: &T) -> Weekday {
    value.calendar_date().weekday()
}

/// February 29th in leap years, February 28th otherwise.
pub fn is_last_day_of_february<T: CalendarDate + ?Sized>(value: &T) -> bool {
    value.calendar_date().is_last_day_of_february()
}

/// Day of month of the `n`th `weekday` in `month` of `year`.
///
/// Positive `n` counts from the start of the month, negative `n` from the
/// end (`-1` is the last occurrence). Returns `None` when the month has
/// fewer than `|n|` occurrences.
///
/// # Panics
///
/// Panics unless `0 < |n| < 6`, or if `month` is not in 1..=12.
#[must_use]
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: i32) -> Option<u32> {
    assert!(
        n != 0 && n.abs() < 6,
        "nth weekday requires 0 < |n| < 6, got {n}"
    );
    let last_day = days_in_month(year, month) as i32;
    let target = weekday.num_days_from_monday() as i32;

    let day = if n > 0 {
        let first = Date::from_ymd_opt(year, month, 1)?.weekday().num_days_from_monday() as i32;
        1 + (target - first).rem_euclid(7) + 7 * (n - 1)
    } else {
        let last = Date::from_ymd_opt(year, month, last_day as u32)?
            .weekday()
            .num_days_from_monday() as i32;
        last_day - (last - target).rem_euclid(7) - 7 * (-n - 1)
    };

    (1..=last_day).contains(&day).then_some(day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime};

    #[test]
    fn test_calendar_compare_ignores_time() {
        let morning = NaiveDate::from_ymd_opt(2025, 3, 3)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        let evening = NaiveDate::from_ymd_opt(2025, 3, 3)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(20, 30, 0).unwrap());
        assert_eq!(calendar_compare(&morning, &evening), Ordering::Equal);
        assert_eq!(calendar_compare_strict(&morning, &evening), Ordering::Greater);
    }

    #[test]
    fn test_calendar_compare_dates() {
        let a = Date::from_ymd(2025, 1, 1).unwrap();
        let b = Date::from_ymd(2025, 1, 2).unwrap();
        assert_eq!(calendar_compare(&a, &b), Ordering::Less);
        assert_eq!(calendar_compare(&b, &a), Ordering::Greater);
        assert_eq!(calendar_compare_strict(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_zoned_same_offset() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let a = tz.with_ymd_and_hms(2025, 6, 1, 23, 0, 0).unwrap();
        let b = tz.with_ymd_and_hms(2025, 6, 2, 0, 30, 0).unwrap();
        assert_eq!(calendar_compare(&a, &b), Ordering::Less);
        assert_eq!(a.calendar_date(), Date::from_ymd(2025, 6, 1).unwrap());
    }

    #[test]
    #[should_panic(expected = "same time zone")]
    fn test_zoned_mismatched_offsets_panics() {
        let a = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .unwrap();
        let b = FixedOffset::east_opt(-5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .unwrap();
        let _ = calendar_compare(&a, &b);
    }

    #[test]
    fn test_month_day_compare() {
        assert_eq!(
            month_day_compare(&MonthDay::new(1, 31), &MonthDay::new(2, 1)),
            Ordering::Less
        );
        assert_eq!(
            month_day_compare(&MonthDay::new(12, 25), &MonthDay::new(12, 25)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_weekday_helpers() {
        let d = Date::from_ymd(2025, 1, 4).unwrap();
        assert_eq!(weekday_of(&d), Weekday::Sat);
        assert!(is_last_day_of_february(&NaiveDate::from_ymd_opt(2100, 2, 28).unwrap()));
    }

    #[test]
    fn test_nth_weekday_from_start() {
        // MLK Day 2025
        assert_eq!(nth_weekday_of_month(2025, 1, Weekday::Mon, 3), Some(20));
        // Thanksgiving 2025
        assert_eq!(nth_weekday_of_month(2025, 11, Weekday::Thu, 4), Some(27));
        // September 2025 starts on a Monday
        assert_eq!(nth_weekday_of_month(2025, 9, Weekday::Mon, 1), Some(1));
    }

    #[test]
    fn test_nth_weekday_from_end() {
        // Memorial Day 2025
        assert_eq!(nth_weekday_of_month(2025, 5, Weekday::Mon, -1), Some(26));
        // Last day of month is the weekday itself: May 31 2024 is a Friday
        assert_eq!(nth_weekday_of_month(2024, 5, Weekday::Fri, -1), Some(31));
        assert_eq!(nth_weekday_of_month(2024, 5, Weekday::Fri, -2), Some(24));
    }

    #[test]
    fn test_nth_weekday_not_found() {
        // February 2026 has exactly four Sundays
        assert_eq!(nth_weekday_of_month(2026, 2, Weekday::Sun, 4), Some(22));
        assert_eq!(nth_weekday_of_month(2026, 2, Weekday::Sun, 5), None);
        assert_eq!(nth_weekday_of_month(2026, 2, Weekday::Sun, -5), None);
        // March 2025 has five Mondays
        assert_eq!(nth_weekday_of_month(2025, 3, Weekday::Mon, 5), Some(31));
        assert_eq!(nth_weekday_of_month(2025, 3, Weekday::Mon, -5), Some(3));
    }

    #[test]
    #[should_panic(expected = "0 < |n| < 6")]
    fn test_nth_weekday_zero_panics() {
        let _ = nth_weekday_of_month(2025, 1, Weekday::Mon, 0);
    }
}
