//! Domain types for calendar arithmetic.
//!
//! - [`Date`]: Calendar date
//! - [`MonthDay`]: Annual date with no year
//! - [`WeekendSet`]: Weekdays treated as non-business days
//! - [`IntervalBounds`]: Endpoint inclusion for date ranges
//! - [`CalendarDate`]: Projection of timestamps onto calendar dates

mod compare;
mod date;
mod interval;
mod month_day;
mod weekend;

pub use compare::{
    calendar_compare, calendar_compare_strict, is_last_day_of_february, month_day_compare,
    nth_weekday_of_month, weekday_of, CalendarDate,
};
pub use date::{days_in_month, is_leap_year, Date};
pub use interval::IntervalBounds;
pub use month_day::MonthDay;
pub use weekend::WeekendSet;
