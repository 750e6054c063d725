//! One-off market closures.
//!
//! Historical closures are data: a static table of date predicates checked
//! in order. Specific days come first, then ranges, then the retired annual
//! holidays the NYSE used to observe.
//!
//! [`NyseCalendar`](super::NyseCalendar) answers nothing before 1960, so
//! [`nyse_special_closure`] is the only way to query the 1888 to 1959
//! history in this table.

use chrono::Weekday;

use super::holidays::{resolve_holiday, sat_sun_rule, sunday_rule, HolidayKind};
use crate::types::{Date, MonthDay};

type Ymd = (i32, u32, u32);

fn ymd(date: Date) -> Ymd {
    (date.year(), date.month(), date.day())
}

/// Weekend adjustment applied to a retired annual holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    /// No adjustment.
    Unadjusted,
    /// Sunday moves to Monday.
    Sunday,
    /// Saturday moves to Friday, Sunday to Monday.
    SaturdaySunday,
}

impl Observance {
    fn apply(self, date: Date) -> Date {
        match self {
            Observance::Unadjusted => date,
            Observance::Sunday => sunday_rule(date),
            Observance::SaturdaySunday => sat_sun_rule(date),
        }
    }
}

/// A closure predicate over dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    /// A single day.
    Day(Ymd),
    /// Every day from the first to the second date, inclusive.
    Range(Ymd, Ymd),
    /// Every given weekday from the first to the second date, inclusive.
    Weekdays(Weekday, Ymd, Ymd),
    /// A fixed annual date kept from `first` to `last` year, inclusive.
    Annual {
        /// The annual date.
        date: MonthDay,
        /// First year observed.
        first: i32,
        /// Last year observed.
        last: i32,
        /// Weekend adjustment.
        observance: Observance,
    },
    /// Election Day every `step` years from `first` to `last`, inclusive.
    ElectionDay {
        /// First year observed.
        first: i32,
        /// Last year observed.
        last: i32,
        /// Year interval.
        step: i32,
    },
}

impl Closure {
    /// True if the market was closed on `date` under this entry.
    #[must_use]
    pub fn matches(&self, date: Date) -> bool {
        match *self {
            Closure::Day(day) => ymd(date) == day,
            Closure::Range(from, to) => (from..=to).contains(&ymd(date)),
            Closure::Weekdays(weekday, from, to) => {
                date.weekday() == weekday && (from..=to).contains(&ymd(date))
            }
            Closure::Annual {
                date: annual,
                first,
                last,
                observance,
            } => {
                // Adjustment never crosses a year boundary for these dates
                let year = date.year();
                (first..=last).contains(&year)
                    && annual.in_year(year).map(|d| observance.apply(d)) == Some(date)
            }
            Closure::ElectionDay { first, last, step } => {
                let year = date.year();
                (first..=last).contains(&year)
                    && (year - first) % step == 0
                    && resolve_holiday(year, HolidayKind::ElectionDay) == Some(date)
            }
        }
    }
}

/// Years in which NYSE closures cannot be reliably determined.
pub const NYSE_UNKNOWN_YEARS: std::ops::RangeInclusive<i32> = 1914..=1915;

/// Historical NYSE closures outside the recurring holiday schedule.
pub static NYSE_SPECIAL_CLOSURES: &[Closure] = &[
    // Blizzard of 1888
    Closure::Range((1888, 3, 12), (1888, 3, 13)),
    // Centennial of Washington's inauguration
    Closure::Range((1889, 4, 29), (1889, 5, 1)),
    // Columbian celebration
    Closure::Day((1892, 10, 12)),
    Closure::Day((1892, 10, 21)),
    // Columbian naval review
    Closure::Day((1893, 4, 27)),
    // Charter Day
    Closure::Day((1898, 5, 4)),
    // Admiral Dewey celebration
    Closure::Day((1899, 9, 29)),
    // Vice President Hobart's funeral
    Closure::Day((1899, 11, 25)),
    // President McKinley's funeral
    Closure::Day((1901, 9, 19)),
    // Opening of the new exchange building
    Closure::Day((1903, 4, 22)),
    // Hudson-Fulton celebration
    Closure::Day((1909, 9, 25)),
    // Vice President Sherman's funeral
    Closure::Day((1912, 11, 2)),
    // Draft registration day
    Closure::Day((1917, 6, 5)),
    // Heatless days
    Closure::Day((1918, 1, 28)),
    Closure::Day((1918, 2, 4)),
    Closure::Day((1918, 2, 11)),
    // Draft registration day
    Closure::Day((1918, 9, 12)),
    // Armistice
    Closure::Day((1918, 11, 11)),
    // Homecoming of the 27th Division
    Closure::Day((1919, 3, 25)),
    // Parade of the 77th Division
    Closure::Day((1919, 5, 6)),
    // Return of General Pershing
    Closure::Day((1919, 9, 10)),
    // Burial of the Unknown Soldier
    Closure::Day((1921, 11, 11)),
    // President Harding's death and funeral
    Closure::Day((1923, 8, 3)),
    Closure::Day((1923, 8, 10)),
    // Parade for Lindbergh
    Closure::Day((1927, 6, 13)),
    // Backlog after the crash
    Closure::Range((1929, 11, 1), (1929, 11, 2)),
    // Bank holiday
    Closure::Range((1933, 3, 4), (1933, 3, 14)),
    // V-J Day
    Closure::Range((1945, 8, 15), (1945, 8, 16)),
    // Christmas Eve
    Closure::Day((1945, 12, 24)),
    Closure::Day((1954, 12, 24)),
    Closure::Day((1956, 12, 24)),
    // Day after Christmas
    Closure::Day((1958, 12, 26)),
    // Day before Decoration Day
    Closure::Day((1961, 5, 29)),
    // President Kennedy's funeral
    Closure::Day((1963, 11, 25)),
    // Christmas Eve
    Closure::Day((1965, 12, 24)),
    // Lincoln's Birthday
    Closure::Day((1968, 2, 12)),
    // Day of mourning for Martin Luther King Jr.
    Closure::Day((1968, 4, 9)),
    // Paperwork crisis: closed on Wednesdays
    Closure::Weekdays(Weekday::Wed, (1968, 6, 12), (1968, 12, 31)),
    // Day after Independence Day
    Closure::Day((1968, 7, 5)),
    // Heavy snow
    Closure::Day((1969, 2, 10)),
    // President Eisenhower's funeral
    Closure::Day((1969, 3, 31)),
    // National day of participation for the lunar exploration
    Closure::Day((1969, 7, 21)),
    // President Truman's funeral
    Closure::Day((1972, 12, 28)),
    // President Johnson's funeral
    Closure::Day((1973, 1, 25)),
    // New York City blackout
    Closure::Day((1977, 7, 14)),
    // Hurricane Gloria
    Closure::Day((1985, 9, 27)),
    // President Nixon's funeral
    Closure::Day((1994, 4, 27)),
    // September 11 attacks
    Closure::Range((2001, 9, 11), (2001, 9, 14)),
    // President Reagan's funeral
    Closure::Day((2004, 6, 11)),
    // President Ford's day of mourning
    Closure::Day((2007, 1, 2)),
    // Hurricane Sandy
    Closure::Range((2012, 10, 29), (2012, 10, 30)),
    // President George H. W. Bush's funeral
    Closure::Day((2018, 12, 5)),
    // Lincoln's Birthday
    Closure::Annual {
        date: MonthDay::new(2, 12),
        first: 1896,
        last: 1953,
        observance: Observance::Sunday,
    },
    // Washington's Birthday before the Monday holiday act
    Closure::Annual {
        date: MonthDay::new(2, 22),
        first: 1885,
        last: 1951,
        observance: Observance::Sunday,
    },
    Closure::Annual {
        date: MonthDay::new(2, 22),
        first: 1952,
        last: 1970,
        observance: Observance::SaturdaySunday,
    },
    // Decoration Day before the Monday holiday act
    Closure::Annual {
        date: MonthDay::new(5, 30),
        first: 1885,
        last: 1951,
        observance: Observance::Sunday,
    },
    Closure::Annual {
        date: MonthDay::new(5, 30),
        first: 1952,
        last: 1970,
        observance: Observance::SaturdaySunday,
    },
    // Columbus Day
    Closure::Annual {
        date: MonthDay::new(10, 12),
        first: 1909,
        last: 1953,
        observance: Observance::Sunday,
    },
    // Armistice Day
    Closure::Annual {
        date: MonthDay::new(11, 11),
        first: 1934,
        last: 1953,
        observance: Observance::Sunday,
    },
    // Election Day: every year, then presidential years only
    Closure::ElectionDay {
        first: 1885,
        last: 1968,
        step: 1,
    },
    Closure::ElectionDay {
        first: 1972,
        last: 1980,
        step: 4,
    },
];

/// US bond market closures outside its recurring schedule.
pub static BOND_MARKET_SPECIAL_CLOSURES: &[Closure] = &[
    // President George H. W. Bush's funeral
    Closure::Day((2018, 12, 5)),
];

/// Whether the NYSE had a special closure on `date`.
///
/// `None` for 1914-1915, when wartime closures cannot be reliably
/// determined.
#[must_use]
pub fn nyse_special_closure(date: Date) -> Option<bool> {
    if NYSE_UNKNOWN_YEARS.contains(&date.year()) {
        return None;
    }
    Some(is_special_closure(date, NYSE_SPECIAL_CLOSURES))
}

/// True if any entry of `table` matches `date`.
#[must_use]
pub fn is_special_closure(date: Date, table: &[Closure]) -> bool {
    table.iter().any(|closure| closure.matches(date))
}
