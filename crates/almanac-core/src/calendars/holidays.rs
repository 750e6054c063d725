//! Holiday rule library.
//!
//! Every holiday is a rule mapping a year to at most one date. Fixed-date
//! holidays are `MonthDay` lookups, weekday holidays go through
//! [`nth_weekday_of_month`], movable feasts through Easter, and the US
//! observance rules shift weekend holidays onto adjacent weekdays.
//! Calendars combine rules with effective-year gates ([`GatedHoliday`]).

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::easter;
use crate::types::{nth_weekday_of_month, Date, MonthDay};

/// January 1st.
pub const NEW_YEARS_DAY: MonthDay = MonthDay::new(1, 1);
/// May 1st.
pub const LABOUR_DAY: MonthDay = MonthDay::new(5, 1);
/// June 19th.
pub const JUNETEENTH: MonthDay = MonthDay::new(6, 19);
/// July 4th.
pub const US_INDEPENDENCE_DAY: MonthDay = MonthDay::new(7, 4);
/// November 11th.
pub const US_VETERANS_DAY: MonthDay = MonthDay::new(11, 11);
/// December 25th.
pub const CHRISTMAS_DAY: MonthDay = MonthDay::new(12, 25);
/// December 26th.
pub const BOXING_DAY: MonthDay = MonthDay::new(12, 26);
/// December 31st.
pub const NEW_YEARS_EVE: MonthDay = MonthDay::new(12, 31);

/// The closed set of holidays the rule library can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayKind {
    /// January 1st, unadjusted.
    NewYearsDay,
    /// January 1st with the Saturday/Sunday rule; a Saturday holiday is
    /// observed on December 31st of the previous year.
    NewYearsDayObserved,
    /// January 1st with the Sunday-only rule (no Friday observance).
    NewYearsDaySundayObserved,
    /// December 31st.
    NewYearsEve,
    /// Third Monday of January.
    MartinLutherKingDay,
    /// Third Monday of February.
    WashingtonsBirthday,
    /// US presidential inauguration, in inauguration years only.
    InaugurationDay,
    /// Inauguration Day with the Sunday-only rule.
    InaugurationDayObserved,
    /// Easter Sunday.
    EasterSunday,
    /// Two days before Easter Sunday.
    GoodFriday,
    /// One day after Easter Sunday.
    EasterMonday,
    /// 39 days after Easter Sunday.
    AscensionDay,
    /// 49 days after Easter Sunday.
    WhitSunday,
    /// 50 days after Easter Sunday.
    WhitMonday,
    /// May 1st.
    LabourDay,
    /// Last Monday of May.
    MemorialDay,
    /// June 19th, unadjusted.
    Juneteenth,
    /// June 19th with the Saturday/Sunday rule.
    JuneteenthObserved,
    /// July 4th, unadjusted.
    IndependenceDay,
    /// July 4th with the Saturday/Sunday rule.
    IndependenceDayObserved,
    /// First Monday of September.
    LaborDay,
    /// Second Monday of October.
    ColumbusDay,
    /// Tuesday after the first Monday of November.
    ElectionDay,
    /// November 11th, unadjusted.
    VeteransDay,
    /// November 11th with the Saturday/Sunday rule.
    VeteransDayObserved,
    /// Fourth Thursday of November.
    Thanksgiving,
    /// December 25th, unadjusted.
    ChristmasDay,
    /// December 25th with the Saturday/Sunday rule.
    ChristmasDayObserved,
    /// December 26th.
    BoxingDay,
}

impl HolidayKind {
    /// Human readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            HolidayKind::NewYearsDay => "New Year's Day",
            HolidayKind::NewYearsDayObserved => "New Year's Day (observed)",
            HolidayKind::NewYearsDaySundayObserved => "New Year's Day (Sunday observed)",
            HolidayKind::NewYearsEve => "New Year's Eve",
            HolidayKind::MartinLutherKingDay => "Martin Luther King Jr. Day",
            HolidayKind::WashingtonsBirthday => "Washington's Birthday",
            HolidayKind::InaugurationDay => "Inauguration Day",
            HolidayKind::InaugurationDayObserved => "Inauguration Day (observed)",
            HolidayKind::EasterSunday => "Easter Sunday",
            HolidayKind::GoodFriday => "Good Friday",
            HolidayKind::EasterMonday => "Easter Monday",
            HolidayKind::AscensionDay => "Ascension Day",
            HolidayKind::WhitSunday => "Whit Sunday",
            HolidayKind::WhitMonday => "Whit Monday",
            HolidayKind::LabourDay => "Labour Day",
            HolidayKind::MemorialDay => "Memorial Day",
            HolidayKind::Juneteenth => "Juneteenth",
            HolidayKind::JuneteenthObserved => "Juneteenth (observed)",
            HolidayKind::IndependenceDay => "Independence Day",
            HolidayKind::IndependenceDayObserved => "Independence Day (observed)",
            HolidayKind::LaborDay => "Labor Day",
            HolidayKind::ColumbusDay => "Columbus Day",
            HolidayKind::ElectionDay => "Election Day",
            HolidayKind::VeteransDay => "Veterans Day",
            HolidayKind::VeteransDayObserved => "Veterans Day (observed)",
            HolidayKind::Thanksgiving => "Thanksgiving Day",
            HolidayKind::ChristmasDay => "Christmas Day",
            HolidayKind::ChristmasDayObserved => "Christmas Day (observed)",
            HolidayKind::BoxingDay => "Boxing Day",
        }
    }
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Moves a Sunday to the following Monday; other days are unchanged.
#[must_use]
pub fn sunday_rule(date: Date) -> Date {
    match date.weekday() {
        Weekday::Sun => date.succ(),
        _ => date,
    }
}

/// Moves a Sunday to the following Monday and a Saturday to the preceding
/// Friday; other days are unchanged.
#[must_use]
pub fn sat_sun_rule(date: Date) -> Date {
    match date.weekday() {
        Weekday::Sat => date.pred(),
        Weekday::Sun => date.succ(),
        _ => date,
    }
}

/// US presidential inauguration day.
///
/// April 30th in 1789, March 4th in inauguration years 1793-1933 and
/// January 20th from 1937. `None` in every other year.
#[must_use]
pub fn inauguration_day(year: i32) -> Option<Date> {
    match year {
        1789 => Date::from_ymd_opt(1789, 4, 30),
        1793..=1933 if (year - 1789) % 4 == 0 => Date::from_ymd_opt(year, 3, 4),
        _ if year >= 1937 && (year - 1933) % 4 == 0 => Date::from_ymd_opt(year, 1, 20),
        _ => None,
    }
}

fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: i32) -> Option<Date> {
    let day = nth_weekday_of_month(year, month, weekday, n)?;
    Date::from_ymd_opt(year, month, day)
}

/// Resolves `kind` to its date in `year`.
///
/// `None` only where the rule itself is partial: Easter-based holidays
/// before 1583 and Inauguration Day outside inauguration years.
#[must_use]
pub fn resolve_holiday(year: i32, kind: HolidayKind) -> Option<Date> {
    match kind {
        HolidayKind::NewYearsDay => NEW_YEARS_DAY.in_year(year),
        HolidayKind::NewYearsDayObserved => NEW_YEARS_DAY.in_year(year).map(sat_sun_rule),
        HolidayKind::NewYearsDaySundayObserved => NEW_YEARS_DAY.in_year(year).map(sunday_rule),
        HolidayKind::NewYearsEve => NEW_YEARS_EVE.in_year(year),
        HolidayKind::MartinLutherKingDay => nth_weekday(year, 1, Weekday::Mon, 3),
        HolidayKind::WashingtonsBirthday => nth_weekday(year, 2, Weekday::Mon, 3),
        HolidayKind::InaugurationDay => inauguration_day(year),
        HolidayKind::InaugurationDayObserved => inauguration_day(year).map(sunday_rule),
        HolidayKind::EasterSunday => easter::gregorian_easter_sunday(year),
        HolidayKind::GoodFriday => easter::good_friday(year),
        HolidayKind::EasterMonday => easter::easter_monday(year),
        HolidayKind::AscensionDay => easter::ascension_day(year),
        HolidayKind::WhitSunday => easter::whit_sunday(year),
        HolidayKind::WhitMonday => easter::whit_monday(year),
        HolidayKind::LabourDay => LABOUR_DAY.in_year(year),
        HolidayKind::MemorialDay => nth_weekday(year, 5, Weekday::Mon, -1),
        HolidayKind::Juneteenth => JUNETEENTH.in_year(year),
        HolidayKind::JuneteenthObserved => JUNETEENTH.in_year(year).map(sat_sun_rule),
        HolidayKind::IndependenceDay => US_INDEPENDENCE_DAY.in_year(year),
        HolidayKind::IndependenceDayObserved => {
            US_INDEPENDENCE_DAY.in_year(year).map(sat_sun_rule)
        }
        HolidayKind::LaborDay => nth_weekday(year, 9, Weekday::Mon, 1),
        HolidayKind::ColumbusDay => nth_weekday(year, 10, Weekday::Mon, 2),
        HolidayKind::ElectionDay => nth_weekday(year, 11, Weekday::Mon, 1).map(|d| d.succ()),
        HolidayKind::VeteransDay => US_VETERANS_DAY.in_year(year),
        HolidayKind::VeteransDayObserved => US_VETERANS_DAY.in_year(year).map(sat_sun_rule),
        HolidayKind::Thanksgiving => nth_weekday(year, 11, Weekday::Thu, 4),
        HolidayKind::ChristmasDay => CHRISTMAS_DAY.in_year(year),
        HolidayKind::ChristmasDayObserved => CHRISTMAS_DAY.in_year(year).map(sat_sun_rule),
        HolidayKind::BoxingDay => BOXING_DAY.in_year(year),
    }
}

/// Years in which a holiday rule may land on a date in `date_year`.
///
/// Only the observed New Year's Day crosses a year boundary, landing on
/// December 31st of the year before.
fn candidate_years(date_year: i32, kind: HolidayKind) -> impl Iterator<Item = i32> {
    let next = (kind == HolidayKind::NewYearsDayObserved).then_some(date_year + 1);
    std::iter::once(date_year).chain(next)
}

/// True if `date` is the date of any holiday in `kinds`.
#[must_use]
pub fn is_holiday(date: Date, kinds: &[HolidayKind]) -> bool {
    kinds.iter().any(|&kind| {
        candidate_years(date.year(), kind).any(|year| resolve_holiday(year, kind) == Some(date))
    })
}

/// Restriction on the years in which a holiday is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearGate {
    /// Every year.
    Always,
    /// Years strictly after the given year.
    After(i32),
    /// Every year except the listed ones.
    Except(&'static [i32]),
    /// Only the listed years.
    Only(&'static [i32]),
}

impl YearGate {
    /// True if the holiday is kept in `year`.
    #[must_use]
    pub fn admits(&self, year: i32) -> bool {
        match self {
            YearGate::Always => true,
            YearGate::After(first) => year > *first,
            YearGate::Except(years) => !years.contains(&year),
            YearGate::Only(years) => years.contains(&year),
        }
    }
}

/// A holiday kept only in the years its gate admits.
///
/// The gate applies to the holiday's own year, so an observed New Year's
/// Day falling on December 31st is gated by the following year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatedHoliday {
    /// The holiday rule.
    pub kind: HolidayKind,
    /// The years it applies in.
    pub gate: YearGate,
}

impl GatedHoliday {
    /// A holiday kept every year.
    #[must_use]
    pub const fn always(kind: HolidayKind) -> Self {
        Self {
            kind,
            gate: YearGate::Always,
        }
    }

    /// A holiday kept in years strictly after `year`.
    #[must_use]
    pub const fn after(kind: HolidayKind, year: i32) -> Self {
        Self {
            kind,
            gate: YearGate::After(year),
        }
    }

    /// A holiday kept in all years but `years`.
    #[must_use]
    pub const fn except(kind: HolidayKind, years: &'static [i32]) -> Self {
        Self {
            kind,
            gate: YearGate::Except(years),
        }
    }

    /// A holiday kept only in `years`.
    #[must_use]
    pub const fn only(kind: HolidayKind, years: &'static [i32]) -> Self {
        Self {
            kind,
            gate: YearGate::Only(years),
        }
    }

    /// True if this holiday falls on `date`.
    #[must_use]
    pub fn matches(&self, date: Date) -> bool {
        candidate_years(date.year(), self.kind).any(|year| {
            self.gate.admits(year) && resolve_holiday(year, self.kind) == Some(date)
        })
    }
}

/// True if any gated holiday in `rules` falls on `date`.
#[must_use]
pub fn is_gated_holiday(date: Date, rules: &[GatedHoliday]) -> bool {
    rules.iter().any(|rule| rule.matches(date))
}
