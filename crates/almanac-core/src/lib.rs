//! # Almanac Core
//!
//! Market calendars, business day arithmetic and day count conventions.
//!
//! This crate provides:
//!
//! - **Types**: `Date`, `MonthDay`, `WeekendSet`, `IntervalBounds` and
//!   calendar-date comparison utilities
//! - **Business Day Calendars**: TARGET, US Federal, US bond market (SIFMA),
//!   NYSE, static and weekend-only calendars behind one `Calendar` trait
//! - **Cached Queries**: binary-search answers over a precomputed business
//!   day sequence
//! - **Day Count Conventions**: year fractions for the 30/360, Actual and
//!   business-day families
//! - **Configuration**: calendar and convention selection from TOML or JSON
//!
//! ## Design Philosophy
//!
//! - **Honest Unknowns**: calendar predicates return `Option<bool>`; `None`
//!   means the calendar cannot say for that date
//! - **Loud Preconditions**: malformed input (reversed ranges, unsorted
//!   sequences, zero shift counts) panics instead of guessing
//! - **Immutable Calendars**: every calendar is read-only and can be shared
//!   across threads freely
//!
//! ## Example
//!
//! ```rust
//! use almanac_core::prelude::*;
//!
//! let nyse = MarketCalendar::USNyse;
//! let good_friday = Date::from_ymd(2025, 4, 18).unwrap();
//!
//! assert_eq!(nyse.is_business_day(good_friday), Some(false));
//! assert_eq!(
//!     nyse.next_business_day(good_friday, Direction::Forward),
//!     Some(Date::from_ymd(2025, 4, 21).unwrap())
//! );
//!
//! let yf = DayCountConvention::Act360.year_fraction(
//!     Date::from_ymd(2008, 1, 31).unwrap(),
//!     Date::from_ymd(2008, 2, 28).unwrap(),
//! );
//! assert_eq!(yf, 28.0 / 360.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_possible_truncation)]

pub mod calendars;
pub mod config;
pub mod daycounts;
pub mod error;
pub mod types;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, BusinessDaySearch, BusinessDaySeq, Calendar, Direction,
        MarketCalendar,
    };
    pub use crate::config::AlmanacConfig;
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{AlmanacError, AlmanacResult};
    pub use crate::types::{Date, IntervalBounds, MonthDay, WeekendSet};
}

pub use calendars::{Calendar, MarketCalendar};
pub use daycounts::{DayCount, DayCountConvention};
pub use error::{AlmanacError, AlmanacResult};
pub use types::Date;
