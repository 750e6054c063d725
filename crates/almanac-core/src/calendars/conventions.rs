//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{BusinessDaySearch, Calendar, Direction};
use crate::error::AlmanacError;
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Modified following, then back to the preceding business day if the
    /// result crossed the middle of the month (the 15th).
    ModifiedFollowingFortnightly,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,

    /// Move to the nearest business day; ties go to the following one.
    Nearest,

    /// Last business day of the date's month.
    EndOfMonth,
}

impl BusinessDayConvention {
    /// All conventions.
    pub const ALL: [BusinessDayConvention; 8] = [
        BusinessDayConvention::Unadjusted,
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedFollowing,
        BusinessDayConvention::ModifiedFollowingFortnightly,
        BusinessDayConvention::Preceding,
        BusinessDayConvention::ModifiedPreceding,
        BusinessDayConvention::Nearest,
        BusinessDayConvention::EndOfMonth,
    ];
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::ModifiedFollowingFortnightly => "Modified Following Fortnightly",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Nearest => "Nearest",
            BusinessDayConvention::EndOfMonth => "End of Month",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BusinessDayConvention {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "UNADJUSTED" | "NONE" => Ok(BusinessDayConvention::Unadjusted),
            "FOLLOWING" | "F" => Ok(BusinessDayConvention::Following),
            "MODIFIEDFOLLOWING" | "MF" => Ok(BusinessDayConvention::ModifiedFollowing),
            "MODIFIEDFOLLOWINGFORTNIGHTLY" | "MFF" => {
                Ok(BusinessDayConvention::ModifiedFollowingFortnightly)
            }
            "PRECEDING" | "P" => Ok(BusinessDayConvention::Preceding),
            "MODIFIEDPRECEDING" | "MP" => Ok(BusinessDayConvention::ModifiedPreceding),
            "NEAREST" => Ok(BusinessDayConvention::Nearest),
            "ENDOFMONTH" | "EOM" => Ok(BusinessDayConvention::EndOfMonth),
            _ => Err(AlmanacError::UnknownBusinessDayConvention {
                name: s.to_string(),
            }),
        }
    }
}

/// Adjusts a date according to the given business day convention.
///
/// `search` applies to the initial search from `date`. Fallback searches
/// from an already adjusted date never accept that date itself.
pub(crate) fn adjust<C: Calendar + ?Sized>(
    calendar: &C,
    date: Date,
    convention: BusinessDayConvention,
    search: BusinessDaySearch,
) -> Option<Date> {
    let strict = search.strict();

    match convention {
        BusinessDayConvention::Unadjusted => Some(date),

        BusinessDayConvention::Following => {
            calendar.next_business_day_with(date, Direction::Forward, search)
        }

        BusinessDayConvention::Preceding => {
            calendar.next_business_day_with(date, Direction::Backward, search)
        }

        BusinessDayConvention::ModifiedFollowing => modified_following(calendar, date, search),

        BusinessDayConvention::ModifiedFollowingFortnightly => {
            let adjusted = modified_following(calendar, date, search)?;
            if date.day() > 15 || adjusted.day() <= 15 {
                Some(adjusted)
            } else {
                calendar.next_business_day_with(adjusted, Direction::Backward, strict)
            }
        }

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = calendar.next_business_day_with(date, Direction::Backward, search)?;
            if adjusted.same_month(&date) {
                Some(adjusted)
            } else {
                // Crossed month boundary, go following instead
                calendar.next_business_day_with(adjusted, Direction::Forward, strict)
            }
        }

        BusinessDayConvention::Nearest => {
            let fwd = calendar.next_business_day_with(date, Direction::Forward, search);
            let back = calendar.next_business_day_with(date, Direction::Backward, search);

            match (fwd, back) {
                (Some(fwd), Some(back)) => {
                    if date.days_between(&fwd) <= back.days_between(&date) {
                        Some(fwd)
                    } else {
                        Some(back)
                    }
                }
                (fwd, back) => fwd.or(back),
            }
        }

        BusinessDayConvention::EndOfMonth => {
            let eom = date.end_of_month();
            if calendar.is_business_day(eom) == Some(true) {
                Some(eom)
            } else {
                calendar.next_business_day_with(eom, Direction::Backward, strict)
            }
        }
    }
}

fn modified_following<C: Calendar + ?Sized>(
    calendar: &C,
    date: Date,
    search: BusinessDaySearch,
) -> Option<Date> {
    let adjusted = calendar.next_business_day_with(date, Direction::Forward, search)?;
    if adjusted.same_month(&date) {
        Some(adjusted)
    } else {
        // Crossed month boundary, go preceding instead
        calendar.next_business_day_with(adjusted, Direction::Backward, search.strict())
    }
}
