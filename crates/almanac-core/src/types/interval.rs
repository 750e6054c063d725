//! Endpoint inclusion for date ranges.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Whether the start and end of a date range are included.
///
/// Used when enumerating or filtering business days and by the BUS/252
/// day count. The default, `RightOpen`, is the usual accrual convention
/// `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IntervalBounds {
    /// `[start, end]`
    Closed,
    /// `(start, end)`
    Open,
    /// `(start, end]`
    LeftOpen,
    /// `[start, end)`
    #[default]
    RightOpen,
}

impl IntervalBounds {
    /// All four variants.
    pub const ALL: [IntervalBounds; 4] = [
        IntervalBounds::Closed,
        IntervalBounds::Open,
        IntervalBounds::LeftOpen,
        IntervalBounds::RightOpen,
    ];

    /// True if the start date is part of the range.
    #[must_use]
    pub const fn includes_start(&self) -> bool {
        matches!(self, IntervalBounds::Closed | IntervalBounds::RightOpen)
    }

    /// True if the end date is part of the range.
    #[must_use]
    pub const fn includes_end(&self) -> bool {
        matches!(self, IntervalBounds::Closed | IntervalBounds::LeftOpen)
    }

    /// The inclusive `[first, last]` window covered by `from..to` under
    /// these bounds, or `None` if it is empty.
    #[must_use]
    pub fn inclusive_window(&self, from: Date, to: Date) -> Option<(Date, Date)> {
        let first = if self.includes_start() { from } else { from.succ() };
        let last = if self.includes_end() { to } else { to.pred() };
        (first <= last).then_some((first, last))
    }
}

impl fmt::Display for IntervalBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntervalBounds::Closed => "[a, b]",
            IntervalBounds::Open => "(a, b)",
            IntervalBounds::LeftOpen => "(a, b]",
            IntervalBounds::RightOpen => "[a, b)",
        };
        write!(f, "{name}")
    }
}
