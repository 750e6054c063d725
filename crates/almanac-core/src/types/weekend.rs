//! Weekend day sets.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The weekdays a calendar treats as non-business days by default.
///
/// Stored as a bitmask over Monday..Sunday. The set may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekendSet(u8);

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl WeekendSet {
    /// No weekend days.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Saturday and Sunday.
    #[must_use]
    pub const fn saturday_sunday() -> Self {
        Self(bit(Weekday::Sat) | bit(Weekday::Sun))
    }

    /// Builds a set from any collection of weekdays; duplicates collapse.
    pub fn from_weekdays(days: impl IntoIterator<Item = Weekday>) -> Self {
        days.into_iter().fold(Self::empty(), Self::with)
    }

    /// Returns the set with `day` added.
    #[must_use]
    pub const fn with(self, day: Weekday) -> Self {
        Self(self.0 | bit(day))
    }

    /// True if `day` is a weekend day.
    #[inline]
    #[must_use]
    pub const fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// True if the set has no days.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Weekend days in Monday..Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        ALL_WEEKDAYS.into_iter().filter(|d| self.contains(*d))
    }
}

impl Default for WeekendSet {
    fn default() -> Self {
        Self::saturday_sunday()
    }
}

const fn bit(day: Weekday) -> u8 {
    let shift = match day {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => 6,
    };
    1 << shift
}

impl From<Vec<Weekday>> for WeekendSet {
    fn from(days: Vec<Weekday>) -> Self {
        Self::from_weekdays(days)
    }
}

impl From<WeekendSet> for Vec<Weekday> {
    fn from(set: WeekendSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for WeekendSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<String> = self.iter().map(|d| format!("{d:?}")).collect();
        write!(f, "{}", names.join(", "))
    }
}
