//! The closed set of calendars, selectable by name or configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{
    Calendar, NullCalendar, NyseCalendar, StaticHolidayCalendar, Target2Calendar,
    USBondMarketCalendar, USFederalCalendar, WeekendCalendar,
};
use crate::error::AlmanacError;
use crate::types::{Date, WeekendSet};

/// Every calendar the library provides.
///
/// Dispatch is a plain `match`; use this type when the calendar is chosen
/// at runtime (configuration, command line) and the concrete calendar types
/// when it is known statically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MarketCalendar {
    /// Every day is a business day.
    NoHolidayOrWeekend,
    /// Weekends only, no holidays.
    WeekendsOnly(WeekendCalendar),
    /// Fixed annual holidays.
    StaticHolidays(StaticHolidayCalendar),
    /// Eurosystem TARGET.
    Target,
    /// US Federal government.
    #[default]
    USFederalGovt,
    /// US bond market (SIFMA).
    USBondMarket,
    /// New York Stock Exchange.
    USNyse,
}

impl MarketCalendar {
    /// Weekend-only calendar with Saturday and Sunday weekends.
    #[must_use]
    pub fn weekends_only() -> Self {
        MarketCalendar::WeekendsOnly(WeekendCalendar::new(WeekendSet::saturday_sunday()))
    }

    /// Every calendar that can be selected by name alone.
    #[must_use]
    pub fn all_named() -> Vec<MarketCalendar> {
        vec![
            MarketCalendar::NoHolidayOrWeekend,
            MarketCalendar::weekends_only(),
            MarketCalendar::Target,
            MarketCalendar::USFederalGovt,
            MarketCalendar::USBondMarket,
            MarketCalendar::USNyse,
        ]
    }

    /// The configuration name of this calendar.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            MarketCalendar::NoHolidayOrWeekend => "NoHolidayOrWeekend",
            MarketCalendar::WeekendsOnly(_) => "WeekendsOnly",
            MarketCalendar::StaticHolidays(_) => "StaticHolidays",
            MarketCalendar::Target => "Target",
            MarketCalendar::USFederalGovt => "USFederalGovt",
            MarketCalendar::USBondMarket => "USBondMarket",
            MarketCalendar::USNyse => "USNyse",
        }
    }
}

impl Calendar for MarketCalendar {
    fn name(&self) -> &str {
        match self {
            MarketCalendar::NoHolidayOrWeekend => NullCalendar.name(),
            MarketCalendar::WeekendsOnly(cal) => cal.name(),
            MarketCalendar::StaticHolidays(cal) => cal.name(),
            MarketCalendar::Target => Target2Calendar.name(),
            MarketCalendar::USFederalGovt => USFederalCalendar.name(),
            MarketCalendar::USBondMarket => USBondMarketCalendar.name(),
            MarketCalendar::USNyse => NyseCalendar.name(),
        }
    }

    fn is_weekend(&self, date: Date) -> Option<bool> {
        match self {
            MarketCalendar::NoHolidayOrWeekend => NullCalendar.is_weekend(date),
            MarketCalendar::WeekendsOnly(cal) => cal.is_weekend(date),
            MarketCalendar::StaticHolidays(cal) => cal.is_weekend(date),
            MarketCalendar::Target => Target2Calendar.is_weekend(date),
            MarketCalendar::USFederalGovt => USFederalCalendar.is_weekend(date),
            MarketCalendar::USBondMarket => USBondMarketCalendar.is_weekend(date),
            MarketCalendar::USNyse => NyseCalendar.is_weekend(date),
        }
    }

    fn is_holiday(&self, date: Date) -> Option<bool> {
        match self {
            MarketCalendar::NoHolidayOrWeekend => NullCalendar.is_holiday(date),
            MarketCalendar::WeekendsOnly(cal) => cal.is_holiday(date),
            MarketCalendar::StaticHolidays(cal) => cal.is_holiday(date),
            MarketCalendar::Target => Target2Calendar.is_holiday(date),
            MarketCalendar::USFederalGovt => USFederalCalendar.is_holiday(date),
            MarketCalendar::USBondMarket => USBondMarketCalendar.is_holiday(date),
            MarketCalendar::USNyse => NyseCalendar.is_holiday(date),
        }
    }

    fn describe(&self) -> String {
        match self {
            MarketCalendar::NoHolidayOrWeekend => NullCalendar.describe(),
            MarketCalendar::WeekendsOnly(cal) => cal.describe(),
            MarketCalendar::StaticHolidays(cal) => cal.describe(),
            MarketCalendar::Target => Target2Calendar.describe(),
            MarketCalendar::USFederalGovt => USFederalCalendar.describe(),
            MarketCalendar::USBondMarket => USBondMarketCalendar.describe(),
            MarketCalendar::USNyse => NyseCalendar.describe(),
        }
    }
}

impl fmt::Display for MarketCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl FromStr for MarketCalendar {
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "NOHOLIDAYORWEEKEND" | "NULL" | "NONE" => Ok(MarketCalendar::NoHolidayOrWeekend),
            "WEEKENDSONLY" | "WEEKENDONLY" | "WEEKENDS" => Ok(MarketCalendar::weekends_only()),
            "TARGET" | "TARGET2" => Ok(MarketCalendar::Target),
            "USFEDERALGOVT" | "USFEDERAL" | "USGOVT" => Ok(MarketCalendar::USFederalGovt),
            "USBONDMARKET" | "SIFMA" | "USBOND" => Ok(MarketCalendar::USBondMarket),
            "USNYSE" | "NYSE" => Ok(MarketCalendar::USNyse),
            _ => Err(AlmanacError::unknown_calendar(s)),
        }
    }
}
