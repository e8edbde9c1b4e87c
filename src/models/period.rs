//! Liturgical period names.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The part of the liturgical day a moment falls into.
///
/// Friday and Saturday rename the afternoon/evening periods; the set of
/// displayed times differs per weekday as well (see the classifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Morning,
    ShabbosMorning,
    Afternoon,
    ErevShabbos,
    ShabbosAfternoon,
    Evening,
    MotzeiShabbos,
}

impl Period {
    /// Display name used in API responses and templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::ShabbosMorning => "Shabbos Morning",
            Period::Afternoon => "Afternoon",
            Period::ErevShabbos => "Erev Shabbos",
            Period::ShabbosAfternoon => "Shabbos Afternoon",
            Period::Evening => "Evening",
            Period::MotzeiShabbos => "Motzei Shabbos",
        }
    }

    /// Morning period for the given weekday.
    pub fn morning(weekday: Weekday) -> Self {
        if weekday == Weekday::Sat {
            Period::ShabbosMorning
        } else {
            Period::Morning
        }
    }

    /// Afternoon period for the given weekday.
    pub fn afternoon(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Fri => Period::ErevShabbos,
            Weekday::Sat => Period::ShabbosAfternoon,
            _ => Period::Afternoon,
        }
    }

    /// Evening period for the given weekday.
    pub fn evening(weekday: Weekday) -> Self {
        if weekday == Weekday::Sat {
            Period::MotzeiShabbos
        } else {
            Period::Evening
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
