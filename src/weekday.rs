//! ISO 8601 days of the week.

use std::fmt;

/// A day of the week, numbered as per ISO 8601 (Monday = 1, ..., Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// All weekdays, starting on Monday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the weekday for an ISO number in 1..=7, or `None` otherwise.
    pub fn from_number(number: u8) -> Option<Weekday> {
        match number {
            1..=7 => Some(Self::ALL[usize::from(number) - 1]),
            _ => None,
        }
    }

    /// Maps a Sunday-based offset (Sunday = 0, ..., Saturday = 6) onto the
    /// ISO numbering. Sunday wraps around to 7.
    ///
    /// Offsets outside 0..=6 are reduced modulo 7.
    pub fn from_days_since_sunday(days: u32) -> Weekday {
        match days % 7 {
            0 => Weekday::Sunday,
            n => Self::ALL[n as usize - 1],
        }
    }

    /// Returns the ISO weekday number (1..=7).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the English name, e.g. `"Monday"`.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Returns the three-letter abbreviation, e.g. `"Mon"`.
    pub fn abbreviation(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Weekday {
        Weekday::from_days_since_sunday(weekday.num_days_from_sunday())
    }
}
