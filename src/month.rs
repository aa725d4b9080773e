//! Months of the year and month-length tables.

use std::fmt;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A month of the year (January = 1, ..., December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the month for a number in 1..=12, or `None` otherwise.
    pub fn from_number(number: u8) -> Option<Month> {
        match number {
            1..=12 => Some(Self::ALL[usize::from(number) - 1]),
            _ => None,
        }
    }

    /// Returns the month number (1..=12).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the English name, e.g. `"January"`.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Returns the three-letter abbreviation, e.g. `"Jan"`.
    pub fn abbreviation(self) -> &'static str {
        &self.name()[..3]
    }

    /// Returns the number of days in this month of `year`.
    pub fn days_in(self, year: i32) -> u8 {
        if self == Month::February && is_leap_year(year) {
            29
        } else {
            DAYS_PER_MONTH[usize::from(self.number())]
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Month> for chrono::Month {
    fn from(month: Month) -> chrono::Month {
        match month {
            Month::January => chrono::Month::January,
            Month::February => chrono::Month::February,
            Month::March => chrono::Month::March,
            Month::April => chrono::Month::April,
            Month::May => chrono::Month::May,
            Month::June => chrono::Month::June,
            Month::July => chrono::Month::July,
            Month::August => chrono::Month::August,
            Month::September => chrono::Month::September,
            Month::October => chrono::Month::October,
            Month::November => chrono::Month::November,
            Month::December => chrono::Month::December,
        }
    }
}

impl From<chrono::Month> for Month {
    fn from(month: chrono::Month) -> Month {
        match month {
            chrono::Month::January => Month::January,
            chrono::Month::February => Month::February,
            chrono::Month::March => Month::March,
            chrono::Month::April => Month::April,
            chrono::Month::May => Month::May,
            chrono::Month::June => Month::June,
            chrono::Month::July => Month::July,
            chrono::Month::August => Month::August,
            chrono::Month::September => Month::September,
            chrono::Month::October => Month::October,
            chrono::Month::November => Month::November,
            chrono::Month::December => Month::December,
        }
    }
}

/// Reports whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
