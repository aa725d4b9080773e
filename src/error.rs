//! Error types for the isodate crate.

use crate::date::Date;

/// Error returned when a string cannot be parsed against a layout.
///
/// Every variant carries the full input value so the message stands on its
/// own when it is propagated far from the call to [`Date::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Returned when the value does not have the shape the layout asks for
    /// at some layout element.
    #[error("parsing date {value:?} as {layout:?}: cannot parse {rest:?} as {element:?}")]
    Mismatch {
        /// The layout the value was parsed against.
        layout: String,
        /// The full value being parsed.
        value: String,
        /// The layout element (token or literal) that failed to match.
        element: String,
        /// The unparsed remainder of the value at the point of failure.
        rest: String,
    },

    /// Returned when a field has the right shape but an impossible value,
    /// such as month 13 or April 31.
    #[error("parsing date {value:?}: {field} out of range")]
    OutOfRange {
        /// The full value being parsed.
        value: String,
        /// The name of the offending field.
        field: &'static str,
    },

    /// Returned when the layout is exhausted before the value.
    #[error("parsing date {value:?}: extra text: {extra:?}")]
    ExtraText {
        /// The full value being parsed.
        value: String,
        /// The text left over after the layout was fully consumed.
        extra: String,
    },
}

/// Error type for fallible construction and arithmetic on [`Date`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Returned when a normalized year falls outside the supported range.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// The normalized year that was requested.
        year: i64,
        /// The smallest supported year.
        min: i32,
        /// The largest supported year.
        max: i32,
    },

    /// Returned when shifting a date by a number of days leaves the
    /// supported range.
    #[error("adding {days} days to {date} overflows the supported range")]
    Overflow {
        /// The date the shift started from.
        date: Date,
        /// The number of days that were added.
        days: i64,
    },
}
