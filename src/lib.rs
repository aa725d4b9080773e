//! # isodate
//!
//! Immutable Gregorian calendar dates following ISO 8601: Monday-first
//! weekdays, ISO week numbers and `YYYY-MM-DD` as the canonical form.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"Date::new()"| B["Date"]
//!     C["layout + string"] -->|"Date::parse()"| B
//!     D["Clock"] -->|"Date::today_with()"| B
//!     B -->|"+ Duration / add_date()"| B
//!     B -->|".format(layout)"| E["String"]
//!     B -->|".weekday() / .week()"| F["Weekday, ISO week"]
//!     B -->|".time()"| G["DateTime<Utc> at midnight"]
//!     B -->|".series(step)"| H["DateSeries"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use isodate::{Date, Month, Weekday, DAY, RFC1123, RFC3339};
//!
//! // Construction normalizes: February 29 of a common year is March 1.
//! let date = Date::new(2021, Month::February, 29);
//! assert_eq!(date.to_string(), "2021-03-01");
//!
//! // Parsing and formatting use reference-pattern layouts.
//! let parsed = Date::parse(RFC3339, "2021-03-01")?;
//! assert_eq!(parsed, date);
//! assert_eq!(date.format(RFC1123), "Mon, 01 Mar 2021");
//!
//! // ISO 8601 weekday and week.
//! assert_eq!(date.weekday(), Weekday::Monday);
//! assert_eq!(date.week(), 9);
//!
//! // Arithmetic.
//! assert_eq!(date + DAY, Date::new(2021, Month::March, 2));
//! assert_eq!(Date::new(2021, Month::January, 31).add_date(0, 1, 0), date + DAY * 2);
//! # Ok::<(), isodate::ParseError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | The `Date` value type |
//! | `duration` | Whole-day durations |
//! | `weekday` | ISO 8601 weekdays |
//! | `month` | Months and month lengths |
//! | `layout` | Named layouts and the reference-pattern tokenizer |
//! | `format` | Rendering dates against layouts |
//! | `parse` | Parsing dates against layouts |
//! | `clock` | Injectable time sources |
//! | `sequence` | Date series and sequences |
//! | `error` | Error types |
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Date`] (as `YYYY-MM-DD`),
//!   [`Month`], [`Weekday`] and [`Duration`].

mod clock;
mod date;
mod duration;
mod error;
mod format;
mod layout;
mod month;
mod parse;
mod sequence;
#[cfg(feature = "serde")]
mod serde;
mod weekday;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::Date;
pub use duration::{Duration, DAY, WEEK};
pub use error::{DateError, ParseError};
pub use layout::{ANSIC, RFC1123, RFC3339, RFC822, RFC850};
pub use month::{is_leap_year, Month};
pub use sequence::{date_sequence, DateSeries};
pub use weekday::Weekday;
