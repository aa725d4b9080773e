//! Gregorian calendar dates.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::clock::{Clock, SystemClock};
use crate::duration::Duration;
use crate::error::{DateError, ParseError};
use crate::format::write_date;
use crate::layout::RFC3339;
use crate::month::{self, Month};
use crate::parse;
use crate::sequence::DateSeries;
use crate::weekday::Weekday;

/// A day in the proleptic Gregorian calendar, with no time-of-day.
///
/// Dates are immutable values: every operation returns a new `Date`. The
/// zero value (`Date::default()`) is January 1 of year 1.
///
/// Construction normalizes out-of-range fields the way calendar arithmetic
/// does, so April 31 is May 1 and month 13 of 2020 is January 2021.
///
/// ```
/// use isodate::{Date, Month, Weekday};
///
/// let date = Date::new(2021, Month::February, 29);
/// assert_eq!(date, Date::new(2021, Month::March, 1));
/// assert_eq!(date.weekday(), Weekday::Monday);
/// assert_eq!(date.to_string(), "2021-03-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    inner: NaiveDate,
}

impl Default for Date {
    fn default() -> Self {
        Self {
            inner: NaiveDate::from_ymd_opt(1, 1, 1).expect("0001-01-01 is a valid date"),
        }
    }
}

impl Date {
    /// The earliest supported date.
    pub const MIN: Date = Date {
        inner: NaiveDate::MIN,
    };

    /// The latest supported date.
    pub const MAX: Date = Date {
        inner: NaiveDate::MAX,
    };

    /// Returns the date for `year`, `month` and `day`.
    ///
    /// `day` may lie outside the month; it rolls over into neighbouring
    /// months, so day 0 is the last day of the previous month.
    ///
    /// # Panics
    ///
    /// Panics if the normalized date is outside [`Date::MIN`]..=[`Date::MAX`].
    /// Use [`Date::try_new`] to handle that case.
    pub fn new(year: i32, month: Month, day: i32) -> Date {
        match Self::try_new(year, month, day) {
            Ok(date) => date,
            Err(err) => panic!("invalid date: {err}"),
        }
    }

    /// Returns the date for `year`, `month` and `day`, normalizing `day`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] if the normalized date is outside the supported
    /// range.
    pub fn try_new(year: i32, month: Month, day: i32) -> Result<Date, DateError> {
        Self::from_ymd(year, i32::from(month.number()), day)
    }

    /// Returns the date for a year, a raw month number and a day, rolling
    /// both `month` and `day` over when they are out of range.
    ///
    /// ```
    /// use isodate::{Date, Month};
    ///
    /// assert_eq!(Date::from_ymd(2020, 13, 1)?, Date::new(2021, Month::January, 1));
    /// assert_eq!(Date::from_ymd(2021, 0, 31)?, Date::new(2020, Month::December, 31));
    /// # Ok::<(), isodate::DateError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] if the normalized date is outside the supported
    /// range.
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Result<Date, DateError> {
        normalize(i64::from(year), i64::from(month), i64::from(day))
    }

    /// Returns today's date according to the system clock, in the local
    /// time zone.
    pub fn today() -> Date {
        Self::today_with(&SystemClock)
    }

    /// Returns the date `clock` reports for the current instant, resolved in
    /// the offset the clock reports it in.
    pub fn today_with<C: Clock + ?Sized>(clock: &C) -> Date {
        Date::from(clock.now())
    }

    /// Parses `value` against a reference-pattern `layout`, such as
    /// [`RFC3339`](crate::RFC3339).
    ///
    /// Time-of-day and offset tokens are checked and then discarded.
    ///
    /// ```
    /// use isodate::{Date, Month, ANSIC};
    ///
    /// let date = Date::parse(ANSIC, "Sun Mar  7 2021")?;
    /// assert_eq!(date, Date::new(2021, Month::March, 7));
    /// # Ok::<(), isodate::ParseError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `value` does not match `layout` or contains
    /// a field that is out of range.
    pub fn parse(layout: &str, value: &str) -> Result<Date, ParseError> {
        parse::parse(layout, value)
    }

    /// Renders the date using a reference-pattern `layout`.
    ///
    /// Time-of-day tokens render as UTC midnight.
    pub fn format(&self, layout: &str) -> String {
        let mut out = String::with_capacity(layout.len() + 4);
        // Writing to a String cannot fail.
        let _ = write_date(&mut out, *self, layout);
        out
    }

    /// Returns the instant of midnight UTC at the start of the date.
    pub fn time(&self) -> DateTime<Utc> {
        self.inner.and_time(NaiveTime::MIN).and_utc()
    }

    /// Reports whether `self` is after `other`.
    pub fn after(&self, other: Date) -> bool {
        *self > other
    }

    /// Reports whether `self` is before `other`.
    pub fn before(&self, other: Date) -> bool {
        *self < other
    }

    /// Reports whether `self` and `other` are the same day.
    pub fn equal(&self, other: Date) -> bool {
        *self == other
    }

    /// Reports whether this is the zero date, January 1 of year 1.
    pub fn is_zero(&self) -> bool {
        *self == Date::default()
    }

    /// Returns the year, month and day.
    pub fn date(&self) -> (i32, Month, u8) {
        (self.year(), self.month(), self.day())
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> Month {
        Month::ALL[self.inner.month0() as usize]
    }

    /// Returns the day of the month (1..=31).
    pub fn day(&self) -> u8 {
        self.inner.day() as u8
    }

    /// Returns the day of the year (1..=366).
    pub fn year_day(&self) -> u16 {
        self.inner.ordinal() as u16
    }

    /// Returns the ISO 8601 day of the week.
    pub fn weekday(&self) -> Weekday {
        Weekday::from(self.inner.weekday())
    }

    /// Returns the ISO 8601 week number (1..=53).
    ///
    /// The first days of January may belong to the last week of the previous
    /// year, and the last days of December to week 1 of the next year.
    pub fn week(&self) -> u8 {
        self.iso_week().1
    }

    /// Returns the ISO 8601 week-numbering year and week number.
    ///
    /// ```
    /// use isodate::{Date, Month};
    ///
    /// assert_eq!(Date::new(2021, Month::January, 1).iso_week(), (2020, 53));
    /// assert_eq!(Date::new(2024, Month::December, 30).iso_week(), (2025, 1));
    /// ```
    pub fn iso_week(&self) -> (i32, u8) {
        let week = self.inner.iso_week();
        (week.year(), week.week() as u8)
    }

    pub fn is_leap_year(&self) -> bool {
        month::is_leap_year(self.year())
    }

    /// Returns the number of days in the date's month.
    pub fn days_in_month(&self) -> u8 {
        self.month().days_in(self.year())
    }

    /// Returns the date `duration` days later (earlier if negative).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Overflow`] if the result is outside the supported
    /// range.
    pub fn checked_add(self, duration: Duration) -> Result<Date, DateError> {
        self.shift(i64::from(duration.as_days()))
    }

    /// Returns the date `duration` days earlier (later if negative).
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Overflow`] if the result is outside the supported
    /// range.
    pub fn checked_sub(self, duration: Duration) -> Result<Date, DateError> {
        self.shift(-i64::from(duration.as_days()))
    }

    /// Adds years, months and days to the date's fields and normalizes the
    /// result.
    ///
    /// Years and months are folded first; days are then counted from the
    /// start of the resulting month. No clamping happens, so January 31 plus
    /// one month is March 3 in a common year.
    ///
    /// ```
    /// use isodate::{Date, Month};
    ///
    /// let date = Date::new(2021, Month::January, 31).add_date(0, 1, 0);
    /// assert_eq!(date, Date::new(2021, Month::March, 3));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the result is outside the supported range. Use
    /// [`Date::checked_add_date`] to handle that case.
    pub fn add_date(self, years: i32, months: i32, days: i32) -> Date {
        match self.checked_add_date(years, months, days) {
            Ok(date) => date,
            Err(err) => panic!("date arithmetic overflowed: {err}"),
        }
    }

    /// The non-panicking form of [`Date::add_date`].
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] if the result is outside the supported range.
    pub fn checked_add_date(self, years: i32, months: i32, days: i32) -> Result<Date, DateError> {
        normalize(
            i64::from(self.year()) + i64::from(years),
            i64::from(self.month().number()) + i64::from(months),
            i64::from(self.day()) + i64::from(days),
        )
    }

    /// Returns an iterator over `self`, `self + step`, `self + 2 * step`, ...
    ///
    /// The iterator ends at the edge of the supported range.
    pub fn series(self, step: Duration) -> DateSeries {
        DateSeries::new(self, step)
    }

    fn shift(self, days: i64) -> Result<Date, DateError> {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days < 0 {
            self.inner.checked_sub_days(magnitude)
        } else {
            self.inner.checked_add_days(magnitude)
        };
        shifted
            .map(|inner| Date { inner })
            .ok_or(DateError::Overflow { date: self, days })
    }
}

/// Builds a date from possibly out-of-range fields: the month is folded into
/// the year, then `day - 1` days are added to the first of that month.
fn normalize(year: i64, month: i64, day: i64) -> Result<Date, DateError> {
    let month0 = month - 1;
    let year = year + month0.div_euclid(12);
    let month = month0.rem_euclid(12) as u32 + 1;
    let first = i32::try_from(year)
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
        .ok_or(DateError::YearOutOfRange {
            year,
            min: Date::MIN.year(),
            max: Date::MAX.year(),
        })?;
    Date { inner: first }.shift(day - 1)
}

impl fmt::Display for Date {
    /// Writes the ISO 8601 form, `YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date(f, *self, RFC3339)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// Parses the ISO 8601 form, `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Date, ParseError> {
        Date::parse(RFC3339, s)
    }
}

impl Add<Duration> for Date {
    type Output = Date;

    /// # Panics
    ///
    /// Panics if the result is outside the supported range.
    fn add(self, rhs: Duration) -> Date {
        match self.checked_add(rhs) {
            Ok(date) => date,
            Err(err) => panic!("date arithmetic overflowed: {err}"),
        }
    }
}

impl AddAssign<Duration> for Date {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub<Duration> for Date {
    type Output = Date;

    /// # Panics
    ///
    /// Panics if the result is outside the supported range.
    fn sub(self, rhs: Duration) -> Date {
        match self.checked_sub(rhs) {
            Ok(date) => date,
            Err(err) => panic!("date arithmetic overflowed: {err}"),
        }
    }
}

impl SubAssign<Duration> for Date {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Sub for Date {
    type Output = Duration;

    /// Returns the number of days from `rhs` to `self`.
    fn sub(self, rhs: Date) -> Duration {
        let days = self.inner.signed_duration_since(rhs.inner).num_days();
        // The whole supported range spans fewer than i32::MAX days.
        Duration::days(i32::try_from(days).expect("day span between dates fits in i32"))
    }
}

impl From<NaiveDate> for Date {
    fn from(inner: NaiveDate) -> Date {
        Date { inner }
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> NaiveDate {
        date.inner
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Date {
    /// Returns the civil date the instant falls on in its own time zone.
    fn from(instant: DateTime<Tz>) -> Date {
        Date {
            inner: instant.date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::duration::{DAY, WEEK};
    use chrono::FixedOffset;

    fn ymd(date: Date) -> (i32, u8, u8) {
        (date.year(), date.month().number(), date.day())
    }

    #[test]
    fn new_valid() {
        let date = Date::new(2021, Month::March, 15);
        assert_eq!(date.year(), 2021);
        assert_eq!(date.month(), Month::March);
        assert_eq!(date.day(), 15);
        assert_eq!(date.date(), (2021, Month::March, 15));
    }

    #[test]
    fn new_normalizes_day_overflow() {
        assert_eq!(ymd(Date::new(2021, Month::February, 29)), (2021, 3, 1));
        assert_eq!(ymd(Date::new(2020, Month::February, 29)), (2020, 2, 29));
        assert_eq!(ymd(Date::new(2021, Month::April, 31)), (2021, 5, 1));
        assert_eq!(ymd(Date::new(2021, Month::December, 32)), (2022, 1, 1));
        assert_eq!(ymd(Date::new(2021, Month::January, 400)), (2022, 2, 4));
    }

    #[test]
    fn new_normalizes_day_underflow() {
        assert_eq!(ymd(Date::new(2021, Month::March, 0)), (2021, 2, 28));
        assert_eq!(ymd(Date::new(2021, Month::January, 0)), (2020, 12, 31));
        assert_eq!(ymd(Date::new(2021, Month::January, -365)), (2020, 1, 1));
    }

    #[test]
    fn from_ymd_normalizes_month() {
        assert_eq!(ymd(Date::from_ymd(2020, 13, 1).unwrap()), (2021, 1, 1));
        assert_eq!(ymd(Date::from_ymd(2020, 0, 1).unwrap()), (2019, 12, 1));
        assert_eq!(ymd(Date::from_ymd(2020, -12, 1).unwrap()), (2018, 12, 1));
        assert_eq!(ymd(Date::from_ymd(2020, 25, 1).unwrap()), (2022, 1, 1));
    }

    #[test]
    fn try_new_out_of_range() {
        let err = Date::try_new(i32::MAX, Month::January, 1).unwrap_err();
        assert!(matches!(err, DateError::YearOutOfRange { year, .. } if year == i64::from(i32::MAX)));
        let err = Date::from_ymd(Date::MAX.year(), 12, 32).unwrap_err();
        assert!(matches!(err, DateError::Overflow { .. }));
    }

    #[test]
    #[should_panic(expected = "invalid date")]
    fn new_panics_out_of_range() {
        Date::new(i32::MIN, Month::January, 1);
    }

    #[test]
    fn zero_value() {
        let zero = Date::default();
        assert!(zero.is_zero());
        assert_eq!(zero.year(), 1);
        assert_eq!(zero.month(), Month::January);
        assert_eq!(zero.day(), 1);
        assert!(!Date::new(1, Month::January, 2).is_zero());
        assert!(!Date::new(0, Month::January, 1).is_zero());
    }

    #[test]
    fn today_uses_clock_offset() {
        let east = FixedOffset::east_opt(10 * 3600).unwrap();
        let instant = east.with_ymd_and_hms(2021, 3, 7, 1, 30, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(ymd(Date::today_with(&clock)), (2021, 3, 7));

        // The same instant seen from UTC is still March 6.
        let clock = FixedClock::new(instant.with_timezone(&Utc));
        assert_eq!(ymd(Date::today_with(&clock)), (2021, 3, 6));
    }

    #[test]
    fn today_with_dyn_clock() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap(),
        ));
        assert_eq!(ymd(Date::today_with(clock.as_ref())), (2024, 2, 29));
    }

    #[test]
    fn comparison() {
        let a = Date::new(2021, Month::January, 1);
        let b = Date::new(2021, Month::January, 2);
        assert!(a.before(b));
        assert!(b.after(a));
        assert!(!a.equal(b));
        assert!(a.equal(Date::new(2020, Month::December, 32)));
        assert!(!a.after(a) && !a.before(a));
    }

    #[test]
    fn weekday_iso_numbering() {
        let sunday = Date::new(2023, Month::January, 1);
        assert_eq!(sunday.weekday(), Weekday::Sunday);
        assert_eq!(sunday.weekday().number(), 7);
        let monday = Date::new(2023, Month::January, 2);
        assert_eq!(monday.weekday(), Weekday::Monday);
        assert_eq!(monday.weekday().number(), 1);
        assert_eq!(Date::default().weekday(), Weekday::Monday);
    }

    #[test]
    fn iso_week_boundaries() {
        assert_eq!(Date::new(2021, Month::January, 1).week(), 53);
        assert_eq!(Date::new(2021, Month::January, 3).week(), 53);
        assert_eq!(Date::new(2021, Month::January, 4).week(), 1);
        assert_eq!(Date::new(2020, Month::December, 31).week(), 53);
        assert_eq!(Date::new(2019, Month::December, 30).iso_week(), (2020, 1));
        assert_eq!(Date::new(2023, Month::January, 1).iso_week(), (2022, 52));
    }

    #[test]
    fn year_day_and_lengths() {
        assert_eq!(Date::new(2021, Month::March, 1).year_day(), 60);
        assert_eq!(Date::new(2020, Month::March, 1).year_day(), 61);
        assert_eq!(Date::new(2020, Month::December, 31).year_day(), 366);
        assert!(Date::new(2020, Month::June, 1).is_leap_year());
        assert!(!Date::new(1900, Month::June, 1).is_leap_year());
        assert_eq!(Date::new(2020, Month::February, 1).days_in_month(), 29);
        assert_eq!(Date::new(2021, Month::February, 1).days_in_month(), 28);
    }

    #[test]
    fn add_days() {
        let date = Date::new(2020, Month::February, 28);
        assert_eq!(ymd(date + DAY), (2020, 2, 29));
        assert_eq!(ymd(date + DAY * 2), (2020, 3, 1));
        assert_eq!(ymd(date + WEEK), (2020, 3, 6));
        assert_eq!(ymd(date + Duration::days(-59)), (2019, 12, 31));
        assert_eq!(ymd(date - Duration::days(365)), (2019, 2, 28));
        let mut d = date;
        d += WEEK;
        d -= DAY;
        assert_eq!(ymd(d), (2020, 3, 5));
    }

    #[test]
    fn add_days_overflow() {
        let err = Date::MAX.checked_add(DAY).unwrap_err();
        assert_eq!(
            err,
            DateError::Overflow {
                date: Date::MAX,
                days: 1
            }
        );
        assert!(Date::MIN.checked_sub(DAY).is_err());
        assert!(Date::default().checked_add(Duration::days(i32::MAX)).is_err());
        assert!(Date::default().checked_add(Duration::days(i32::MIN)).is_err());
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn add_panics_on_overflow() {
        let _ = Date::MAX + DAY;
    }

    #[test]
    fn sub_dates() {
        let a = Date::new(2021, Month::March, 1);
        let b = Date::new(2020, Month::March, 1);
        assert_eq!(a - b, Duration::days(365));
        assert_eq!(b - a, Duration::days(-365));
        assert_eq!(a - a, Duration::ZERO);
        assert_eq!(b + (a - b), a);
    }

    #[test]
    fn add_date_rolls_over() {
        let jan31 = Date::new(2021, Month::January, 31);
        assert_eq!(ymd(jan31.add_date(0, 1, 0)), (2021, 3, 3));
        assert_eq!(ymd(Date::new(2020, Month::January, 31).add_date(0, 1, 0)), (2020, 3, 2));
        assert_eq!(ymd(Date::new(2020, Month::February, 29).add_date(1, 0, 0)), (2021, 3, 1));
        assert_eq!(ymd(jan31.add_date(0, -1, 0)), (2020, 12, 31));
        assert_eq!(ymd(jan31.add_date(0, 0, 1)), (2021, 2, 1));
        assert_eq!(ymd(jan31.add_date(-1, 13, -31)), (2021, 1, 31));
    }

    #[test]
    fn add_date_folds_months_before_days() {
        // Days are counted from the first of the folded month, not from
        // the rolled-over date.
        let date = Date::new(2021, Month::March, 31);
        assert_eq!(ymd(date.add_date(0, 1, -1)), (2021, 4, 30));
    }

    #[test]
    fn add_date_overflow() {
        assert!(Date::MAX.checked_add_date(1, 0, 0).is_err());
        assert!(Date::MIN.checked_add_date(0, -1, 0).is_err());
        assert!(Date::default().checked_add_date(i32::MAX, i32::MAX, i32::MAX).is_err());
    }

    #[test]
    fn time_is_utc_midnight() {
        let date = Date::new(2021, Month::March, 7);
        let time = date.time();
        assert_eq!(time, Utc.with_ymd_and_hms(2021, 3, 7, 0, 0, 0).unwrap());
        assert_eq!(Date::from(time), date);
        assert_eq!(Date::default().time().timestamp(), -62_135_596_800);
    }

    #[test]
    fn display_and_from_str() {
        let date = Date::new(2021, Month::March, 7);
        assert_eq!(date.to_string(), "2021-03-07");
        assert_eq!("2021-03-07".parse::<Date>().unwrap(), date);
        assert!("2021-3-7".parse::<Date>().is_err());
    }

    #[test]
    fn format_named_layout() {
        let date = Date::new(2021, Month::March, 7);
        assert_eq!(date.format(crate::layout::RFC1123), "Sun, 07 Mar 2021");
    }

    #[test]
    fn naive_date_conversions() {
        let naive = NaiveDate::from_ymd_opt(2021, 3, 7).unwrap();
        let date = Date::from(naive);
        assert_eq!(ymd(date), (2021, 3, 7));
        assert_eq!(NaiveDate::from(date), naive);
    }

    #[test]
    fn copy_and_hash() {
        fn assert_impl<T: Copy + std::hash::Hash + Send + Sync>() {}
        assert_impl::<Date>();
    }
}
