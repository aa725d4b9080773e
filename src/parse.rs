//! Parsing dates against reference-pattern layouts.

use std::iter::Peekable;

use tracing::debug;

use crate::date::Date;
use crate::error::ParseError;
use crate::layout::{self, Chunk, Chunks, OffsetPrecision, Token};
use crate::month::{is_leap_year, Month};
use crate::weekday::Weekday;

/// Why a single token failed.
enum Failure {
    /// The value does not have the token's shape.
    Bad,
    /// The token's shape matched but the named field is out of range.
    Range(&'static str),
}

/// Fields collected while walking the layout. Missing fields default to
/// year 0, January, day 1.
#[derive(Debug, Default, Clone, Copy)]
struct Fields {
    year: i32,
    month: Option<u8>,
    day: Option<u8>,
    year_day: Option<u16>,
}

/// Parses `value` against `layout`.
pub(crate) fn parse(layout: &str, value: &str) -> Result<Date, ParseError> {
    let result = Parser::new(layout, value).parse();
    if let Err(ref err) = result {
        debug!(layout, error = %err, "failed to parse date");
    }
    result
}

struct Parser<'l, 'v> {
    layout: &'l str,
    value: &'v str,
    rest: &'v str,
    fields: Fields,
}

impl<'l, 'v> Parser<'l, 'v> {
    fn new(layout: &'l str, value: &'v str) -> Self {
        Self {
            layout,
            value,
            rest: value,
            fields: Fields::default(),
        }
    }

    fn parse(mut self) -> Result<Date, ParseError> {
        let mut chunks = layout::chunks(self.layout).peekable();
        while let Some(chunk) = chunks.next() {
            match chunk {
                Chunk::Literal(text) => self.skip_literal(text)?,
                Chunk::Token(token, text) => {
                    let start = self.rest;
                    self.parse_token(token, &mut chunks)
                        .map_err(|failure| self.fail(failure, text, start))?;
                }
            }
        }
        if !self.rest.is_empty() {
            return Err(ParseError::ExtraText {
                value: self.value.to_string(),
                extra: self.rest.to_string(),
            });
        }
        self.finish()
    }

    fn fail(&self, failure: Failure, element: &str, rest: &str) -> ParseError {
        match failure {
            Failure::Bad => self.mismatch(element, rest),
            Failure::Range(field) => self.out_of_range(field),
        }
    }

    fn mismatch(&self, element: &str, rest: &str) -> ParseError {
        ParseError::Mismatch {
            layout: self.layout.to_string(),
            value: self.value.to_string(),
            element: element.to_string(),
            rest: rest.to_string(),
        }
    }

    fn out_of_range(&self, field: &'static str) -> ParseError {
        ParseError::OutOfRange {
            value: self.value.to_string(),
            field,
        }
    }

    /// Matches literal layout text. A run of spaces in the layout matches
    /// any run of spaces in the value.
    fn skip_literal(&mut self, literal: &str) -> Result<(), ParseError> {
        let mut prefix = literal;
        let mut value = self.rest;
        while !prefix.is_empty() {
            if prefix.starts_with(' ') {
                if !value.is_empty() && !value.starts_with(' ') {
                    return Err(self.mismatch(literal, value));
                }
                prefix = prefix.trim_start_matches(' ');
                value = value.trim_start_matches(' ');
                continue;
            }
            let (run, tail) = prefix.split_at(prefix.find(' ').unwrap_or(prefix.len()));
            value = match value.strip_prefix(run) {
                Some(after) => after,
                None => return Err(self.mismatch(literal, value)),
            };
            prefix = tail;
        }
        self.rest = value;
        Ok(())
    }

    fn parse_token(&mut self, token: Token, chunks: &mut Peekable<Chunks<'_>>) -> Result<(), Failure> {
        match token {
            Token::LongYear => {
                self.fields.year = self.long_year()?;
            }
            Token::Year => {
                let year = self.fixed_digits(2)? as i32;
                self.fields.year = if year >= 69 { 1900 + year } else { 2000 + year };
            }
            Token::LongMonth => {
                let month = self.lookup(&Month::ALL, Month::name)?;
                self.fields.month = Some(month.number());
            }
            Token::Month => {
                let month = self.lookup(&Month::ALL, Month::abbreviation)?;
                self.fields.month = Some(month.number());
            }
            Token::NumMonth | Token::ZeroMonth => {
                let month = self.number(token == Token::ZeroMonth)?;
                if !(1..=12).contains(&month) {
                    return Err(Failure::Range("month"));
                }
                self.fields.month = Some(month as u8);
            }
            // The weekday is checked for shape only.
            Token::LongWeekday => {
                self.lookup(&Weekday::ALL, Weekday::name)?;
            }
            Token::Weekday => {
                self.lookup(&Weekday::ALL, Weekday::abbreviation)?;
            }
            Token::Day | Token::UnderDay | Token::ZeroDay => {
                if token == Token::UnderDay {
                    self.skip_spaces(1);
                }
                let day = self.number(token == Token::ZeroDay)?;
                if day > 31 {
                    return Err(Failure::Range("day"));
                }
                self.fields.day = Some(day as u8);
            }
            Token::UnderYearDay | Token::ZeroYearDay => {
                if token == Token::UnderYearDay {
                    self.skip_spaces(2);
                }
                let year_day = self.number3(token == Token::ZeroYearDay)?;
                if !(1..=366).contains(&year_day) {
                    return Err(Failure::Range("day-of-year"));
                }
                self.fields.year_day = Some(year_day as u16);
            }
            Token::Hour => self.ranged(false, 23, "hour")?,
            Token::Hour12 | Token::ZeroHour12 => {
                self.ranged(token == Token::ZeroHour12, 12, "hour")?
            }
            Token::Minute | Token::ZeroMinute => {
                self.ranged(token == Token::ZeroMinute, 59, "minute")?
            }
            Token::Second | Token::ZeroSecond => {
                self.ranged(token == Token::ZeroSecond, 59, "second")?;
                // Fractional seconds may follow even when the layout has no
                // fraction token for them.
                let fraction_next = matches!(
                    chunks.peek(),
                    Some(Chunk::Token(Token::Fraction { .. }, _))
                );
                if !fraction_next {
                    self.optional_fraction();
                }
            }
            Token::UpperMeridiem => self.one_of(&["AM", "PM"])?,
            Token::LowerMeridiem => self.one_of(&["am", "pm"])?,
            Token::ZoneName => {
                let len = zone_name_len(self.rest).ok_or(Failure::Bad)?;
                self.advance(len);
            }
            Token::Offset {
                zulu,
                colons,
                precision,
            } => self.offset(zulu, colons, precision)?,
            Token::Fraction { digits, trim, .. } => {
                if trim {
                    self.optional_fraction();
                } else {
                    self.fixed_fraction(digits)?;
                }
            }
        }
        Ok(())
    }

    /// Resolves the collected fields into a date.
    fn finish(self) -> Result<Date, ParseError> {
        let Fields {
            year,
            mut month,
            mut day,
            year_day,
        } = self.fields;

        if let Some(year_day) = year_day {
            let (m, d) = month_day_of_year(year, year_day)
                .ok_or_else(|| self.out_of_range("day-of-year"))?;
            if month.is_some_and(|month| month != m.number()) {
                return Err(self.out_of_range("day-of-year"));
            }
            if day.is_some_and(|day| day != d) {
                return Err(self.out_of_range("day-of-year"));
            }
            month = Some(m.number());
            day = Some(d);
        }

        let month = month.and_then(Month::from_number).unwrap_or(Month::January);
        let day = day.unwrap_or(1);
        if day < 1 || day > month.days_in(year) {
            return Err(self.out_of_range("day"));
        }
        Date::try_new(year, month, i32::from(day)).map_err(|_| self.out_of_range("year"))
    }

    fn advance(&mut self, len: usize) {
        self.rest = &self.rest[len..];
    }

    fn skip_spaces(&mut self, max: usize) {
        for _ in 0..max {
            match self.rest.strip_prefix(' ') {
                Some(after) => self.rest = after,
                None => break,
            }
        }
    }

    /// Takes exactly `n` ASCII digits.
    fn fixed_digits(&mut self, n: usize) -> Result<u32, Failure> {
        let rest = self.rest;
        let digits = rest.as_bytes().get(..n).ok_or(Failure::Bad)?;
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(Failure::Bad);
        }
        self.advance(n);
        Ok(digits.iter().fold(0, |acc, &d| acc * 10 + u32::from(d - b'0')))
    }

    /// Takes a year: exactly four digits, or a sign followed by four or more
    /// digits in the ISO 8601 expanded form.
    fn long_year(&mut self) -> Result<i32, Failure> {
        let negative = match self.rest.as_bytes().first() {
            Some(b'+') => false,
            Some(b'-') => true,
            _ => return Ok(self.fixed_digits(4)? as i32),
        };
        let digits = self.rest[1..].bytes().take_while(u8::is_ascii_digit).count();
        if digits < 4 {
            return Err(Failure::Bad);
        }
        self.advance(1);
        let text = &self.rest[..digits];
        self.advance(digits);
        let year: i32 = text.parse().map_err(|_| Failure::Range("year"))?;
        Ok(if negative { -year } else { year })
    }

    /// Takes a one- or two-digit number, or exactly two digits if `fixed`.
    fn number(&mut self, fixed: bool) -> Result<u32, Failure> {
        let rest = self.rest;
        let b = rest.as_bytes();
        if !b.first().is_some_and(u8::is_ascii_digit) {
            return Err(Failure::Bad);
        }
        if !b.get(1).is_some_and(u8::is_ascii_digit) {
            if fixed {
                return Err(Failure::Bad);
            }
            self.advance(1);
            return Ok(u32::from(b[0] - b'0'));
        }
        self.advance(2);
        Ok(u32::from(b[0] - b'0') * 10 + u32::from(b[1] - b'0'))
    }

    /// Takes a one- to three-digit number, or exactly three digits if
    /// `fixed`.
    fn number3(&mut self, fixed: bool) -> Result<u32, Failure> {
        let rest = self.rest;
        let len = rest.bytes().take(3).take_while(u8::is_ascii_digit).count();
        if len == 0 || (fixed && len != 3) {
            return Err(Failure::Bad);
        }
        self.fixed_digits(len)
    }

    /// Takes a number and checks it against `0..=max`, discarding it.
    fn ranged(&mut self, fixed: bool, max: u32, field: &'static str) -> Result<(), Failure> {
        if self.number(fixed)? > max {
            return Err(Failure::Range(field));
        }
        Ok(())
    }

    /// Takes the first entry of `table` whose name prefixes the value,
    /// ignoring ASCII case.
    fn lookup<T: Copy>(&mut self, table: &[T], name: fn(T) -> &'static str) -> Result<T, Failure> {
        let rest = self.rest;
        for &item in table {
            let n = name(item);
            if rest.get(..n.len()).is_some_and(|p| p.eq_ignore_ascii_case(n)) {
                self.advance(n.len());
                return Ok(item);
            }
        }
        Err(Failure::Bad)
    }

    fn one_of(&mut self, options: &[&str]) -> Result<(), Failure> {
        let rest = self.rest;
        let found = options.iter().find(|o| rest.starts_with(**o)).ok_or(Failure::Bad)?;
        self.advance(found.len());
        Ok(())
    }

    fn offset(&mut self, zulu: bool, colons: bool, precision: OffsetPrecision) -> Result<(), Failure> {
        if zulu && self.rest.starts_with('Z') {
            self.advance(1);
            return Ok(());
        }
        if !(self.rest.starts_with('+') || self.rest.starts_with('-')) {
            return Err(Failure::Bad);
        }
        self.advance(1);
        if self.fixed_digits(2)? > 24 {
            return Err(Failure::Range("time zone offset hour"));
        }
        let fields: [(OffsetPrecision, &'static str); 2] = [
            (OffsetPrecision::Minutes, "time zone offset minute"),
            (OffsetPrecision::Seconds, "time zone offset second"),
        ];
        for (needed, field) in fields {
            if precision < needed {
                break;
            }
            if colons {
                self.one_of(&[":"])?;
            }
            if self.fixed_digits(2)? > 60 {
                return Err(Failure::Range(field));
            }
        }
        Ok(())
    }

    /// Takes a separator followed by exactly `digits` digits.
    fn fixed_fraction(&mut self, digits: usize) -> Result<(), Failure> {
        if !(self.rest.starts_with('.') || self.rest.starts_with(',')) {
            return Err(Failure::Bad);
        }
        let rest = self.rest;
        let available = rest[1..].bytes().take_while(u8::is_ascii_digit).count();
        if available < digits {
            return Err(Failure::Bad);
        }
        self.advance(1 + digits);
        Ok(())
    }

    /// Takes a separator and all following digits, if present.
    fn optional_fraction(&mut self) {
        let rest = self.rest;
        let b = rest.as_bytes();
        let separated = matches!(b.first(), Some(b'.' | b','));
        if !separated || !b.get(1).is_some_and(u8::is_ascii_digit) {
            return;
        }
        let digits = b[1..].iter().take_while(|d| d.is_ascii_digit()).count();
        self.advance(1 + digits);
    }
}

/// Returns the length of a time zone abbreviation at the start of `s`.
///
/// Accepts `UTC`, `GMT` with an optional signed hour, three uppercase
/// letters, or four or five uppercase letters ending in `T`.
fn zone_name_len(s: &str) -> Option<usize> {
    if s.starts_with("ChST") || s.starts_with("MeST") {
        return Some(4);
    }
    if s.starts_with("UTC") {
        return Some(3);
    }
    if let Some(after) = s.strip_prefix("GMT") {
        let b = after.as_bytes();
        if matches!(b.first(), Some(b'+' | b'-')) {
            let digits = b[1..].iter().take(2).take_while(|d| d.is_ascii_digit()).count();
            if digits > 0 {
                return Some(3 + 1 + digits);
            }
        }
        return Some(3);
    }
    let upper = s.bytes().take(6).take_while(u8::is_ascii_uppercase).count();
    match upper {
        3 => Some(3),
        4 | 5 if s.as_bytes()[upper - 1] == b'T' => Some(upper),
        _ => None,
    }
}

/// Resolves a day-of-year in `year` to its month and day.
fn month_day_of_year(year: i32, year_day: u16) -> Option<(Month, u8)> {
    let mut remaining = year_day;
    for month in Month::ALL {
        let len = u16::from(month.days_in(year));
        if remaining <= len {
            return Some((month, remaining as u8));
        }
        remaining -= len;
    }
    debug_assert!(year_day > 365 + u16::from(is_leap_year(year)));
    None
}
