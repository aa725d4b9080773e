//! Reference-pattern layouts.
//!
//! A layout is an example rendering of the reference date
//!
//! ```text
//! Mon Jan 2 2006
//! ```
//!
//! (a Monday; time-of-day tokens refer to `15:04:05 -0700 MST`). Each
//! recognised fragment of that example becomes a field token; everything else
//! is literal text.
//!
//! | Token      | Meaning                               |
//! |------------|---------------------------------------|
//! | `January`  | full month name                       |
//! | `Jan`      | abbreviated month name                |
//! | `1`, `01`  | month number, zero-padded for `01`    |
//! | `Monday`   | full weekday name                     |
//! | `Mon`      | abbreviated weekday name              |
//! | `2`, `02`  | day of month, zero-padded for `02`    |
//! | `_2`       | day of month, space-padded            |
//! | `002`      | day of year, zero-padded              |
//! | `__2`      | day of year, space-padded             |
//! | `2006`     | four-digit year                       |
//! | `06`       | two-digit year                        |
//!
//! The time tokens `15`, `3`, `03`, `4`, `04`, `5`, `05`, `PM`, `pm`, `MST`,
//! the offsets `-0700`, `-07:00`, `-07`, `-070000`, `-07:00:00` and their
//! `Z` forms, and fractional seconds `.000`/`.999` (or with `,`) are also
//! recognised. A date renders them as UTC midnight and parsing discards them.

/// `Mon Jan _2 2006`
pub const ANSIC: &str = "Mon Jan _2 2006";

/// `02 Jan 06`
pub const RFC822: &str = "02 Jan 06";

/// `Monday, 02-Jan-06`
pub const RFC850: &str = "Monday, 02-Jan-06";

/// `Mon, 02 Jan 2006`
pub const RFC1123: &str = "Mon, 02 Jan 2006";

/// `2006-01-02`, the ISO 8601 calendar date and the canonical form.
pub const RFC3339: &str = "2006-01-02";

/// How many components a numeric UTC offset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum OffsetPrecision {
    Hours,
    Minutes,
    Seconds,
}

/// A field token recognised inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    LongMonth,
    Month,
    NumMonth,
    ZeroMonth,
    LongWeekday,
    Weekday,
    Day,
    UnderDay,
    ZeroDay,
    UnderYearDay,
    ZeroYearDay,
    LongYear,
    Year,
    Hour,
    Hour12,
    ZeroHour12,
    Minute,
    ZeroMinute,
    Second,
    ZeroSecond,
    UpperMeridiem,
    LowerMeridiem,
    ZoneName,
    Offset {
        /// `Z` prefix: UTC renders as `Z` rather than `+00...`.
        zulu: bool,
        colons: bool,
        precision: OffsetPrecision,
    },
    Fraction {
        separator: u8,
        digits: usize,
        /// `9` fill: trailing zeros (and the separator) are dropped.
        trim: bool,
    },
}

/// One piece of a tokenized layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Chunk<'a> {
    Literal(&'a str),
    /// A token together with the layout text it was recognised from.
    Token(Token, &'a str),
}

/// Splits a layout into literal text and tokens.
#[derive(Debug, Clone)]
pub(crate) struct Chunks<'a> {
    rest: &'a str,
}

/// Tokenizes `layout`.
pub(crate) fn chunks(layout: &str) -> Chunks<'_> {
    Chunks { rest: layout }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        match find_token(self.rest) {
            Some((0, token, len)) => {
                let (text, rest) = self.rest.split_at(len);
                self.rest = rest;
                Some(Chunk::Token(token, text))
            }
            Some((start, _, _)) => {
                let (literal, rest) = self.rest.split_at(start);
                self.rest = rest;
                Some(Chunk::Literal(literal))
            }
            None => {
                let literal = self.rest;
                self.rest = "";
                Some(Chunk::Literal(literal))
            }
        }
    }
}

/// Finds the first token in `layout`, returning its byte offset, the token
/// and the length of its text.
fn find_token(layout: &str) -> Option<(usize, Token, usize)> {
    let b = layout.as_bytes();
    for i in 0..b.len() {
        if let Some((token, len)) = token_at(&b[i..]) {
            return Some((i, token, len));
        }
    }
    None
}

/// Recognises a token at the very start of `b`.
fn token_at(b: &[u8]) -> Option<(Token, usize)> {
    use OffsetPrecision::{Hours, Minutes, Seconds};

    match b[0] {
        b'J' => {
            if b.starts_with(b"January") {
                Some((Token::LongMonth, 7))
            } else if b.starts_with(b"Jan") && !starts_word(&b[3..]) {
                Some((Token::Month, 3))
            } else {
                None
            }
        }
        b'M' => {
            if b.starts_with(b"Monday") {
                Some((Token::LongWeekday, 6))
            } else if b.starts_with(b"Mon") && !starts_word(&b[3..]) {
                Some((Token::Weekday, 3))
            } else if b.starts_with(b"MST") {
                Some((Token::ZoneName, 3))
            } else {
                None
            }
        }
        b'0' => match b.get(1) {
            Some(b'1') => Some((Token::ZeroMonth, 2)),
            Some(b'2') => Some((Token::ZeroDay, 2)),
            Some(b'3') => Some((Token::ZeroHour12, 2)),
            Some(b'4') => Some((Token::ZeroMinute, 2)),
            Some(b'5') => Some((Token::ZeroSecond, 2)),
            Some(b'6') => Some((Token::Year, 2)),
            Some(b'0') if b.get(2) == Some(&b'2') => Some((Token::ZeroYearDay, 3)),
            _ => None,
        },
        b'1' => {
            if b.starts_with(b"15") {
                Some((Token::Hour, 2))
            } else {
                Some((Token::NumMonth, 1))
            }
        }
        b'2' => {
            if b.starts_with(b"2006") {
                Some((Token::LongYear, 4))
            } else {
                Some((Token::Day, 1))
            }
        }
        // `_2006` is a literal underscore followed by a year.
        b'_' => {
            if b.starts_with(b"_2") && !b[1..].starts_with(b"2006") {
                Some((Token::UnderDay, 2))
            } else if b.starts_with(b"__2") {
                Some((Token::UnderYearDay, 3))
            } else {
                None
            }
        }
        b'3' => Some((Token::Hour12, 1)),
        b'4' => Some((Token::Minute, 1)),
        b'5' => Some((Token::Second, 1)),
        b'P' if b.get(1) == Some(&b'M') => Some((Token::UpperMeridiem, 2)),
        b'p' if b.get(1) == Some(&b'm') => Some((Token::LowerMeridiem, 2)),
        b'-' | b'Z' => {
            let zulu = b[0] == b'Z';
            let shapes: [(&[u8], bool, OffsetPrecision); 5] = [
                (b"070000", false, Seconds),
                (b"07:00:00", true, Seconds),
                (b"0700", false, Minutes),
                (b"07:00", true, Minutes),
                (b"07", false, Hours),
            ];
            shapes.iter().find_map(|&(shape, colons, precision)| {
                b[1..].starts_with(shape).then_some((
                    Token::Offset {
                        zulu,
                        colons,
                        precision,
                    },
                    1 + shape.len(),
                ))
            })
        }
        b'.' | b',' => {
            let fill = *b.get(1)?;
            if fill != b'0' && fill != b'9' {
                return None;
            }
            let digits = b[1..].iter().take_while(|&&c| c == fill).count();
            if b.get(1 + digits).is_some_and(u8::is_ascii_digit) {
                return None;
            }
            Some((
                Token::Fraction {
                    separator: b[0],
                    digits,
                    trim: fill == b'9',
                },
                1 + digits,
            ))
        }
        _ => None,
    }
}

/// Whether `b` continues a word: `Jan` and `Mon` followed by a lowercase
/// letter are plain text, as in "Janet" or "Monthly".
fn starts_word(b: &[u8]) -> bool {
    b.first().is_some_and(u8::is_ascii_lowercase)
}
