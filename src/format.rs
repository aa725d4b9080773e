//! Rendering dates against reference-pattern layouts.

use std::fmt::{self, Write};

use crate::date::Date;
use crate::layout::{self, Chunk, OffsetPrecision, Token};

/// Writes `date` to `w` as described by `layout`.
///
/// Time-of-day tokens render as midnight in UTC.
pub(crate) fn write_date<W: Write>(w: &mut W, date: Date, layout: &str) -> fmt::Result {
    for chunk in layout::chunks(layout) {
        match chunk {
            Chunk::Literal(text) => w.write_str(text)?,
            Chunk::Token(token, _) => write_token(w, date, token)?,
        }
    }
    Ok(())
}

fn write_token<W: Write>(w: &mut W, date: Date, token: Token) -> fmt::Result {
    match token {
        Token::LongMonth => w.write_str(date.month().name()),
        Token::Month => w.write_str(date.month().abbreviation()),
        Token::NumMonth => write!(w, "{}", date.month().number()),
        Token::ZeroMonth => write!(w, "{:02}", date.month().number()),
        Token::LongWeekday => w.write_str(date.weekday().name()),
        Token::Weekday => w.write_str(date.weekday().abbreviation()),
        Token::Day => write!(w, "{}", date.day()),
        Token::UnderDay => write!(w, "{:>2}", date.day()),
        Token::ZeroDay => write!(w, "{:02}", date.day()),
        Token::UnderYearDay => write!(w, "{:>3}", date.year_day()),
        Token::ZeroYearDay => write!(w, "{:03}", date.year_day()),
        Token::LongYear => write_long_year(w, date.year()),
        // Negative years keep their sign: -5 renders as "-05".
        Token::Year => write_signed(w, i64::from(date.year() % 100), 2),
        Token::Hour | Token::ZeroMinute | Token::ZeroSecond => w.write_str("00"),
        Token::Hour12 | Token::ZeroHour12 => w.write_str("12"),
        Token::Minute | Token::Second => w.write_str("0"),
        Token::UpperMeridiem => w.write_str("AM"),
        Token::LowerMeridiem => w.write_str("am"),
        Token::ZoneName => w.write_str("UTC"),
        Token::Offset {
            zulu,
            colons,
            precision,
        } => {
            if zulu {
                return w.write_char('Z');
            }
            w.write_str("+00")?;
            let fields = match precision {
                OffsetPrecision::Hours => 0,
                OffsetPrecision::Minutes => 1,
                OffsetPrecision::Seconds => 2,
            };
            for _ in 0..fields {
                if colons {
                    w.write_char(':')?;
                }
                w.write_str("00")?;
            }
            Ok(())
        }
        Token::Fraction {
            separator,
            digits,
            trim,
        } => {
            if trim {
                return Ok(());
            }
            w.write_char(char::from(separator))?;
            for _ in 0..digits {
                w.write_char('0')?;
            }
            Ok(())
        }
    }
}

/// Writes a year as four digits, or in the ISO 8601 expanded form (`+10000`,
/// `-0001`) when it falls outside `0..=9999`.
fn write_long_year<W: Write>(w: &mut W, year: i32) -> fmt::Result {
    if year > 9999 {
        w.write_char('+')?;
    }
    write_signed(w, i64::from(year), 4)
}

/// Writes `n` zero-padded to `width` digits, with the sign outside the
/// padding.
fn write_signed<W: Write>(w: &mut W, n: i64, width: usize) -> fmt::Result {
    if n < 0 {
        w.write_char('-')?;
    }
    write!(w, "{:0width$}", n.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ANSIC, RFC1123, RFC3339, RFC822, RFC850};
    use crate::month::Month;

    fn render(date: Date, layout: &str) -> String {
        let mut out = String::new();
        write_date(&mut out, date, layout).unwrap();
        out
    }

    #[test]
    fn reference_date_renders_its_own_layouts() {
        let reference = Date::new(2006, Month::January, 2);
        for layout in [ANSIC, RFC822, RFC850, RFC1123, RFC3339] {
            let expected = layout.replace("_2", " 2");
            assert_eq!(render(reference, layout), expected, "layout {layout:?}");
        }
    }

    #[test]
    fn named_layouts() {
        let date = Date::new(2021, Month::March, 7);
        assert_eq!(render(date, ANSIC), "Sun Mar  7 2021");
        assert_eq!(render(date, RFC822), "07 Mar 21");
        assert_eq!(render(date, RFC850), "Sunday, 07-Mar-21");
        assert_eq!(render(date, RFC1123), "Sun, 07 Mar 2021");
        assert_eq!(render(date, RFC3339), "2021-03-07");
    }

    #[test]
    fn two_digit_day_is_not_padded() {
        let date = Date::new(2021, Month::March, 17);
        assert_eq!(render(date, ANSIC), "Wed Mar 17 2021");
        assert_eq!(render(date, "2"), "17");
    }

    #[test]
    fn unpadded_numbers() {
        let date = Date::new(2021, Month::March, 7);
        assert_eq!(render(date, "1/2/06"), "3/7/21");
        assert_eq!(render(date, "January"), "March");
    }

    #[test]
    fn year_day() {
        let date = Date::new(2021, Month::January, 9);
        assert_eq!(render(date, "002"), "009");
        assert_eq!(render(date, "__2"), "  9");
        let date = Date::new(2020, Month::December, 31);
        assert_eq!(render(date, "002"), "366");
    }

    #[test]
    fn small_and_negative_years() {
        assert_eq!(render(Date::default(), RFC3339), "0001-01-01");
        assert_eq!(render(Date::new(-5, Month::June, 1), "2006"), "-0005");
        assert_eq!(render(Date::new(12345, Month::June, 1), "2006"), "+12345");
        assert_eq!(render(Date::new(9999, Month::June, 1), "2006"), "9999");
        assert_eq!(render(Date::new(-5, Month::June, 1), "06"), "-05");
        assert_eq!(render(Date::new(-2021, Month::June, 1), "06"), "-21");
        assert_eq!(render(Date::new(2005, Month::June, 1), "06"), "05");
    }

    #[test]
    fn expanded_years_at_the_range_edges() {
        assert_eq!(
            render(Date::MAX, RFC3339),
            format!("+{}-12-31", Date::MAX.year())
        );
        assert_eq!(
            render(Date::MIN, RFC3339),
            format!("{}-01-01", Date::MIN.year())
        );
    }

    #[test]
    fn lowercase_after_short_names_stays_literal() {
        let date = Date::new(2021, Month::March, 7);
        assert_eq!(render(date, "Janet 2006"), "Janet 2021");
        assert_eq!(render(date, "Monthly Jan"), "Monthly Mar");
        assert_eq!(render(date, "JanX Mon."), "MarX Sun.");
    }

    #[test]
    fn time_tokens_render_midnight_utc() {
        let date = Date::new(2021, Month::March, 7);
        assert_eq!(
            render(date, "2006-01-02 15:04:05.000 MST"),
            "2021-03-07 00:00:00.000 UTC"
        );
        assert_eq!(render(date, "3:4:5 PM pm"), "12:0:0 AM am");
        assert_eq!(render(date, "03:04:05.999Z07:00"), "12:00:00Z");
        assert_eq!(render(date, "-07:00 -0700 -07 -07:00:00"), "+00:00 +0000 +00 +00:00:00");
    }
}
