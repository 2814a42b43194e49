/*!
Parsing and printing of timestamps as ISO 8601 text.

The parser accepts both the extended (`1994-11-05T13:15:30Z`) and basic
(`19941105T131530Z`) forms, with each separator independently optional, an
optional fractional second introduced by `.` or `,`, and a mandatory UTC
designator (`Z`/`z`) or signed `±HH:MM`/`±HHMM` offset. Offsets are
subtracted out during normalization, so every parsed value is UTC.

The digit groups are matched by shape, not by range: `1994-13-05` parses
and the month carries into the year, exactly as it would through
[`Timestamp::new`]. In the basic (unseparated) date form, the trailing
four digits are the month and day and everything before them is the year.

The printer emits the extended form only, always with a trailing `Z`,
truncating the second toward zero unless a fractional rendering is
explicitly requested (the `Debug` impl and Serde serialization want the
fraction; the civil interchange format drops it).
*/

use crate::{error::Error, Timestamp, TimestampParts};

macro_rules! err {
    ($($tt:tt)*) => {{
        ParseError(format!($($tt)*))
    }}
}

/// An error describing why a parse failed.
///
/// This never escapes the crate: the public parsing entry points report
/// non-matches as `None` (or wrap the message for `FromStr`), since
/// malformed text is an expected outcome, not an exceptional one.
#[derive(Debug)]
struct ParseError(String);

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the remaining unparsed input,
/// so parsing functions compose by threading the slice through.
struct Parsed<'i, V> {
    value: V,
    input: &'i [u8],
}

/// Parses an ISO 8601 timestamp, requiring the entire input to match.
pub(crate) fn parse(input: &str) -> Result<Timestamp, Error> {
    parse_timestamp(input.as_bytes()).map_err(|err| {
        Error::parse(format!(
            "failed to parse {input:?} as an ISO 8601 timestamp: {err}"
        ))
    })
}

fn parse_timestamp(input: &[u8]) -> Result<Timestamp, ParseError> {
    let Parsed { value: (year, month, day), input } = parse_date(input)?;
    let input = parse_delimiter(input)?;
    let Parsed { value: hour, input } = parse_two_digits(input, "hour")?;
    let input = skip_separator(input, b':');
    let Parsed { value: minute, input } = parse_two_digits(input, "minute")?;
    let input = skip_separator(input, b':');
    let Parsed { value: second, input } = parse_two_digits(input, "second")?;
    let Parsed { value: fraction, input } = parse_fraction(input)?;
    let Parsed { value: (offset_hour, offset_minute), input } =
        parse_offset(input)?;
    if !input.is_empty() {
        return Err(err!(
            "unparsed input {:?} remains after the UTC offset",
            String::from_utf8_lossy(input),
        ));
    }
    // Subtracting the offset may drive the hour or minute out of range;
    // normalization carries the difference into the other fields.
    let parts = TimestampParts::new()
        .year(year)
        .month(month)
        .day(day)
        .hour(hour - offset_hour)
        .minute(minute - offset_minute)
        .second((second as f64) + fraction);
    Timestamp::new(parts)
        .map_err(|err| err!("parsed fields failed to normalize: {err}"))
}

// A signed year of four or more digits, then the month and day as two
// digits each. In the extended form a `-` follows the year and another may
// follow the month; in the basic form the digits run together and the
// trailing four are the month and day.
fn parse_date(
    input: &[u8],
) -> Result<Parsed<'_, (i64, i64, i64)>, ParseError> {
    let (sign, input) = match input.first() {
        Some(&b'+') => (1, &input[1..]),
        Some(&b'-') => (-1, &input[1..]),
        _ => (1, input),
    };
    let (digits, rest) = take_digits(input);
    if rest.first() == Some(&b'-') {
        if digits.len() < 4 {
            return Err(err!(
                "expected at least four year digits, but found {}",
                digits.len(),
            ));
        }
        let year = sign * parse_integer(digits, "year")?;
        let input = &rest[1..];
        let Parsed { value: month, input } =
            parse_two_digits(input, "month")?;
        let input = skip_separator(input, b'-');
        let Parsed { value: day, input } = parse_two_digits(input, "day")?;
        Ok(Parsed { value: (year, month, day), input })
    } else {
        // Basic form: no separator anywhere in the date, so the year must
        // leave exactly four digits behind for the month and day.
        if digits.len() < 8 {
            return Err(err!(
                "expected a date in extended (YYYY-MM-DD) or basic \
                 (YYYYMMDD) form, but found {} digits and no separator",
                digits.len(),
            ));
        }
        let (year, monthday) = digits.split_at(digits.len() - 4);
        let year = sign * parse_integer(year, "year")?;
        let month = parse_integer(&monthday[..2], "month")?;
        let day = parse_integer(&monthday[2..], "day")?;
        Ok(Parsed { value: (year, month, day), input: rest })
    }
}

fn parse_delimiter(input: &[u8]) -> Result<&[u8], ParseError> {
    match input.first() {
        Some(&b'T') | Some(&b't') | Some(&b' ') => Ok(&input[1..]),
        Some(&byte) => Err(err!(
            "expected date/time delimiter after the date, but found {:?}",
            char::from(byte),
        )),
        None => Err(err!(
            "expected date/time delimiter after the date, but found end \
             of input",
        )),
    }
}

// Z (or z), or a sign followed by two offset-hour digits and two
// offset-minute digits with an optional `:` between. The minutes take the
// sign of the hours.
fn parse_offset(
    input: &[u8],
) -> Result<Parsed<'_, (i64, i64)>, ParseError> {
    let sign = match input.first() {
        Some(&b'Z') | Some(&b'z') => {
            return Ok(Parsed { value: (0, 0), input: &input[1..] });
        }
        Some(&b'+') => 1,
        Some(&b'-') => -1,
        Some(&byte) => {
            return Err(err!(
                "expected UTC designator 'Z' or signed offset, but found \
                 {:?}",
                char::from(byte),
            ));
        }
        None => {
            return Err(err!(
                "expected UTC designator 'Z' or signed offset, but found \
                 end of input",
            ));
        }
    };
    let input = &input[1..];
    let Parsed { value: hour, input } =
        parse_two_digits(input, "offset hour")?;
    let input = skip_separator(input, b':');
    let Parsed { value: minute, input } =
        parse_two_digits(input, "offset minute")?;
    Ok(Parsed { value: (sign * hour, sign * minute), input })
}

// An optional fraction of a second: `.` or `,`, then one or more digits.
fn parse_fraction(input: &[u8]) -> Result<Parsed<'_, f64>, ParseError> {
    match input.first() {
        Some(&b'.') | Some(&b',') => {}
        _ => return Ok(Parsed { value: 0.0, input }),
    }
    let (digits, rest) = take_digits(&input[1..]);
    if digits.is_empty() {
        return Err(err!(
            "expected at least one digit in the fractional second",
        ));
    }
    // Fifteen digits is already finer than f64 resolves; the rest only
    // shift the decimal point.
    let significant = &digits[..digits.len().min(15)];
    let mut numerator = 0i64;
    for &byte in significant {
        numerator = numerator * 10 + i64::from(byte - b'0');
    }
    let value = (numerator as f64) / 10f64.powi(significant.len() as i32);
    Ok(Parsed { value, input: rest })
}

fn parse_two_digits<'i>(
    input: &'i [u8],
    what: &'static str,
) -> Result<Parsed<'i, i64>, ParseError> {
    if input.len() < 2 {
        return Err(err!("expected two digit {what}, but found end of input"));
    }
    let (digits, input) = input.split_at(2);
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(err!(
            "failed to parse {:?} as {what} (a two digit integer)",
            String::from_utf8_lossy(digits),
        ));
    }
    let value = parse_integer(digits, what)?;
    Ok(Parsed { value, input })
}

fn parse_integer(
    digits: &[u8],
    what: &'static str,
) -> Result<i64, ParseError> {
    let mut value = 0i64;
    for &byte in digits {
        debug_assert!(byte.is_ascii_digit());
        value = value
            .checked_mul(10)
            .and_then(|value| value.checked_add(i64::from(byte - b'0')))
            .ok_or_else(|| err!("number in {what} is too big"))?;
    }
    Ok(value)
}

fn take_digits(input: &[u8]) -> (&[u8], &[u8]) {
    let end = input
        .iter()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

fn skip_separator(input: &[u8], separator: u8) -> &[u8] {
    if input.first() == Some(&separator) {
        &input[1..]
    } else {
        input
    }
}

/// Prints the given timestamp in extended ISO 8601 form with a trailing
/// `Z`.
///
/// The second is truncated toward zero; when `with_fraction` is set and
/// the fraction is non-zero, it is rendered after the truncated second
/// instead of being dropped.
pub(crate) fn print<W: core::fmt::Write>(
    ts: &Timestamp,
    wtr: &mut W,
    with_fraction: bool,
) -> core::fmt::Result {
    if ts.year() < 0 {
        write!(wtr, "-{:04}", ts.year().unsigned_abs())?;
    } else {
        write!(wtr, "{:04}", ts.year())?;
    }
    let whole_second = ts.second() as i64;
    write!(
        wtr,
        "-{:02}-{:02}T{:02}:{:02}:{:02}",
        ts.month(),
        ts.day(),
        ts.hour(),
        ts.minute(),
        whole_second,
    )?;
    if with_fraction {
        let fraction = ts.second() - (whole_second as f64);
        if fraction > 0.0 {
            // Lean on the shortest-roundtrip float rendering: "0.245"
            // becomes ".245".
            let digits = fraction.to_string();
            wtr.write_str(&digits[1..])?;
        }
    }
    wtr.write_str("Z")
}
