/// An error that can occur in this crate.
///
/// This crate follows the "one true error type" design: a single opaque
/// error for every fallible operation, with coarse predicates instead of a
/// public variant enum. There are only three ways an operation here can
/// fail:
///
/// * A field or reference-scale value is not a finite number, and so names
/// no position on the calendar. See [`Error::is_non_finite`].
/// * A field is outside its valid range during explicit validation. See
/// [`Error::is_range`].
/// * A string could not be parsed via the [`FromStr`](core::str::FromStr)
/// trait implementation. See [`Error::is_parse`]. (The primary parsing
/// entry point, [`Timestamp::from_iso8601`](crate::Timestamp::from_iso8601),
/// reports non-matches as `None` and never constructs this error.)
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Clone, Debug)]
enum ErrorKind {
    NonFinite(NonFiniteError),
    Range(RangeError),
    Parse(ParseError),
}

/// A numeric input that is NaN or infinite.
#[derive(Clone, Debug)]
struct NonFiniteError {
    what: &'static str,
    given: f64,
}

/// A field value that is outside its valid range.
#[derive(Clone, Debug)]
struct RangeError {
    what: &'static str,
    given: f64,
    min: f64,
    max: f64,
}

/// A failure to match the ISO 8601 grammar, for the `FromStr` surface.
#[derive(Clone, Debug)]
struct ParseError {
    msg: String,
}

impl Error {
    #[cold]
    #[inline(never)]
    pub(crate) fn non_finite(what: &'static str, given: f64) -> Error {
        Error { kind: ErrorKind::NonFinite(NonFiniteError { what, given }) }
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn range(
        what: &'static str,
        given: f64,
        min: f64,
        max: f64,
    ) -> Error {
        Error { kind: ErrorKind::Range(RangeError { what, given, min, max }) }
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn parse(msg: String) -> Error {
        Error { kind: ErrorKind::Parse(ParseError { msg }) }
    }

    /// Returns true when this error was caused by a NaN or infinite numeric
    /// input, which cannot be placed on the reference-seconds scale.
    pub fn is_non_finite(&self) -> bool {
        matches!(self.kind, ErrorKind::NonFinite(_))
    }

    /// Returns true when this error was caused by a field value outside its
    /// valid range during validation.
    pub fn is_range(&self) -> bool {
        matches!(self.kind, ErrorKind::Range(_))
    }

    /// Returns true when this error came from the `FromStr` implementation
    /// failing to match the ISO 8601 grammar.
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse(_))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            ErrorKind::NonFinite(ref err) => write!(
                f,
                "parameter '{what}' with value {given} is not a finite \
                 number, so it has no position in time",
                what = err.what,
                given = err.given,
            ),
            ErrorKind::Range(ref err) => write!(
                f,
                "parameter '{what}' with value {given} is not in the \
                 required range of {min}..={max}",
                what = err.what,
                given = err.given,
                min = err.min,
                max = err.max,
            ),
            ErrorKind::Parse(ref err) => f.write_str(&err.msg),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::range("month", 13.0, 1.0, 12.0);
        assert_eq!(
            err.to_string(),
            "parameter 'month' with value 13 is not in the \
             required range of 1..=12",
        );
        assert!(err.is_range());

        let err = Error::non_finite("second", f64::NAN);
        assert_eq!(
            err.to_string(),
            "parameter 'second' with value NaN is not a finite number, \
             so it has no position in time",
        );
        assert!(err.is_non_finite());
        assert!(!err.is_range());
    }
}
