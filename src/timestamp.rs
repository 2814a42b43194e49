use std::time::SystemTime;

use crate::{
    civil::{self, Era},
    error::Error,
    scale,
};

/// An instant in civil time: a date and clock reading in the proleptic
/// Gregorian calendar, always in UTC.
///
/// A `Timestamp` is immutable and always canonical: the month is in
/// `1..=12`, the day fits its month and year, the hour is in `0..=23`, the
/// minute in `0..=59` and the second satisfies `0.0 <= s < 60.0` (it may
/// carry a fractional part). Years use astronomical numbering, so year `0`
/// is 1 BCE, year `-1` is 2 BCE and so on; the calendar itself has no year
/// zero.
///
/// # Construction
///
/// Every `Timestamp` comes from one of three places: the normalizing
/// constructor [`Timestamp::new`] (fed by [`TimestampParts`]), the ISO 8601
/// parser [`Timestamp::from_iso8601`], or the validating `const`
/// constructor [`Timestamp::constant`]. The normalizing path accepts
/// out-of-range fields and carries the excess through the reference-seconds
/// scale:
///
/// ```
/// use zulu::{Timestamp, TimestampParts};
///
/// // Month 13 rolls over into January of the next year.
/// let ts = Timestamp::new(TimestampParts::new().year(2021).month(13))?;
/// assert_eq!(ts, Timestamp::constant(2022, 1, 1, 0, 0, 0.0));
/// # Ok::<(), zulu::Error>(())
/// ```
///
/// # Comparisons
///
/// `Timestamp` implements `Eq` and `Ord`; a timestamp is less than another
/// when it names an earlier instant. For not-yet-normalized field sets,
/// compare [`TimestampParts`] values instead.
///
/// # Default value
///
/// The default is [`Timestamp::EPOCH`], the value every field defaults to:
/// `0001-01-01T00:00:00Z`.
#[derive(Clone, Copy)]
pub struct Timestamp {
    year: i64,
    month: i8,
    day: i8,
    hour: i8,
    minute: i8,
    second: f64,
}

impl Timestamp {
    /// The reference epoch: `0001-01-01T00:00:00Z`, the instant at
    /// reference seconds `0`.
    ///
    /// This is guaranteed to be equivalent to `Timestamp::default()`.
    pub const EPOCH: Timestamp = Timestamp::constant(1, 1, 1, 0, 0, 0.0);

    /// The Unix epoch: `1970-01-01T00:00:00Z`.
    pub const UNIX_EPOCH: Timestamp =
        Timestamp::constant(1970, 1, 1, 0, 0, 0.0);

    /// Creates a canonical `Timestamp` from the given parts, normalizing
    /// out-of-range fields.
    ///
    /// Omitted fields default to their minimal valid value (year 1,
    /// month 1, day 1, midnight). Fields outside their nominal range are
    /// not an error: the parts are projected onto the reference-seconds
    /// scale and back, so any excess or deficit carries into the
    /// neighboring fields (seconds into minutes, hours into days, months
    /// into years, and borrows in the other direction).
    ///
    /// # Errors
    ///
    /// This fails if and only if the second is NaN or infinite, since such
    /// a value has no position on the reference scale.
    ///
    /// # Example
    ///
    /// ```
    /// use zulu::{Timestamp, TimestampParts};
    ///
    /// // Day 0 of March borrows the last day of February.
    /// let ts = Timestamp::new(
    ///     TimestampParts::new().year(2020).month(3).day(0),
    /// )?;
    /// assert_eq!(ts, Timestamp::constant(2020, 2, 29, 0, 0, 0.0));
    /// # Ok::<(), zulu::Error>(())
    /// ```
    #[inline]
    pub fn new(parts: TimestampParts) -> Result<Timestamp, Error> {
        Timestamp::from_reference_seconds(parts.to_reference_seconds())
    }

    /// Creates a `Timestamp` from already-canonical fields in a `const`
    /// context.
    ///
    /// # Panics
    ///
    /// This panics when the fields do not name a valid instant, i.e. when
    /// [`TimestampParts::is_valid`] would return false for them. Unlike
    /// [`Timestamp::new`], no normalization is performed.
    ///
    /// # Example
    ///
    /// ```
    /// use zulu::Timestamp;
    ///
    /// let ts = Timestamp::constant(2024, 2, 29, 13, 15, 30.5);
    /// assert_eq!(ts.day(), 29);
    /// assert_eq!(ts.second(), 30.5);
    /// ```
    #[inline]
    pub const fn constant(
        year: i64,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: f64,
    ) -> Timestamp {
        if month < 1 || month > 12 {
            panic!("invalid month");
        }
        if day < 1 || day > civil::date::days_in_month_of(year, month) {
            panic!("invalid day");
        }
        if hour < 0 || hour > 23 {
            panic!("invalid hour");
        }
        if minute < 0 || minute > 59 {
            panic!("invalid minute");
        }
        if !(second >= 0.0 && second < 60.0) {
            panic!("invalid second");
        }
        // Collapses -0.0, which would otherwise be a second canonical
        // encoding of an exact minute.
        let second = second + 0.0;
        Timestamp { year, month, day, hour, minute, second }
    }

    /// Returns the current time from the system clock.
    ///
    /// Sub-second precision is folded into the fractional second.
    #[inline]
    pub fn now() -> Timestamp {
        Timestamp::from(SystemTime::now())
    }

    /// Converts a reference-seconds value (seconds since
    /// `0001-01-01T00:00:00Z`, negative for earlier instants) to a
    /// canonical `Timestamp`.
    ///
    /// The value is split with floored division, so instants before the
    /// epoch still resolve to a non-negative time of day:
    ///
    /// ```
    /// use zulu::Timestamp;
    ///
    /// let ts = Timestamp::from_reference_seconds(-1.0)?;
    /// assert_eq!(ts, Timestamp::constant(0, 12, 31, 23, 59, 59.0));
    /// # Ok::<(), zulu::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// This fails if and only if the value is NaN or infinite. Values so
    /// large that `f64` has long lost second-level precision saturate at
    /// the `i64` day-count horizon.
    #[inline]
    pub fn from_reference_seconds(value: f64) -> Result<Timestamp, Error> {
        let (year, month, day, hour, minute, second) =
            scale::from_reference_seconds(value)?;
        Ok(Timestamp { year, month, day, hour, minute, second })
    }

    /// Returns the number of seconds between the reference epoch
    /// (`0001-01-01T00:00:00Z`) and this timestamp.
    ///
    /// For timestamps with an integer second and a reference value within
    /// `±2^53`, this is exact and [`Timestamp::from_reference_seconds`]
    /// inverts it losslessly. Fractional seconds are subject to `f64`
    /// precision at the magnitude of the result.
    #[inline]
    pub fn to_reference_seconds(&self) -> f64 {
        scale::to_reference_seconds(
            self.year,
            i64::from(self.month),
            i64::from(self.day),
            i64::from(self.hour),
            i64::from(self.minute),
            self.second,
        )
    }

    /// Parses a timestamp from ISO 8601 text.
    ///
    /// Both the extended (`1994-11-05T13:15:30Z`) and basic
    /// (`19941105T131530Z`) forms are accepted, along with a fractional
    /// second (introduced by `.` or `,`) and a UTC offset (`Z` or
    /// `±HH:MM`/`±HHMM`). An offset is subtracted out during
    /// normalization, so the result is always UTC.
    ///
    /// Text that does not match the grammar is an expected, non-exceptional
    /// outcome and yields `None` rather than an error. (When the `logging`
    /// feature is enabled, the reason is logged at trace level.)
    ///
    /// # Example
    ///
    /// ```
    /// use zulu::Timestamp;
    ///
    /// let ts = Timestamp::from_iso8601("1994-11-05T08:15:30-05:00").unwrap();
    /// assert_eq!(ts, Timestamp::constant(1994, 11, 5, 13, 15, 30.0));
    /// assert_eq!(Timestamp::from_iso8601("not-a-date"), None);
    /// ```
    #[inline]
    pub fn from_iso8601(input: &str) -> Option<Timestamp> {
        match crate::fmt::iso8601::parse(input) {
            Ok(ts) => Some(ts),
            Err(err) => {
                trace!("invalid ISO 8601 timestamp {input:?}: {err}");
                // Without the `logging` feature the reason is discarded.
                let _ = err;
                None
            }
        }
    }

    /// Formats this timestamp as extended-form ISO 8601 text, always UTC.
    ///
    /// The year is zero-padded to at least four digits (keeping its sign
    /// for years outside `0..=9999`), and the second is truncated toward
    /// zero to a whole second; fractional seconds are dropped, never
    /// rounded.
    ///
    /// This is also available via the `Display` trait implementation.
    ///
    /// # Example
    ///
    /// ```
    /// use zulu::Timestamp;
    ///
    /// let ts = Timestamp::constant(1994, 11, 5, 13, 15, 30.75);
    /// assert_eq!(ts.to_iso8601(), "1994-11-05T13:15:30Z");
    /// ```
    #[inline]
    pub fn to_iso8601(&self) -> String {
        self.to_string()
    }

    /// Returns the year. Negative and zero years denote BCE years in
    /// astronomical numbering; see [`Timestamp::era_year`].
    #[inline]
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month, in `1..=12`.
    #[inline]
    pub fn month(&self) -> i8 {
        self.month
    }

    /// Returns the day of the month, in `1..=31`.
    #[inline]
    pub fn day(&self) -> i8 {
        self.day
    }

    /// Returns the hour, in `0..=23`.
    #[inline]
    pub fn hour(&self) -> i8 {
        self.hour
    }

    /// Returns the minute, in `0..=59`.
    #[inline]
    pub fn minute(&self) -> i8 {
        self.minute
    }

    /// Returns the second, satisfying `0.0 <= s < 60.0`. The fractional
    /// part carries any sub-second precision.
    #[inline]
    pub fn second(&self) -> f64 {
        self.second
    }

    /// Returns the year and its era.
    ///
    /// # Example
    ///
    /// ```
    /// use zulu::{civil::Era, Timestamp};
    ///
    /// assert_eq!(
    ///     Timestamp::constant(0, 3, 1, 0, 0, 0.0).era_year(),
    ///     (1, Era::BCE),
    /// );
    /// assert_eq!(
    ///     Timestamp::constant(2024, 3, 1, 0, 0, 0.0).era_year(),
    ///     (2024, Era::CE),
    /// );
    /// ```
    #[inline]
    pub fn era_year(&self) -> (i64, Era) {
        if self.year > 0 {
            (self.year, Era::CE)
        } else {
            (1_i64.saturating_sub(self.year), Era::BCE)
        }
    }
}

/// Returns the earliest of the given timestamps, or `None` when the
/// sequence is empty.
///
/// For reducing exactly two values, `Ord` is implemented, so
/// `a.min(b)` does the same thing.
#[inline]
pub fn earliest<I: IntoIterator<Item = Timestamp>>(
    timestamps: I,
) -> Option<Timestamp> {
    timestamps.into_iter().min()
}

/// Returns the latest of the given timestamps, or `None` when the
/// sequence is empty.
///
/// For reducing exactly two values, `Ord` is implemented, so
/// `a.max(b)` does the same thing.
#[inline]
pub fn latest<I: IntoIterator<Item = Timestamp>>(
    timestamps: I,
) -> Option<Timestamp> {
    timestamps.into_iter().max()
}

impl Eq for Timestamp {}

impl PartialEq for Timestamp {
    #[inline]
    fn eq(&self, other: &Timestamp) -> bool {
        self.cmp(other) == core::cmp::Ordering::Equal
    }
}

impl Ord for Timestamp {
    #[inline]
    fn cmp(&self, other: &Timestamp) -> core::cmp::Ordering {
        // Canonical fields order lexicographically exactly as the
        // reference scale does, without a trip through f64 day math.
        (self.year, self.month, self.day, self.hour, self.minute)
            .cmp(&(other.year, other.month, other.day, other.hour, other.minute))
            .then_with(|| self.second.total_cmp(&other.second))
    }
}

impl PartialOrd for Timestamp {
    #[inline]
    fn partial_cmp(&self, other: &Timestamp) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Timestamp {
    #[inline]
    fn default() -> Timestamp {
        Timestamp::EPOCH
    }
}

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        crate::fmt::iso8601::print(self, f, false)
    }
}

impl core::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        crate::fmt::iso8601::print(self, f, true)
    }
}

impl core::str::FromStr for Timestamp {
    type Err = Error;

    fn from_str(input: &str) -> Result<Timestamp, Error> {
        crate::fmt::iso8601::parse(input)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Timestamp {
        let value = match time.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(elapsed) => {
                scale::UNIX_EPOCH_SECONDS + elapsed.as_secs_f64()
            }
            Err(err) => {
                scale::UNIX_EPOCH_SECONDS - err.duration().as_secs_f64()
            }
        };
        Timestamp::from_reference_seconds(value)
            .expect("system clock reports a finite time")
    }
}

/// A bag of optional timestamp fields: the input shape for constructing,
/// converting and comparing timestamps.
///
/// Any omitted field defaults to its minimal valid value: year `1`,
/// month `1`, day `1` and midnight (`00:00:00`). Present fields may be
/// outside their nominal ranges; [`Timestamp::new`] normalizes them by
/// carry, and [`TimestampParts::validate`] checks them when lenience is
/// not wanted.
///
/// ```
/// use zulu::{Timestamp, TimestampParts};
///
/// let parts = TimestampParts::new().year(1994).month(11).day(5);
/// let ts = parts.to_timestamp()?;
/// assert_eq!(ts.to_iso8601(), "1994-11-05T00:00:00Z");
/// # Ok::<(), zulu::Error>(())
/// ```
///
/// # Comparisons
///
/// `TimestampParts` implements `PartialEq` and `PartialOrd` over the
/// reference-seconds scale, so unnormalized field bags compare by the
/// instant they denote. The comparison is partial: when a side has a NaN
/// second, no ordering exists, `partial_cmp` returns `None` and every
/// operator comparison is false.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimestampParts {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    hour: Option<i64>,
    minute: Option<i64>,
    second: Option<f64>,
}

impl TimestampParts {
    /// Returns a bag with every field omitted, denoting the reference
    /// epoch.
    #[inline]
    pub const fn new() -> TimestampParts {
        TimestampParts {
            year: None,
            month: None,
            day: None,
            hour: None,
            minute: None,
            second: None,
        }
    }

    /// Sets the year. Any `i64` is in range; non-positive years denote BCE
    /// years in astronomical numbering.
    #[inline]
    pub const fn year(self, year: i64) -> TimestampParts {
        TimestampParts { year: Some(year), ..self }
    }

    /// Sets the month. Nominally `1..=12`; out-of-range values carry into
    /// the year on normalization.
    #[inline]
    pub const fn month(self, month: i64) -> TimestampParts {
        TimestampParts { month: Some(month), ..self }
    }

    /// Sets the day. Nominally `1..=31`; out-of-range values carry into
    /// the month on normalization (day `0` is the last day of the previous
    /// month).
    #[inline]
    pub const fn day(self, day: i64) -> TimestampParts {
        TimestampParts { day: Some(day), ..self }
    }

    /// Sets the hour. Nominally `0..=23`.
    #[inline]
    pub const fn hour(self, hour: i64) -> TimestampParts {
        TimestampParts { hour: Some(hour), ..self }
    }

    /// Sets the minute. Nominally `0..=59`.
    #[inline]
    pub const fn minute(self, minute: i64) -> TimestampParts {
        TimestampParts { minute: Some(minute), ..self }
    }

    /// Sets the second, which may carry a fractional part. Nominally
    /// `0.0 <= s < 60.0`.
    #[inline]
    pub const fn second(self, second: f64) -> TimestampParts {
        TimestampParts { second: Some(second), ..self }
    }

    /// Normalizes this bag into a canonical [`Timestamp`].
    ///
    /// This is the builder-style spelling of [`Timestamp::new`].
    #[inline]
    pub fn to_timestamp(self) -> Result<Timestamp, Error> {
        Timestamp::new(self)
    }

    /// Projects this bag onto the reference-seconds scale, after applying
    /// field defaults.
    ///
    /// This never fails: a NaN or infinite second simply produces a
    /// non-finite result, which downstream conversions reject.
    #[inline]
    pub fn to_reference_seconds(&self) -> f64 {
        scale::to_reference_seconds(
            self.year.unwrap_or(1),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0.0),
        )
    }

    /// Returns true when every (defaulted) field is within its valid
    /// range: month in `1..=12`, day in `1..=days_in_month`, hour in
    /// `0..=23`, minute in `0..=59` and second finite with
    /// `0.0 <= s < 60.0`. Any year is valid.
    ///
    /// This is the semantic half of validation; the shape half (fields
    /// present and numeric) is discharged by the type system.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns an error describing the first out-of-range (defaulted)
    /// field, if any.
    ///
    /// This is a guard for system boundaries. Construction via
    /// [`Timestamp::new`] never calls it: normalization accepts what
    /// validation rejects.
    ///
    /// # Example
    ///
    /// ```
    /// use zulu::TimestampParts;
    ///
    /// assert!(TimestampParts::new().month(11).day(31).validate().is_err());
    /// assert!(TimestampParts::new().month(12).day(31).validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        let year = self.year.unwrap_or(1);
        let month = self.month.unwrap_or(1);
        if !(1..=12).contains(&month) {
            return Err(Error::range("month", month as f64, 1.0, 12.0));
        }
        let days_in_month =
            civil::date::days_in_month_of(year, month as i8);
        let day = self.day.unwrap_or(1);
        if !(1..=i64::from(days_in_month)).contains(&day) {
            return Err(Error::range(
                "day",
                day as f64,
                1.0,
                f64::from(days_in_month),
            ));
        }
        let hour = self.hour.unwrap_or(0);
        if !(0..=23).contains(&hour) {
            return Err(Error::range("hour", hour as f64, 0.0, 23.0));
        }
        let minute = self.minute.unwrap_or(0);
        if !(0..=59).contains(&minute) {
            return Err(Error::range("minute", minute as f64, 0.0, 59.0));
        }
        let second = self.second.unwrap_or(0.0);
        if !(second >= 0.0 && second < 60.0) {
            return Err(Error::range("second", second, 0.0, 59.0));
        }
        Ok(())
    }
}

impl From<Timestamp> for TimestampParts {
    #[inline]
    fn from(ts: Timestamp) -> TimestampParts {
        TimestampParts {
            year: Some(ts.year),
            month: Some(i64::from(ts.month)),
            day: Some(i64::from(ts.day)),
            hour: Some(i64::from(ts.hour)),
            minute: Some(i64::from(ts.minute)),
            second: Some(ts.second),
        }
    }
}

impl PartialEq for TimestampParts {
    /// Two bags are equal when they denote the same instant on the
    /// reference scale, regardless of how their fields spell it. A bag
    /// with a NaN second equals nothing, itself included.
    #[inline]
    fn eq(&self, other: &TimestampParts) -> bool {
        self.to_reference_seconds() == other.to_reference_seconds()
    }
}

impl PartialOrd for TimestampParts {
    /// Orders bags by the instant they denote. Returns `None` exactly when
    /// one side reduces to NaN and no ordering exists.
    #[inline]
    fn partial_cmp(
        &self,
        other: &TimestampParts,
    ) -> Option<core::cmp::Ordering> {
        self.to_reference_seconds()
            .partial_cmp(&other.to_reference_seconds())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Timestamp {
    fn arbitrary(g: &mut quickcheck::Gen) -> Timestamp {
        // Roughly ±130,000 years of whole seconds around the epoch, plus a
        // dyadic fraction so that round trips stay exact.
        let seconds = i64::arbitrary(g) % 4_000_000_000_000;
        let fraction = [0.0, 0.25, 0.5, 0.75][usize::arbitrary(g) % 4];
        Timestamp::from_reference_seconds((seconds as f64) + fraction)
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_epoch() {
        let ts = Timestamp::new(TimestampParts::new()).unwrap();
        assert_eq!(ts, Timestamp::EPOCH);
        assert_eq!(ts, Timestamp::default());
        assert_eq!(ts.to_reference_seconds(), 0.0);
    }

    #[test]
    fn month_carry() {
        let got =
            Timestamp::new(TimestampParts::new().year(2021).month(13).day(1))
                .unwrap();
        assert_eq!(got, Timestamp::constant(2022, 1, 1, 0, 0, 0.0));

        let got =
            Timestamp::new(TimestampParts::new().year(2021).month(0).day(1))
                .unwrap();
        assert_eq!(got, Timestamp::constant(2020, 12, 1, 0, 0, 0.0));
    }

    #[test]
    fn day_borrow_respects_leap_years() {
        let got =
            Timestamp::new(TimestampParts::new().year(2021).month(3).day(0))
                .unwrap();
        assert_eq!(got, Timestamp::constant(2021, 2, 28, 0, 0, 0.0));

        let got =
            Timestamp::new(TimestampParts::new().year(2020).month(3).day(0))
                .unwrap();
        assert_eq!(got, Timestamp::constant(2020, 2, 29, 0, 0, 0.0));
    }

    #[test]
    fn time_carry() {
        let got = Timestamp::new(
            TimestampParts::new().year(2021).hour(-1).second(61.5),
        )
        .unwrap();
        assert_eq!(got, Timestamp::constant(2020, 12, 31, 23, 1, 1.5));

        let got = Timestamp::new(TimestampParts::new().hour(24)).unwrap();
        assert_eq!(got, Timestamp::constant(1, 1, 2, 0, 0, 0.0));
    }

    #[test]
    fn fractional_second_is_preserved() {
        let got =
            Timestamp::new(TimestampParts::new().second(27.245)).unwrap();
        assert_eq!(got.second(), 27.245);
    }

    #[test]
    fn non_finite_second_is_rejected() {
        for second in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Timestamp::new(TimestampParts::new().second(second))
                .unwrap_err();
            assert!(err.is_non_finite(), "for second {second}");
        }
    }

    #[test]
    fn no_year_zero() {
        // Year 0 is 1 BCE and year -1 is 2 BCE, so year 0 is later.
        let bce1 = TimestampParts::new().year(0);
        let bce2 = TimestampParts::new().year(-1);
        assert_eq!(
            bce1.partial_cmp(&bce2),
            Some(core::cmp::Ordering::Greater),
        );
        assert!(bce1 > bce2);

        assert_eq!(
            Timestamp::constant(0, 1, 1, 0, 0, 0.0).era_year(),
            (1, Era::BCE),
        );
        assert_eq!(
            Timestamp::constant(-1, 1, 1, 0, 0, 0.0).era_year(),
            (2, Era::BCE),
        );
    }

    #[test]
    fn parts_comparisons() {
        let early = TimestampParts::new().year(1994).month(11).day(5);
        let late = TimestampParts::new().year(1994).month(11).day(6);
        assert!(early < late);
        assert!(early <= late);
        assert!(late > early);
        assert!(late >= early);
        assert!(early != late);

        // Unnormalized spellings of the same instant are equal.
        let rolled = TimestampParts::new().year(1994).month(10).day(36);
        assert!(early == rolled);

        // NaN admits no ordering at all.
        let poisoned = TimestampParts::new().second(f64::NAN);
        assert_eq!(poisoned.partial_cmp(&early), None);
        assert!(!(poisoned < early));
        assert!(!(poisoned >= early));
        assert!(poisoned != poisoned);
    }

    #[test]
    fn earliest_and_latest() {
        let a = Timestamp::constant(2024, 3, 10, 5, 34, 45.0);
        let b = Timestamp::constant(2024, 3, 10, 5, 34, 45.5);
        let c = Timestamp::constant(1994, 11, 5, 13, 15, 30.0);
        assert_eq!(earliest([a, b, c]), Some(c));
        assert_eq!(latest([a, b, c]), Some(b));
        assert_eq!(earliest([]), None);
        assert_eq!(latest([]), None);
        assert_eq!(a.min(c), c);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn validation() {
        assert!(TimestampParts::new().is_valid());
        assert!(TimestampParts::new()
            .year(2024)
            .month(2)
            .day(29)
            .is_valid());
        assert!(!TimestampParts::new()
            .year(2023)
            .month(2)
            .day(29)
            .is_valid());
        assert!(TimestampParts::new().second(59.999).is_valid());
        assert!(!TimestampParts::new().second(60.0).is_valid());
        assert!(!TimestampParts::new().second(f64::NAN).is_valid());
        assert!(!TimestampParts::new().month(13).is_valid());
        assert!(!TimestampParts::new().day(0).is_valid());
        assert!(!TimestampParts::new().hour(24).is_valid());
        assert!(!TimestampParts::new().minute(60).is_valid());
        // Any year at all is fine.
        assert!(TimestampParts::new().year(-123_456).is_valid());

        let err =
            TimestampParts::new().month(13).validate().unwrap_err();
        assert!(err.is_range());
        // Normalization happily accepts what validation rejects.
        assert!(TimestampParts::new().month(13).to_timestamp().is_ok());
    }

    #[test]
    fn now_is_in_the_current_era() {
        let ts = Timestamp::now();
        assert!(ts.year() >= 2020);
        assert_eq!(ts.era_year().1, Era::CE);
    }

    #[test]
    fn system_time_conversion() {
        use std::time::Duration;

        let ts = Timestamp::from(SystemTime::UNIX_EPOCH);
        assert_eq!(ts, Timestamp::UNIX_EPOCH);

        let ts = Timestamp::from(
            SystemTime::UNIX_EPOCH + Duration::from_millis(1_500),
        );
        assert_eq!(ts, Timestamp::constant(1970, 1, 1, 0, 0, 1.5));

        let ts = Timestamp::from(
            SystemTime::UNIX_EPOCH - Duration::from_secs(1),
        );
        assert_eq!(ts, Timestamp::constant(1969, 12, 31, 23, 59, 59.0));
    }

    quickcheck::quickcheck! {
        fn prop_reference_seconds_roundtrip(ts: Timestamp) -> bool {
            Timestamp::from_reference_seconds(ts.to_reference_seconds())
                .unwrap()
                == ts
        }

        fn prop_normalization_is_idempotent(ts: Timestamp) -> bool {
            Timestamp::new(TimestampParts::from(ts)).unwrap() == ts
        }

        fn prop_ordering_is_total(a: Timestamp, b: Timestamp) -> bool {
            let lt = a < b;
            let eq = a == b;
            let gt = a > b;
            (lt as u8) + (eq as u8) + (gt as u8) == 1
        }

        fn prop_parts_ordering_matches(a: Timestamp, b: Timestamp) -> bool {
            let pa = TimestampParts::from(a);
            let pb = TimestampParts::from(b);
            pa.partial_cmp(&pb) == Some(a.cmp(&b))
        }
    }
}
