/*!
The time-of-day half of the civil adapters: conversions between an
`{hour, minute, second}` triple and a count of seconds within a day.

Unlike the calendar side, time-of-day is purely linear, so out-of-range
fields need no special carry handling here: they simply produce a
seconds-of-day value outside `0..86400`, and the reference-seconds scale
rolls the excess into the day count.
*/

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Converts an `{hour, minute, second}` triple to seconds within a day.
///
/// The fields may be fractional (seconds), negative or arbitrarily large;
/// the result is simply their linear combination. A non-finite second
/// yields a non-finite result.
#[inline]
pub(crate) fn to_seconds_of_day(hour: i64, minute: i64, second: f64) -> f64 {
    (hour as f64) * (SECONDS_PER_HOUR as f64)
        + (minute as f64) * (SECONDS_PER_MINUTE as f64)
        + second
}

/// Converts a seconds-of-day count in `0..86400` back to its
/// `{hour, minute, second}` triple.
///
/// The split is exact: the integral part of the input is divided with
/// integer arithmetic and the fractional part is reattached to the second
/// unchanged, so no precision is lost and the second is always strictly
/// less than 60.
#[inline]
pub(crate) fn from_seconds_of_day(seconds: f64) -> (i8, i8, f64) {
    debug_assert!(
        (0.0..(SECONDS_PER_DAY as f64)).contains(&seconds),
        "seconds-of-day {seconds} out of range",
    );
    let whole = seconds as i64;
    // Exact: `whole <= seconds < whole + 1`, so the subtraction loses
    // nothing (Sterbenz).
    let fraction = seconds - (whole as f64);
    let hour = whole / SECONDS_PER_HOUR;
    let minute = (whole % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let second = (whole % SECONDS_PER_MINUTE) as f64 + fraction;
    (hour as i8, minute as i8, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits() {
        assert_eq!(from_seconds_of_day(0.0), (0, 0, 0.0));
        assert_eq!(from_seconds_of_day(1.5), (0, 0, 1.5));
        assert_eq!(from_seconds_of_day(60.0), (0, 1, 0.0));
        assert_eq!(from_seconds_of_day(3_661.25), (1, 1, 1.25));
        assert_eq!(from_seconds_of_day(86_399.0), (23, 59, 59.0));
        assert_eq!(from_seconds_of_day(86_399.5), (23, 59, 59.5));
    }

    #[test]
    fn linear_combination() {
        assert_eq!(to_seconds_of_day(0, 0, 0.0), 0.0);
        assert_eq!(to_seconds_of_day(13, 15, 30.0), 47_730.0);
        // Out-of-range and negative fields combine linearly.
        assert_eq!(to_seconds_of_day(25, 0, 0.0), 90_000.0);
        assert_eq!(to_seconds_of_day(-1, 30, 0.0), -1_800.0);
        assert_eq!(to_seconds_of_day(0, 0, 61.5), 61.5);
    }

    #[test]
    fn all_whole_seconds_roundtrip() {
        for sod in 0..SECONDS_PER_DAY {
            let (hour, minute, second) = from_seconds_of_day(sod as f64);
            assert!((0..=23).contains(&hour));
            assert!((0..=59).contains(&minute));
            assert!((0.0..60.0).contains(&second));
            let got = to_seconds_of_day(
                i64::from(hour),
                i64::from(minute),
                second,
            );
            assert_eq!(got, sod as f64);
        }
    }
}
