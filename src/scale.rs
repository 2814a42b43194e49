/*!
The reference-seconds scale: a single linear timeline that every other
operation in this crate reduces to.

A reference-seconds value is a signed `f64` counting seconds elapsed since
`0001-01-01T00:00:00` (the first instant of year 1 CE, proleptic
Gregorian, UTC). Using one linear scale as the pivot means normalization,
comparison and conversion all reduce to arithmetic on one number; no carry
logic is ever written across the six calendar fields directly.

Precision: every instant with an integer second and a reference value
within `±2^53` converts exactly in both directions. Fractional seconds are
subject to `f64` precision at the magnitude of the reference value (about
a microsecond of slack in the current era), exactly as a double-based
timeline implies.
*/

use crate::{civil, error::Error};

pub(crate) const SECONDS_PER_DAY: f64 = civil::time::SECONDS_PER_DAY as f64;

/// The reference-seconds value of `1970-01-01T00:00:00Z`.
pub(crate) const UNIX_EPOCH_SECONDS: f64 =
    (719_162 * civil::time::SECONDS_PER_DAY) as f64;

/// Converts (already defaulted) timestamp fields to reference seconds.
///
/// Out-of-range fields are welcome: the calendar adapter defines the carry
/// contract for months and days, and hours/minutes/seconds combine
/// linearly, so any excess or deficit lands on the scale itself. This
/// never fails; a non-finite second propagates into a non-finite result,
/// which `from_reference_seconds` then rejects.
pub(crate) fn to_reference_seconds(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: f64,
) -> f64 {
    let days = civil::date::to_reference_days(year, month, day);
    let seconds_of_day = civil::time::to_seconds_of_day(hour, minute, second);
    (days as f64) * SECONDS_PER_DAY + seconds_of_day
}

/// Converts a reference-seconds value back to canonical timestamp fields,
/// returned as `(year, month, day, hour, minute, second)`.
///
/// The value is split into a day count (floored toward negative infinity,
/// so instants before the epoch resolve to a non-negative seconds-of-day
/// remainder) and the remainder within the day.
///
/// # Errors
///
/// This returns an error when the value is NaN or infinite, since no
/// calendar position exists for such a value. Values beyond the `i64` day
/// horizon (far past the point where `f64` can separate individual
/// seconds) saturate to the horizon.
pub(crate) fn from_reference_seconds(
    value: f64,
) -> Result<(i64, i8, i8, i8, i8, f64), Error> {
    if !value.is_finite() {
        return Err(Error::non_finite("reference seconds", value));
    }
    let mut days = (value / SECONDS_PER_DAY).floor();
    // Past the i64 day horizon, f64 cannot separate days (let alone
    // seconds) anyway: saturate to the horizon at midnight rather than
    // extract a meaningless remainder.
    if days < (i64::MIN as f64) || days > (i64::MAX as f64) {
        let (year, month, day) = civil::date::from_reference_days(
            days as i64,
        );
        return Ok((year, month, day, 0, 0, 0.0));
    }
    let mut seconds_of_day = value - days * SECONDS_PER_DAY;
    // The division can misjudge an instant sitting a hair off a day
    // boundary, and near the horizon the product above is itself inexact.
    // Re-anchor the remainder; within ±2^53 each loop runs at most once
    // and the arithmetic is exact.
    while seconds_of_day < 0.0 {
        days -= 1.0;
        seconds_of_day += SECONDS_PER_DAY;
    }
    while seconds_of_day >= SECONDS_PER_DAY {
        days += 1.0;
        seconds_of_day -= SECONDS_PER_DAY;
    }
    let days = days as i64;
    let (year, month, day) = civil::date::from_reference_days(days);
    let (hour, minute, second) =
        civil::time::from_seconds_of_day(seconds_of_day);
    Ok((year, month, day, hour, minute, second))
}
