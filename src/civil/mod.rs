/*!
Civil (wall clock) calendar and time-of-day primitives.

These are the adapters the reference-seconds scale composes: the calendar
side maps a `{year, month, day}` triple to a day count relative to the
reference epoch (`0001-01-01`), and the time side maps an
`{hour, minute, second}` triple to a count of seconds within a day. All of
the cross-field carry behavior in this crate falls out of those two linear
scales; nothing here carries one field into another by hand.
*/

pub use self::date::{days_in_month, is_leap_year, Month};

pub(crate) mod date;
pub(crate) mod time;

/// The era corresponding to a particular year.
///
/// The BCE era corresponds to years less than or equal to `0`, while the CE
/// era corresponds to years greater than `0`.
///
/// This crate numbers years astronomically: the year `1 BCE` is year `0`,
/// the year `2 BCE` is year `-1` and so on. To get a year in its era
/// format, use [`Timestamp::era_year`](crate::Timestamp::era_year).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Era {
    /// The "before common era" era.
    ///
    /// This corresponds to all years less than or equal to `0`.
    BCE,
    /// The "common era" era.
    ///
    /// This corresponds to all years greater than `0`.
    CE,
}
