/*!
The calendar half of the civil adapters: conversions between a proleptic
Gregorian `{year, month, day}` triple and a count of days relative to the
reference epoch, along with month and leap-year queries.

The reference epoch is `0001-01-01`, i.e. day `0` is the first day of year
1 CE. Years use astronomical numbering: year `0` is 1 BCE, year `-1` is
2 BCE and so on. There is no year zero in the calendar being modeled, only
in the numbering.

Day-count conversions use Euclidean affine functions. Algorithms are taken
from Howard Hinnant's date algorithms:
<http://howardhinnant.github.io/date_algorithms.html>
*/

use crate::error::Error;

/// The number of days in a full 400 year Gregorian cycle.
const DAYS_IN_ERA: i128 = 146_097;

/// Days from `0000-03-01` to the reference epoch `0001-01-01`.
///
/// The affine day-count formulas below work in eras that begin on March 1
/// of a year divisible by 400, so their output needs shifting by the length
/// of March through December of year 0.
const EPOCH_SHIFT: i128 = 306;

/// A month in the Gregorian calendar.
///
/// This is the canonical set of named month constants. Use
/// [`Month::to_number`] and [`Month::from_number`] to move between a
/// `Month` and its conventional `1..=12` numbering.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(i8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Returns this month's number in the range `1..=12`.
    #[inline]
    pub const fn to_number(self) -> i8 {
        self as i8
    }

    /// Converts a number in the range `1..=12` to its corresponding month.
    ///
    /// # Errors
    ///
    /// This returns an error when the given number is outside of `1..=12`.
    ///
    /// # Example
    ///
    /// ```
    /// use zulu::civil::Month;
    ///
    /// assert_eq!(Month::from_number(2).unwrap(), Month::February);
    /// assert!(Month::from_number(13).is_err());
    /// ```
    #[inline]
    pub fn from_number(number: i8) -> Result<Month, Error> {
        match number {
            1 => Ok(Month::January),
            2 => Ok(Month::February),
            3 => Ok(Month::March),
            4 => Ok(Month::April),
            5 => Ok(Month::May),
            6 => Ok(Month::June),
            7 => Ok(Month::July),
            8 => Ok(Month::August),
            9 => Ok(Month::September),
            10 => Ok(Month::October),
            11 => Ok(Month::November),
            12 => Ok(Month::December),
            _ => Err(Error::range("month", f64::from(number), 1.0, 12.0)),
        }
    }
}

/// Returns true if and only if the given year is a leap year.
///
/// A leap year is a year with 366 days. Typical years have 365 days.
///
/// Years use astronomical numbering, so this correctly reports leap years
/// before 1 CE. For example, year `0` (1 BCE) is a leap year.
///
/// # Example
///
/// ```
/// use zulu::civil::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2023));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

/// Returns the number of days in the given year and month.
///
/// This correctly returns `29` when the year is a leap year and the month
/// is February.
#[inline]
pub const fn days_in_month(year: i64, month: Month) -> i8 {
    days_in_month_of(year, month as i8)
}

/// Like `days_in_month`, but over a raw month number.
///
/// When the given month is outside of `1..=12`, this returns `0`.
#[inline]
pub(crate) const fn days_in_month_of(year: i64, month: i8) -> i8 {
    if month < 1 || month > 12 {
        return 0;
    }
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ month >> 3)
    }
}

/// Converts a `{year, month, day}` triple to a count of days relative to
/// the reference epoch.
///
/// The triple need not name a valid calendar date. A month outside of
/// `1..=12` carries into the year, and the day is an affine offset from
/// the first of the (carried) month, so `day == 0` names the last day of
/// the previous month and `day == 32` of January names the first of
/// February. This is the carry contract the reference-seconds scale
/// composes with. The arithmetic is exact for every `i64` input.
pub(crate) const fn to_reference_days(
    year: i64,
    month: i64,
    day: i64,
) -> i128 {
    // Carry out-of-range months into the year before switching to the
    // March-based year the affine formulas want. The carry happens in i128
    // so that even `i64::MIN` survives the `month - 1`.
    let month = month as i128;
    let year = year as i128 + (month - 1).div_euclid(12);
    let month = (month - 1).rem_euclid(12) + 1;
    let day = day as i128;

    let year = if month <= 2 { year - 1 } else { year };
    let month = if month > 2 { month - 3 } else { month + 9 };
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let day_of_year = (153 * month + 2) / 5 + day - 1;
    let day_of_era =
        year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_ERA + day_of_era - EPOCH_SHIFT
}

/// Converts a count of days relative to the reference epoch back to its
/// `{year, month, day}` triple. The result is always a valid date.
pub(crate) const fn from_reference_days(days: i64) -> (i64, i8, i8) {
    let days = days as i128 + EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_IN_ERA);
    let day_of_era = days.rem_euclid(DAYS_IN_ERA);
    let year_of_era = (day_of_era - day_of_era / 1_460 + day_of_era / 36_524
        - day_of_era / (DAYS_IN_ERA - 1))
        / 365;
    let day_of_year = day_of_era
        - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month = (day_of_year * 5 + 2) / 153;
    let day = day_of_year - (153 * month + 2) / 5 + 1;
    let month = if month < 10 { month + 3 } else { month - 9 };
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year as i64, month as i8, day as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(1800));
        assert!(!is_leap_year(1700));
        assert!(is_leap_year(1600));
        assert!(is_leap_year(0));
        assert!(!is_leap_year(-1));
        assert!(!is_leap_year(-2));
        assert!(!is_leap_year(-3));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(!is_leap_year(-200));
        assert!(!is_leap_year(-300));
        assert!(is_leap_year(400));
        assert!(!is_leap_year(9999));
        assert!(!is_leap_year(-9999));
    }

    #[test]
    fn t_days_in_month() {
        assert_eq!(31, days_in_month(2023, Month::January));
        assert_eq!(28, days_in_month(2023, Month::February));
        assert_eq!(29, days_in_month(2024, Month::February));
        assert_eq!(31, days_in_month(2024, Month::March));
        assert_eq!(30, days_in_month(2024, Month::April));
        assert_eq!(31, days_in_month(2024, Month::May));
        assert_eq!(30, days_in_month(2024, Month::June));
        assert_eq!(31, days_in_month(2024, Month::July));
        assert_eq!(31, days_in_month(2024, Month::August));
        assert_eq!(30, days_in_month(2024, Month::September));
        assert_eq!(31, days_in_month(2024, Month::October));
        assert_eq!(30, days_in_month(2024, Month::November));
        assert_eq!(31, days_in_month(2024, Month::December));
        assert_eq!(28, days_in_month(-9999, Month::February));
        assert_eq!(29, days_in_month(0, Month::February));
    }

    #[test]
    fn t_month_numbers() {
        for n in 1..=12 {
            assert_eq!(Month::from_number(n).unwrap().to_number(), n);
        }
        assert!(Month::from_number(0).is_err());
        assert!(Month::from_number(13).is_err());
        assert!(Month::from_number(-1).is_err());
    }

    #[test]
    fn reference_day_fixpoints() {
        assert_eq!(to_reference_days(1, 1, 1), 0);
        assert_eq!(from_reference_days(0), (1, 1, 1));

        // The Unix epoch.
        assert_eq!(to_reference_days(1970, 1, 1), 719_162);
        assert_eq!(from_reference_days(719_162), (1970, 1, 1));

        // The day before the reference epoch is the last day of 1 BCE.
        assert_eq!(from_reference_days(-1), (0, 12, 31));
        // 1 BCE is a leap year, so it has 366 days.
        assert_eq!(from_reference_days(-366), (0, 1, 1));
        assert_eq!(from_reference_days(-367), (-1, 12, 31));
    }

    #[test]
    fn month_and_day_carry() {
        // Month 13 rolls into January of the next year.
        assert_eq!(
            to_reference_days(2021, 13, 1),
            to_reference_days(2022, 1, 1),
        );
        // Month 0 borrows December of the previous year.
        assert_eq!(
            to_reference_days(2021, 0, 1),
            to_reference_days(2020, 12, 1),
        );
        // Day 0 of March is the last day of February.
        assert_eq!(
            to_reference_days(2021, 3, 0),
            to_reference_days(2021, 2, 28),
        );
        assert_eq!(
            to_reference_days(2020, 3, 0),
            to_reference_days(2020, 2, 29),
        );
        // Day 32 of January is the first of February.
        assert_eq!(
            to_reference_days(2024, 1, 32),
            to_reference_days(2024, 2, 1),
        );
    }

    #[test]
    fn all_days_to_date_roundtrip() {
        // Covers a couple of full Gregorian cycles around the epoch,
        // including negative (BCE) day counts.
        for rd in -300_000..=300_000 {
            let (year, month, day) = from_reference_days(rd);
            let got =
                to_reference_days(year, i64::from(month), i64::from(day));
            assert_eq!(
                i128::from(rd),
                got,
                "for date {year:04}-{month:02}-{day:02}",
            );
        }
    }

    #[test]
    fn all_date_to_days_roundtrip() {
        for year in -401..=2401 {
            for month in 1..=12 {
                let month = Month::from_number(month).unwrap();
                for day in 1..=days_in_month(year, month) {
                    let rd = to_reference_days(
                        year,
                        i64::from(month.to_number()),
                        i64::from(day),
                    );
                    let got = from_reference_days(rd as i64);
                    assert_eq!(got, (year, month.to_number(), day));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn prop_day_count_roundtrips(rd: i32) -> bool {
            let (year, month, day) = from_reference_days(i64::from(rd));
            to_reference_days(year, i64::from(month), i64::from(day))
                == i128::from(rd)
        }

        fn prop_valid_day_of_month(rd: i32) -> bool {
            let (year, month, day) = from_reference_days(i64::from(rd));
            (1..=12).contains(&month)
                && day >= 1
                && day <= days_in_month_of(year, month)
        }
    }
}
