use chrono::{DateTime, Datelike, TimeZone};

use crate::consts::{CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};

/// Gregorian leap-year rule for a bare year number.
///
/// Works for proleptic years too, so `0` and `-400` are leap years.
pub const fn year_is_leap(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns whether the calendar year of `date` is a leap year.
///
/// Only the year is consulted, read in the value's own time zone.
pub fn is_leap_year<Tz: TimeZone>(date: &DateTime<Tz>) -> bool {
    year_is_leap(date.year())
}
