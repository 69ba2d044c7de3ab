//! Flat-calendar day arithmetic
//!
//! Coverage periods in this system are measured on a simplified calendar in
//! which every year has exactly 365 days and premiums prorate against the
//! same constant. Jan 1 through Dec 31 of any year is 365 days, leap or
//! not, and Feb 29 collapses onto Feb 28. This is a business rule inherited
//! from the rating agreements, not an approximation to be corrected with
//! calendar-aware day counts.

use chrono::{Datelike, NaiveDate, Utc};

/// Number of days in a flat year. Also the proration divisor for period
/// premiums.
pub const FLAT_YEAR_DAYS: i64 = 365;

/// Ordinal of Feb 29 within a leap year.
const LEAP_DAY_ORDINAL: u32 = 60;

/// Maps a date onto the flat calendar's absolute day number.
///
/// Consecutive Dec 31 / Jan 1 pairs are one day apart, and in leap years
/// Feb 29 shares a day number with Feb 28 so that every year spans exactly
/// [`FLAT_YEAR_DAYS`] day numbers.
pub fn flat_day_number(date: NaiveDate) -> i64 {
    let ordinal = date.ordinal();
    let flat_ordinal = if date.leap_year() && ordinal >= LEAP_DAY_ORDINAL {
        ordinal - 1
    } else {
        ordinal
    };
    i64::from(date.year()) * FLAT_YEAR_DAYS + i64::from(flat_ordinal)
}

/// Counts the days between two dates inclusive of both endpoints, on the
/// flat calendar.
///
/// A same-day span counts as one day. An inverted span clamps to one day
/// rather than going negative; malformed periods must never poison the
/// premium math downstream.
pub fn inclusive_flat_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (flat_day_number(end) - flat_day_number(start) + 1).max(1)
}

/// December 31 of the given year.
pub fn year_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).expect("Dec 31 exists in every year")
}

/// Today's date in UTC, used as the evaluation date when callers do not
/// supply one.
pub fn current_date() -> NaiveDate {
    Utc::now().date_naive()
}
