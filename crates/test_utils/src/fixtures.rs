//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common scenarios across the engine
//! test suite. These fixtures are consistent and predictable: the fixture
//! year is 2024, a leap year, precisely so that flat-calendar behavior is
//! exercised by default.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture dates, all within the leap year 2024
pub struct DateFixtures;

impl DateFixtures {
    /// Jan 1 of the fixture year
    pub fn year_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Dec 31 of the fixture year
    pub fn year_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// A mid-year evaluation date (Jun 15)
    pub fn mid_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Start of the second half-year (Jul 1)
    pub fn half_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    /// The leap day itself
    pub fn leap_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Fixture amounts for value and premium scenarios
pub struct AmountFixtures;

impl AmountFixtures {
    /// A typical insured value
    pub fn standard_value() -> Decimal {
        dec!(100000)
    }

    /// A smaller insured value for second objects
    pub fn small_value() -> Decimal {
        dec!(50000)
    }

    /// A typical current rate (percent)
    pub fn standard_rate() -> Decimal {
        dec!(1)
    }

    /// A typical fixed yearly premium
    pub fn fixed_yearly() -> Decimal {
        dec!(1200)
    }
}
