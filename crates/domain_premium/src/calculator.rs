//! Per-object premium calculation
//!
//! Derives the insurance-period length, the yearly premium, and the
//! period-prorated premium for a single record. Pure function of its input
//! plus an evaluation date; the totals aggregator relies on the guarantee
//! that every output is fully formed, so all missing numerics are coerced
//! to zero and all missing dates fall back to documented defaults before
//! arithmetic.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::amounts::{or_zero, round_display};
use core_kernel::calendar::{current_date, inclusive_flat_days, year_end, FLAT_YEAR_DAYS};

use crate::object::{InsuredObject, PremiumMethod};
use crate::rate::{resolve_fixed_amount, resolve_rate_percent};

/// Derived premium figures for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumCalculationResult {
    /// Full annualized premium; zero for statuses outside the premium set
    pub yearly_premium: Decimal,
    /// Premium prorated to the covered period on the flat 365-day calendar
    pub period_premium: Decimal,
    /// Covered days inclusive of both endpoints, at least one
    pub period_days: i64,
}

impl PremiumCalculationResult {
    fn excluded(period_days: i64) -> Self {
        Self {
            yearly_premium: Decimal::ZERO,
            period_premium: Decimal::ZERO,
            period_days,
        }
    }
}

impl fmt::Display for PremiumCalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}/year, {:.2} over {} days",
            round_display(self.yearly_premium),
            round_display(self.period_premium),
            self.period_days
        )
    }
}

/// Length of the insurance period in whole days, inclusive of both ends.
///
/// A missing start date degrades to the evaluation date; a missing end date
/// means "active through year end" and becomes Dec 31 of the evaluation
/// year. Counting happens on the flat calendar, so a full year is exactly
/// [`FLAT_YEAR_DAYS`] regardless of leap status, and the result never drops
/// below one day.
pub fn period_days_as_of(object: &InsuredObject, as_of: NaiveDate) -> i64 {
    let start = object.insurance_start_date.unwrap_or(as_of);
    let end = object
        .insurance_end_date
        .unwrap_or_else(|| year_end(as_of.year()));
    inclusive_flat_days(start, end)
}

/// Calculates premiums for one record as of the given date.
///
/// Statuses outside the premium set (pending, rejected) yield zero
/// premiums, but the period length is still computed and returned since
/// consumers display coverage length for every state.
///
/// The period premium always prorates against the constant
/// [`FLAT_YEAR_DAYS`], never the actual days in the relevant year —
/// consistent with the flat period counting above.
pub fn calculate_premiums_as_of(
    object: &InsuredObject,
    as_of: NaiveDate,
) -> PremiumCalculationResult {
    let period_days = period_days_as_of(object, as_of);

    if !object.status.included_in_premium_total() {
        return PremiumCalculationResult::excluded(period_days);
    }

    let yearly_premium = match object.premium_method {
        PremiumMethod::Fixed => resolve_fixed_amount(object).amount,
        PremiumMethod::Percentage => {
            or_zero(object.value) * resolve_rate_percent(object) / dec!(100)
        }
    };

    let period_premium =
        yearly_premium * Decimal::from(period_days) / Decimal::from(FLAT_YEAR_DAYS);

    PremiumCalculationResult {
        yearly_premium,
        period_premium,
        period_days,
    }
}

/// Calculates premiums for one record as of today
pub fn calculate_premiums(object: &InsuredObject) -> PremiumCalculationResult {
    calculate_premiums_as_of(object, current_date())
}
