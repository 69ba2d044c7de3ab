//! Derived-field projection
//!
//! Collaborators sort, filter, and export records by their computed premium
//! fields. This projection annotates a record with freshly calculated
//! figures so every downstream view sees consistent numbers, without ever
//! mutating the input. Idempotent by construction: the calculator never
//! reads the derived echo fields, so projecting twice equals projecting
//! once.

use chrono::NaiveDate;

use core_kernel::calendar::current_date;

use crate::calculator::calculate_premiums_as_of;
use crate::object::InsuredObject;

/// Returns a copy of the record with derived premium fields merged in,
/// evaluated as of the given date
pub fn with_calculated_premiums_as_of(object: &InsuredObject, as_of: NaiveDate) -> InsuredObject {
    let result = calculate_premiums_as_of(object, as_of);

    let mut projected = object.clone();
    projected.yearly_premium = Some(result.yearly_premium);
    projected.period_premium = Some(result.period_premium);
    projected.period_days = Some(result.period_days);
    projected
}

/// Returns a copy of the record with derived premium fields merged in,
/// evaluated as of today
pub fn with_calculated_premiums(object: &InsuredObject) -> InsuredObject {
    with_calculated_premiums_as_of(object, current_date())
}
