//! Derived-Field Projection Tests
//!
//! Covers the projection used before sorting/filtering/exporting:
//! - Derived fields match the calculator exactly
//! - The input record is never mutated
//! - Stale derived values are refreshed, never trusted
//! - Idempotency: projecting twice equals projecting once

use domain_premium::{calculate_premiums_as_of, with_calculated_premiums_as_of};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use test_utils::generators::arb_insured_object;
use test_utils::{DateFixtures, InsuredObjectBuilder};

/// Projected fields mirror the calculator's output
#[test]
fn test_projection_matches_calculator() {
    let object = InsuredObjectBuilder::insured()
        .with_value(dec!(200000))
        .with_percentage(dec!(2))
        .build();
    let as_of = DateFixtures::mid_year();

    let projected = with_calculated_premiums_as_of(&object, as_of);
    let result = calculate_premiums_as_of(&object, as_of);

    assert_eq!(projected.yearly_premium, Some(result.yearly_premium));
    assert_eq!(projected.period_premium, Some(result.period_premium));
    assert_eq!(projected.period_days, Some(result.period_days));
}

/// The input record is left untouched
#[test]
fn test_input_is_not_mutated() {
    let object = InsuredObjectBuilder::insured()
        .with_value(dec!(100000))
        .with_percentage(dec!(1))
        .build();
    let before = object.clone();

    let _ = with_calculated_premiums_as_of(&object, DateFixtures::mid_year());

    assert_eq!(object, before);
}

/// Stale derived fields on the input are recomputed from source fields,
/// never carried forward
#[test]
fn test_stale_derived_fields_are_refreshed() {
    let object = InsuredObjectBuilder::insured()
        .with_value(dec!(100000))
        .with_percentage(dec!(1))
        .with_stale_derived(dec!(999999), dec!(999999), 9999)
        .build();

    let projected = with_calculated_premiums_as_of(&object, DateFixtures::mid_year());

    assert_eq!(projected.yearly_premium, Some(dec!(1000)));
    assert_eq!(projected.period_days, Some(365));
}

/// Non-premium-bearing statuses project zero premiums but a real period
#[test]
fn test_projection_for_pending_object() {
    let object = InsuredObjectBuilder::new(domain_premium::InsuredObjectStatus::Pending)
        .with_value(dec!(100000))
        .with_percentage(dec!(2))
        .build();

    let projected = with_calculated_premiums_as_of(&object, DateFixtures::mid_year());

    assert_eq!(projected.yearly_premium, Some(dec!(0)));
    assert_eq!(projected.period_premium, Some(dec!(0)));
    assert!(projected.period_days.unwrap() >= 1);
}

proptest! {
    /// Projecting twice yields exactly the same record as projecting once
    #[test]
    fn projection_is_idempotent(object in arb_insured_object()) {
        let as_of = DateFixtures::mid_year();
        let once = with_calculated_premiums_as_of(&object, as_of);
        let twice = with_calculated_premiums_as_of(&once, as_of);
        prop_assert_eq!(once, twice);
    }
}
