//! Property-based Test Data Generators
//!
//! Proptest strategies for the engine's input domain. Amounts and rates are
//! non-negative (the source system never stores negative values) and every
//! optional field generates absent, zero, and present cases so fallback
//! paths get exercised.

use chrono::NaiveDate;
use domain_premium::{InsuredObject, InsuredObjectStatus, PremiumMethod};
use proptest::option;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy over all lifecycle statuses
pub fn arb_status() -> impl Strategy<Value = InsuredObjectStatus> {
    prop_oneof![
        Just(InsuredObjectStatus::Insured),
        Just(InsuredObjectStatus::Pending),
        Just(InsuredObjectStatus::Rejected),
        Just(InsuredObjectStatus::Removed),
    ]
}

/// Strategy over both premium methods
pub fn arb_premium_method() -> impl Strategy<Value = PremiumMethod> {
    prop_oneof![Just(PremiumMethod::Percentage), Just(PremiumMethod::Fixed)]
}

/// Optional non-negative amount with two decimal places, biased to include
/// absent and zero
pub fn arb_opt_amount() -> impl Strategy<Value = Option<Decimal>> {
    option::weighted(0.7, (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2)))
}

/// Optional non-negative rate-sized amount (up to 100.00)
pub fn arb_opt_rate() -> impl Strategy<Value = Option<Decimal>> {
    option::weighted(0.7, (0i64..10_000).prop_map(|hundredths| Decimal::new(hundredths, 2)))
}

/// Optional date within 2020-2029, ordinals capped at 365 so every year is
/// valid
pub fn arb_opt_date() -> impl Strategy<Value = Option<NaiveDate>> {
    option::weighted(
        0.8,
        (2020i32..2030, 1u32..=365)
            .prop_map(|(year, ordinal)| NaiveDate::from_yo_opt(year, ordinal).unwrap()),
    )
}

/// Strategy over whole insured-object records
pub fn arb_insured_object() -> impl Strategy<Value = InsuredObject> {
    (
        arb_status(),
        arb_premium_method(),
        arb_opt_amount(),
        arb_opt_rate(),
        arb_opt_amount(),
        arb_opt_rate(),
        arb_opt_rate(),
        arb_opt_date(),
        arb_opt_date(),
    )
        .prop_map(
            |(
                status,
                premium_method,
                value,
                premium_percentage,
                premium_fixed_amount,
                legacy_percentage,
                legacy_per_mille,
                insurance_start_date,
                insurance_end_date,
            )| {
                let mut object = InsuredObject::new(status);
                object.premium_method = premium_method;
                object.value = value;
                object.premium_percentage = premium_percentage;
                object.premium_fixed_amount = premium_fixed_amount;
                object.legacy_percentage = legacy_percentage;
                object.legacy_per_mille = legacy_per_mille;
                object.insurance_start_date = insurance_start_date;
                object.insurance_end_date = insurance_end_date;
                object
            },
        )
}
