//! Amount coercion helper tests

use core_kernel::amounts::{non_zero, or_zero, round_display};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Missing amounts coerce to zero, present amounts pass through untouched
#[test]
fn test_or_zero_coercion() {
    assert_eq!(or_zero(None), Decimal::ZERO);
    assert_eq!(or_zero(Some(dec!(0))), Decimal::ZERO);
    assert_eq!(or_zero(Some(dec!(99999.99))), dec!(99999.99));
    assert_eq!(or_zero(Some(dec!(-1))), dec!(-1));
}

/// Zero and absent are interchangeable for fallback resolution
#[test]
fn test_non_zero_fall_through_rule() {
    assert_eq!(non_zero(Some(dec!(0.000))), None);
    assert_eq!(non_zero(None), None);
    assert_eq!(non_zero(Some(dec!(8))), Some(dec!(8)));
}

/// Display rounding is two decimal places, half to even
#[test]
fn test_round_display() {
    assert_eq!(round_display(dec!(1500)), dec!(1500.00));
    assert_eq!(round_display(dec!(604.931506849315)), dec!(604.93));
    assert_eq!(round_display(dec!(0.005)), dec!(0.00));
    assert_eq!(round_display(dec!(0.015)), dec!(0.02));
}
