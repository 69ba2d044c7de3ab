//! Custom Assertion Helpers
//!
//! Decimal comparisons for premium figures. Exact decimal arithmetic means
//! most assertions can compare directly; these helpers cover the cases
//! where a test states an expectation at display precision (two decimal
//! places).

use core_kernel::amounts::round_display;
use rust_decimal::Decimal;

/// Asserts that an amount equals the expected value at display precision
/// (two decimal places, banker's rounding)
pub fn assert_display_eq(actual: Decimal, expected: Decimal) {
    assert_eq!(
        round_display(actual),
        round_display(expected),
        "expected {} at display precision, got {} (raw {})",
        expected,
        round_display(actual),
        actual
    );
}

/// Asserts that an amount is exactly zero
pub fn assert_zero(actual: Decimal) {
    assert!(actual.is_zero(), "expected zero, got {}", actual);
}
