//! Decimal amount helpers with defensive coercion
//!
//! The engine's inputs come from REST payloads spanning three schema
//! generations, where "absent" may arrive as a missing field, `null`, or a
//! literal `0`. These helpers are the single place that encodes the
//! coercion rules: missing numerics become zero before arithmetic, and a
//! zero is treated the same as an absent value when walking fallback
//! chains.

use rust_decimal::Decimal;

/// Coerces an optional amount to zero when absent.
///
/// Every numeric input field passes through this before arithmetic so that
/// downstream calculations never see a missing value.
pub fn or_zero(amount: Option<Decimal>) -> Decimal {
    amount.unwrap_or(Decimal::ZERO)
}

/// Returns the amount only if it is present and non-zero.
///
/// The historical schema stores "absent" as `0` and `null` interchangeably,
/// so fallback resolution cannot distinguish an intentional zero from a
/// missing value. That ambiguity is deliberate and preserved here: a zero
/// falls through to the next candidate, exactly as the source data demands.
pub fn non_zero(amount: Option<Decimal>) -> Option<Decimal> {
    amount.filter(|a| !a.is_zero())
}

/// Rounds an amount to two decimal places for display surfaces.
///
/// Uses banker's rounding (round half to even) to avoid systematic bias in
/// summed displays. Formatting and localization stay with the consumers;
/// this only fixes the precision they receive.
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointNearestEven)
}
