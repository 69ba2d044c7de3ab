//! Premium rate resolution across three schema generations
//!
//! Three generations of rate fields coexist without a data migration: the
//! current percentage, an older percentage, and the oldest per-mille field.
//! This module is the single place that encodes the fallback order, as a
//! first-non-default-wins walk over an ordered candidate table — adding a
//! fourth generation is one more table entry, not new branching.
//!
//! The historical data cannot distinguish an intentional rate of exactly
//! zero from an absent field; both fall through to the next candidate. That
//! behavior is observable in production numbers and is preserved, not
//! corrected.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::amounts::non_zero;

use crate::object::InsuredObject;

/// Which schema generation supplied a resolved rate or fixed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSource {
    /// Current percentage field
    CurrentPercentage,
    /// Previous-generation percentage field
    LegacyPercentage,
    /// Oldest field, stored in per-mille
    LegacyPerMille,
    /// Current fixed yearly amount
    CurrentFixedAmount,
    /// Legacy percentage field doubling as a fixed amount, kept for
    /// compatibility with records written before the fixed method existed
    LegacyAsFixedFallback,
}

/// A resolved premium percentage with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRate {
    /// Applicable rate as a percentage (2.5 means 2.5%)
    pub percent: Decimal,
    /// Winning generation, `None` when every candidate was absent or zero
    pub source: Option<RateSource>,
}

/// A resolved fixed yearly amount with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFixedAmount {
    pub amount: Decimal,
    pub source: Option<RateSource>,
}

fn as_is(value: Decimal) -> Decimal {
    value
}

fn per_mille_to_percent(value: Decimal) -> Decimal {
    value / dec!(10)
}

/// Resolves the applicable premium percentage for one record.
///
/// Walks the candidate fields newest-first and returns the first present,
/// non-zero value, converted to a percentage. Never fails; the absence of
/// every candidate resolves to zero.
pub fn resolve_rate(object: &InsuredObject) -> ResolvedRate {
    let candidates: [(RateSource, Option<Decimal>, fn(Decimal) -> Decimal); 3] = [
        (RateSource::CurrentPercentage, object.premium_percentage, as_is),
        (RateSource::LegacyPercentage, object.legacy_percentage, as_is),
        (
            RateSource::LegacyPerMille,
            object.legacy_per_mille,
            per_mille_to_percent,
        ),
    ];

    for (source, raw, convert) in candidates {
        if let Some(value) = non_zero(raw) {
            return ResolvedRate {
                percent: convert(value),
                source: Some(source),
            };
        }
    }

    ResolvedRate {
        percent: Decimal::ZERO,
        source: None,
    }
}

/// Convenience wrapper returning just the percentage
pub fn resolve_rate_percent(object: &InsuredObject) -> Decimal {
    resolve_rate(object).percent
}

/// Resolves the fixed yearly premium amount for one record.
///
/// Same fall-through-on-zero rule as [`resolve_rate`]. The legacy
/// percentage field doubles as the fixed-amount fallback; the returned
/// source makes that reuse visible instead of leaving it implicit.
pub fn resolve_fixed_amount(object: &InsuredObject) -> ResolvedFixedAmount {
    let candidates = [
        (RateSource::CurrentFixedAmount, object.premium_fixed_amount),
        (RateSource::LegacyAsFixedFallback, object.legacy_percentage),
    ];

    for (source, raw) in candidates {
        if let Some(amount) = non_zero(raw) {
            return ResolvedFixedAmount {
                amount,
                source: Some(source),
            };
        }
    }

    ResolvedFixedAmount {
        amount: Decimal::ZERO,
        source: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::InsuredObjectStatus;

    fn object() -> InsuredObject {
        InsuredObject::new(InsuredObjectStatus::Insured)
    }

    #[test]
    fn test_current_percentage_wins() {
        let mut o = object();
        o.premium_percentage = Some(dec!(2.5));
        o.legacy_percentage = Some(dec!(1.5));
        o.legacy_per_mille = Some(dec!(80));

        let resolved = resolve_rate(&o);
        assert_eq!(resolved.percent, dec!(2.5));
        assert_eq!(resolved.source, Some(RateSource::CurrentPercentage));
    }

    #[test]
    fn test_per_mille_converts_to_percentage() {
        let mut o = object();
        o.premium_percentage = Some(dec!(0));
        o.legacy_percentage = Some(dec!(0));
        o.legacy_per_mille = Some(dec!(80));

        let resolved = resolve_rate(&o);
        assert_eq!(resolved.percent, dec!(8));
        assert_eq!(resolved.source, Some(RateSource::LegacyPerMille));
    }

    #[test]
    fn test_all_absent_resolves_to_zero() {
        let resolved = resolve_rate(&object());
        assert_eq!(resolved.percent, Decimal::ZERO);
        assert_eq!(resolved.source, None);
    }

    #[test]
    fn test_legacy_field_doubles_as_fixed_amount() {
        let mut o = object();
        o.premium_fixed_amount = Some(dec!(0));
        o.legacy_percentage = Some(dec!(900));

        let resolved = resolve_fixed_amount(&o);
        assert_eq!(resolved.amount, dec!(900));
        assert_eq!(resolved.source, Some(RateSource::LegacyAsFixedFallback));
    }
}
