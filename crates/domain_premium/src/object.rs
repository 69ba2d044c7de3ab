//! Insured-object records and lifecycle statuses
//!
//! This module defines the read-only input record the engine operates on.
//! Records arrive as camelCase JSON from the REST collaborator and span
//! three schema generations, so deserialization is deliberately lenient:
//! numeric fields accept numbers or numeric strings, dates accept ISO or
//! RFC 3339 strings, and anything unparseable degrades to `None` instead
//! of failing the whole payload.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::ObjectId;

use crate::coerce;
use crate::error::ObjectParseError;

/// Lifecycle status of an insured object
///
/// `Removed` denotes an object that was insured and has since exited the
/// policy (it has an end date); it is distinct from `Rejected`, which was
/// never accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuredObjectStatus {
    Insured,
    Pending,
    Rejected,
    Removed,
}

impl InsuredObjectStatus {
    /// All statuses, in bucket order
    pub const ALL: [InsuredObjectStatus; 4] = [
        InsuredObjectStatus::Insured,
        InsuredObjectStatus::Pending,
        InsuredObjectStatus::Rejected,
        InsuredObjectStatus::Removed,
    ];

    /// Whether this status counts toward the headline value total.
    ///
    /// Only objects presently under cover contribute; removed objects stay
    /// visible in the breakdown but not in the headline figure.
    pub fn included_in_value_total(&self) -> bool {
        matches!(self, InsuredObjectStatus::Insured)
    }

    /// Whether this status counts toward the premium totals.
    ///
    /// Removed objects still earned premium for their covered part of the
    /// year, so the premium inclusion set is wider than the value set.
    /// These two predicates are intentionally separate and must not be
    /// unified.
    pub fn included_in_premium_total(&self) -> bool {
        matches!(
            self,
            InsuredObjectStatus::Insured | InsuredObjectStatus::Removed
        )
    }
}

/// How an object's yearly premium is derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumMethod {
    /// Percentage of the insured value (the default)
    #[default]
    Percentage,
    /// Fixed yearly amount
    Fixed,
}

/// A single asset under (or formerly under) the policy
///
/// Read-only input to the engine. The trailing derived fields echo what the
/// projection last computed; they are refreshed by
/// [`crate::projection::with_calculated_premiums`] and are never read back
/// as input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuredObject {
    pub id: ObjectId,
    pub status: InsuredObjectStatus,
    /// Insured value; coerced to zero when absent
    #[serde(default, deserialize_with = "coerce::opt_decimal")]
    pub value: Option<Decimal>,
    #[serde(default, deserialize_with = "coerce::premium_method")]
    pub premium_method: PremiumMethod,
    /// Current rate field, already a percentage (2.5 means 2.5%)
    #[serde(default, deserialize_with = "coerce::opt_decimal")]
    pub premium_percentage: Option<Decimal>,
    /// Current fixed yearly premium
    #[serde(default, deserialize_with = "coerce::opt_decimal")]
    pub premium_fixed_amount: Option<Decimal>,
    /// Older percentage field kept for backward compatibility; also reused
    /// as a fixed-amount fallback when the method is fixed
    #[serde(default, deserialize_with = "coerce::opt_decimal")]
    pub legacy_percentage: Option<Decimal>,
    /// Oldest rate field, stored in per-mille
    #[serde(default, deserialize_with = "coerce::opt_decimal")]
    pub legacy_per_mille: Option<Decimal>,
    #[serde(default, deserialize_with = "coerce::opt_date")]
    pub insurance_start_date: Option<NaiveDate>,
    /// Absent means still active through year end
    #[serde(default, deserialize_with = "coerce::opt_date")]
    pub insurance_end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "coerce::opt_decimal")]
    pub yearly_premium: Option<Decimal>,
    #[serde(default, deserialize_with = "coerce::opt_decimal")]
    pub period_premium: Option<Decimal>,
    #[serde(default)]
    pub period_days: Option<i64>,
}

impl InsuredObject {
    /// Creates an empty record in the given status with a fresh identifier
    pub fn new(status: InsuredObjectStatus) -> Self {
        Self {
            id: ObjectId::new(),
            status,
            value: None,
            premium_method: PremiumMethod::default(),
            premium_percentage: None,
            premium_fixed_amount: None,
            legacy_percentage: None,
            legacy_per_mille: None,
            insurance_start_date: None,
            insurance_end_date: None,
            yearly_premium: None,
            period_premium: None,
            period_days: None,
        }
    }

    /// Parses a single record from a JSON value
    ///
    /// # Errors
    ///
    /// Fails only on structurally invalid payloads (wrong shape, missing
    /// id/status); field-level junk coerces to safe defaults instead.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ObjectParseError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Parses a JSON array of insured-object records
///
/// # Errors
///
/// Fails only on structurally invalid JSON; see
/// [`InsuredObject::from_json_value`].
pub fn parse_objects(payload: &str) -> Result<Vec<InsuredObject>, ObjectParseError> {
    Ok(serde_json::from_str(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_inclusion_is_insured_only() {
        assert!(InsuredObjectStatus::Insured.included_in_value_total());
        assert!(!InsuredObjectStatus::Removed.included_in_value_total());
        assert!(!InsuredObjectStatus::Pending.included_in_value_total());
        assert!(!InsuredObjectStatus::Rejected.included_in_value_total());
    }

    #[test]
    fn test_premium_inclusion_also_covers_removed() {
        assert!(InsuredObjectStatus::Insured.included_in_premium_total());
        assert!(InsuredObjectStatus::Removed.included_in_premium_total());
        assert!(!InsuredObjectStatus::Pending.included_in_premium_total());
        assert!(!InsuredObjectStatus::Rejected.included_in_premium_total());
    }

    #[test]
    fn test_premium_method_defaults_to_percentage() {
        assert_eq!(PremiumMethod::default(), PremiumMethod::Percentage);
    }
}
