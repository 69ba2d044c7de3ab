//! Collection-level totals bucketed by lifecycle status
//!
//! Folds a collection of records through the premium calculator into four
//! per-status accumulators and rolls them up into headline figures. The
//! rollup is asymmetric on purpose: the headline value reflects only
//! objects presently under cover, while the premium totals also include
//! objects removed during the year — they earned premium for their covered
//! period. The two inclusion predicates live on the status enum and must
//! stay independent.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::amounts::{or_zero, round_display};
use core_kernel::calendar::current_date;

use crate::calculator::calculate_premiums_as_of;
use crate::object::{InsuredObject, InsuredObjectStatus};

/// Totals bucket a status maps into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusBucket {
    Insured,
    OutsidePolicy,
    Pending,
    Rejected,
}

impl From<InsuredObjectStatus> for StatusBucket {
    fn from(status: InsuredObjectStatus) -> Self {
        match status {
            InsuredObjectStatus::Insured => StatusBucket::Insured,
            InsuredObjectStatus::Removed => StatusBucket::OutsidePolicy,
            InsuredObjectStatus::Pending => StatusBucket::Pending,
            InsuredObjectStatus::Rejected => StatusBucket::Rejected,
        }
    }
}

/// Running sums for one status bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketTotals {
    pub value: Decimal,
    /// Accumulated only for premium-bearing statuses; stays zero for
    /// pending and rejected buckets
    pub yearly_premium: Decimal,
    pub period_premium: Decimal,
    pub count: usize,
}

/// Per-bucket totals, keyed by [`StatusBucket`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsBreakdown {
    pub insured: BucketTotals,
    pub outside_policy: BucketTotals,
    pub pending: BucketTotals,
    pub rejected: BucketTotals,
}

impl TotalsBreakdown {
    /// Returns the totals for the given bucket
    pub fn bucket(&self, bucket: StatusBucket) -> &BucketTotals {
        match bucket {
            StatusBucket::Insured => &self.insured,
            StatusBucket::OutsidePolicy => &self.outside_policy,
            StatusBucket::Pending => &self.pending,
            StatusBucket::Rejected => &self.rejected,
        }
    }

    fn bucket_mut(&mut self, bucket: StatusBucket) -> &mut BucketTotals {
        match bucket {
            StatusBucket::Insured => &mut self.insured,
            StatusBucket::OutsidePolicy => &mut self.outside_policy,
            StatusBucket::Pending => &mut self.pending,
            StatusBucket::Rejected => &mut self.rejected,
        }
    }
}

/// Aggregated value and premium totals for a collection of records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsCalculation {
    /// Value of objects presently under cover; removed, pending, and
    /// rejected value sums stay in the breakdown only
    pub total_value: Decimal,
    /// Yearly premium of insured plus removed objects
    pub total_yearly_premium: Decimal,
    /// Period premium of insured plus removed objects
    pub total_period_premium: Decimal,
    pub insured_count: usize,
    pub outside_policy_count: usize,
    pub pending_count: usize,
    pub rejected_count: usize,
    pub breakdown: TotalsBreakdown,
}

impl fmt::Display for TotalsCalculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {:.2} | yearly premium {:.2} | period premium {:.2} ({} insured, {} outside policy, {} pending, {} rejected)",
            round_display(self.total_value),
            round_display(self.total_yearly_premium),
            round_display(self.total_period_premium),
            self.insured_count,
            self.outside_policy_count,
            self.pending_count,
            self.rejected_count
        )
    }
}

/// Aggregates value and premium totals as of the given date.
///
/// Calls the calculator once per record, lands the sums in the bucket
/// matching the record's status, then rolls up the headline figures through
/// the two inclusion predicates. Never fails, and the result does not
/// depend on input ordering.
pub fn aggregate_totals_as_of(objects: &[InsuredObject], as_of: NaiveDate) -> TotalsCalculation {
    let mut breakdown = TotalsBreakdown::default();

    for object in objects {
        let result = calculate_premiums_as_of(object, as_of);
        let bucket = breakdown.bucket_mut(object.status.into());
        bucket.value += or_zero(object.value);
        bucket.count += 1;
        if object.status.included_in_premium_total() {
            bucket.yearly_premium += result.yearly_premium;
            bucket.period_premium += result.period_premium;
        }
    }

    let mut totals = TotalsCalculation {
        insured_count: breakdown.insured.count,
        outside_policy_count: breakdown.outside_policy.count,
        pending_count: breakdown.pending.count,
        rejected_count: breakdown.rejected.count,
        breakdown,
        ..TotalsCalculation::default()
    };

    for status in InsuredObjectStatus::ALL {
        let bucket = totals.breakdown.bucket(status.into());
        if status.included_in_value_total() {
            totals.total_value += bucket.value;
        }
        if status.included_in_premium_total() {
            totals.total_yearly_premium += bucket.yearly_premium;
            totals.total_period_premium += bucket.period_premium;
        }
    }

    tracing::debug!(
        objects = objects.len(),
        total_value = %totals.total_value,
        total_yearly_premium = %totals.total_yearly_premium,
        "aggregated premium totals"
    );

    totals
}

/// Aggregates value and premium totals as of today
pub fn aggregate_totals(objects: &[InsuredObject]) -> TotalsCalculation {
    aggregate_totals_as_of(objects, current_date())
}
