//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::NaiveDate;
use domain_premium::{InsuredObject, InsuredObjectStatus, PremiumMethod};
use rust_decimal::Decimal;

use crate::fixtures::DateFixtures;

/// Builder for constructing insured-object test records
///
/// Defaults to an insured object with no value, no rate fields, and a
/// coverage period spanning the full fixture year.
pub struct InsuredObjectBuilder {
    object: InsuredObject,
}

impl Default for InsuredObjectBuilder {
    fn default() -> Self {
        Self::new(InsuredObjectStatus::Insured)
    }
}

impl InsuredObjectBuilder {
    /// Creates a new builder for the given status
    pub fn new(status: InsuredObjectStatus) -> Self {
        let mut object = InsuredObject::new(status);
        object.insurance_start_date = Some(DateFixtures::year_start());
        Self { object }
    }

    /// Shorthand for an insured object
    pub fn insured() -> Self {
        Self::new(InsuredObjectStatus::Insured)
    }

    /// Shorthand for a removed (outside-policy) object covering the full
    /// fixture year
    pub fn removed() -> Self {
        Self::new(InsuredObjectStatus::Removed).with_end_date(DateFixtures::year_end())
    }

    /// Sets the insured value
    pub fn with_value(mut self, value: Decimal) -> Self {
        self.object.value = Some(value);
        self
    }

    /// Sets the current premium percentage
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.object.premium_percentage = Some(percentage);
        self
    }

    /// Sets the legacy percentage field
    pub fn with_legacy_percentage(mut self, percentage: Decimal) -> Self {
        self.object.legacy_percentage = Some(percentage);
        self
    }

    /// Sets the legacy per-mille field
    pub fn with_legacy_per_mille(mut self, per_mille: Decimal) -> Self {
        self.object.legacy_per_mille = Some(per_mille);
        self
    }

    /// Switches to the fixed premium method with the given yearly amount
    pub fn with_fixed_amount(mut self, amount: Decimal) -> Self {
        self.object.premium_method = PremiumMethod::Fixed;
        self.object.premium_fixed_amount = Some(amount);
        self
    }

    /// Switches to the fixed premium method without a current amount
    pub fn fixed_method(mut self) -> Self {
        self.object.premium_method = PremiumMethod::Fixed;
        self
    }

    /// Sets the coverage start date
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.object.insurance_start_date = Some(date);
        self
    }

    /// Sets the coverage end date
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.object.insurance_end_date = Some(date);
        self
    }

    /// Clears both coverage dates
    pub fn without_dates(mut self) -> Self {
        self.object.insurance_start_date = None;
        self.object.insurance_end_date = None;
        self
    }

    /// Pre-populates the derived echo fields, for staleness tests
    pub fn with_stale_derived(mut self, yearly: Decimal, period: Decimal, days: i64) -> Self {
        self.object.yearly_premium = Some(yearly);
        self.object.period_premium = Some(period);
        self.object.period_days = Some(days);
        self
    }

    /// Builds the record
    pub fn build(self) -> InsuredObject {
        self.object
    }
}
