//! Premium Calculation Domain
//!
//! This crate implements the status-aware premium engine for the fleet
//! cover system: per-object premium derivation and collection-level totals
//! bucketed by lifecycle status.
//!
//! # Architecture
//!
//! The engine is pure and stateless; records are supplied by an external
//! data-fetch collaborator and results are consumed by rendering/export
//! collaborators. Three components compose, leaves first:
//!
//! - **Rate resolver**: reconciles three schema generations of rate fields
//!   into one applicable percentage (or fixed amount).
//! - **Premium calculator**: derives period length, yearly premium, and
//!   period-prorated premium for one record.
//! - **Totals aggregator**: folds a collection through the calculator into
//!   status-bucketed totals.
//!
//! All premium arithmetic lives here. Consumers format the numbers but
//! never re-derive them.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_premium::{aggregate_totals, parse_objects};
//!
//! let objects = parse_objects(&payload)?;
//! let totals = aggregate_totals(&objects);
//! println!("{totals}");
//! ```

pub mod calculator;
mod coerce;
pub mod error;
pub mod object;
pub mod projection;
pub mod rate;
pub mod totals;

pub use calculator::{
    calculate_premiums, calculate_premiums_as_of, period_days_as_of, PremiumCalculationResult,
};
pub use error::ObjectParseError;
pub use object::{parse_objects, InsuredObject, InsuredObjectStatus, PremiumMethod};
pub use projection::{with_calculated_premiums, with_calculated_premiums_as_of};
pub use rate::{
    resolve_fixed_amount, resolve_rate, resolve_rate_percent, RateSource, ResolvedFixedAmount,
    ResolvedRate,
};
pub use totals::{
    aggregate_totals, aggregate_totals_as_of, BucketTotals, StatusBucket, TotalsBreakdown,
    TotalsCalculation,
};
