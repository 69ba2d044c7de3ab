//! Core Kernel - Foundational types and utilities for the fleet cover engine
//!
//! This crate provides the fundamental building blocks used across the engine:
//! - Decimal amount coercion and rounding helpers
//! - Flat-calendar day arithmetic (every year counts as 365 days)
//! - Strongly-typed identifiers

pub mod amounts;
pub mod calendar;
pub mod identifiers;

pub use amounts::{non_zero, or_zero, round_display};
pub use calendar::{
    current_date, flat_day_number, inclusive_flat_days, year_end, FLAT_YEAR_DAYS,
};
pub use identifiers::ObjectId;
