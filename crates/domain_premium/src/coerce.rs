//! Lenient field deserialization for the REST boundary
//!
//! The engine trusts the overall shape of its input but must not let one
//! malformed field poison a record. These helpers back the serde attributes
//! on [`crate::object::InsuredObject`]: whatever cannot be parsed becomes
//! `None` (or the default method) so that the calculator's coercion rules
//! take over.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

use crate::object::PremiumMethod;

/// Accepts JSON numbers or numeric strings; junk degrades to `None`
pub(crate) fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(amount)) => Some(amount),
        Some(Raw::Text(text)) => Decimal::from_str(text.trim()).ok(),
        _ => None,
    })
}

/// Accepts `YYYY-MM-DD` or RFC 3339 strings; junk degrades to `None`
pub(crate) fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => parse_date(text.trim()),
        _ => None,
    })
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::from_str(text)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}

/// Accepts `"fixed"` (any case); everything else is the percentage default
pub(crate) fn premium_method<'de, D>(deserializer: D) -> Result<PremiumMethod, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) if text.trim().eq_ignore_ascii_case("fixed") => PremiumMethod::Fixed,
        _ => PremiumMethod::default(),
    })
}
