//! Boundary error types
//!
//! The engine proper never fails: malformed field values are coerced to
//! safe defaults before any arithmetic. Errors exist only at the JSON
//! parsing edge, where a structurally invalid payload cannot yield records
//! at all.

use thiserror::Error;

/// Errors raised while parsing insured-object payloads
#[derive(Debug, Error)]
pub enum ObjectParseError {
    #[error("Invalid object payload: {0}")]
    Payload(#[from] serde_json::Error),
}
