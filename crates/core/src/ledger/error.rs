//! Ledger error types.
//!
//! Derivations themselves never fail: malformed amounts are coerced upstream
//! and business-rule violations are computed through. The only rejected
//! input is a reporting window that ends before it starts.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when requesting ledger projections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl LedgerError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
        }
    }
}
