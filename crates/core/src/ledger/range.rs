//! Reporting windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Inclusive calendar-day window; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start: Option<NaiveDate>,
    /// Last day included.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a window, rejecting one that ends before it starts.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, LedgerError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(LedgerError::InvalidDateRange { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// A window with no bounds.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Returns true if the date falls within the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}
