//! Financial report generation.
//!
//! Reports are read-only views over the general ledger.

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;
