//! Accounting derivation engine for Freightbooks.
//!
//! This crate contains pure business logic with ZERO I/O. Every output is
//! recomputed from read-only input records on each call.
//!
//! # Modules
//!
//! - `freight` - Shipment financial breakdown and per-item charge allocation
//! - `records` - Invoice, expense and payment method input records
//! - `ledger` - Transactions, journal entries, general and subsidiary ledgers
//! - `fiscal` - Sales and purchases books
//! - `reports` - Trial balance
//! - `projection` - One-call pipeline with optional memoization

pub mod fiscal;
pub mod freight;
pub mod ledger;
pub mod projection;
pub mod records;
pub mod reports;
