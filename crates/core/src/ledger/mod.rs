//! Double-entry derivation.
//!
//! - Normalization of invoices and expenses into transactions
//! - Journal entry synthesis
//! - General and subsidiary ledgers

pub mod account;
pub mod balance;
pub mod entry;
pub mod error;
pub mod generator;
pub mod normalizer;
pub mod range;
pub mod transaction;

#[cfg(test)]
mod journal_props;

pub use account::AccountKey;
pub use balance::{GeneralLedger, LedgerAccount, LedgerBuilder, LedgerLine};
pub use entry::{EntryTotals, JournalEntry, JournalEntryLine};
pub use error::LedgerError;
pub use generator::JournalGenerator;
pub use normalizer::TransactionNormalizer;
pub use range::DateRange;
pub use transaction::{Transaction, TransactionKind, TransactionSource, TransactionStatus};
