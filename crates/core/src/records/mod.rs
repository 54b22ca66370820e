//! Source records served by the back-office API.
//!
//! These are read-only snapshots. Every derived view (financials,
//! transactions, journal entries, ledgers, fiscal books) is recomputed from
//! them on each request.

pub mod expense;
pub mod invoice;

use freightbooks_shared::types::PaymentMethodId;
use serde::{Deserialize, Serialize};

pub use expense::{Expense, ExpenseStatus};
pub use invoice::{Invoice, InvoiceStatus, PaymentStatus};

/// A configured means of payment (bank account, cash box, wallet...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Identifier referenced by invoices and expenses.
    pub id: PaymentMethodId,
    /// Display name; doubles as the ledger account name.
    pub name: String,
}
