//! Normalized transactions.
//!
//! Invoices and expenses are mapped into one uniform shape before journal
//! synthesis. Transactions are never persisted; they are rebuilt from the
//! source records on every request.

use chrono::NaiveDate;
use freightbooks_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::{Expense, Invoice};

/// Direction of a business event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Sales invoice.
    Income,
    /// Purchase expense.
    Expense,
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Outstanding.
    Pending,
    /// Settled.
    Paid,
}

/// The record a transaction was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "record", rename_all = "lowercase")]
pub enum TransactionSource {
    /// A sales invoice.
    Invoice(Invoice),
    /// A purchase expense.
    Expense(Expense),
}

/// A business event in uniform shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Identifier shared with the source record.
    pub id: TransactionId,
    /// Calendar day of the event.
    pub date: NaiveDate,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Gross amount as recorded on the source.
    pub amount: Decimal,
    /// Settlement status.
    pub status: TransactionStatus,
    /// Source record.
    pub source: TransactionSource,
}

impl Transaction {
    /// Builds an income transaction from an invoice.
    #[must_use]
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.into(),
            date: invoice.date,
            kind: TransactionKind::Income,
            amount: invoice.total_amount,
            status: if invoice.is_paid() {
                TransactionStatus::Paid
            } else {
                TransactionStatus::Pending
            },
            source: TransactionSource::Invoice(invoice.clone()),
        }
    }

    /// Builds an expense transaction.
    #[must_use]
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            id: expense.id.into(),
            date: expense.date,
            kind: TransactionKind::Expense,
            amount: expense.amount,
            status: if expense.is_paid() {
                TransactionStatus::Paid
            } else {
                TransactionStatus::Pending
            },
            source: TransactionSource::Expense(expense.clone()),
        }
    }

    /// Returns the source expense, if this is an expense transaction.
    #[must_use]
    pub fn as_expense(&self) -> Option<&Expense> {
        match &self.source {
            TransactionSource::Expense(expense) => Some(expense),
            TransactionSource::Invoice(_) => None,
        }
    }

    /// Returns the source invoice, if this is an income transaction.
    #[must_use]
    pub fn as_invoice(&self) -> Option<&Invoice> {
        match &self.source {
            TransactionSource::Invoice(invoice) => Some(invoice),
            TransactionSource::Expense(_) => None,
        }
    }
}
