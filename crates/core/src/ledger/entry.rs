//! Journal entry ("asiento") domain types.

use chrono::NaiveDate;
use freightbooks_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::account::AccountKey;
use super::transaction::TransactionKind;

/// One debit or credit movement of a journal entry.
///
/// Both sides are always present; the unused side is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryLine {
    /// Account affected.
    #[serde(rename = "accountName")]
    pub account: AccountKey,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
}

impl JournalEntryLine {
    /// Creates a debit movement.
    #[must_use]
    pub fn debit(account: AccountKey, amount: Decimal) -> Self {
        Self {
            account,
            debit: amount,
            credit: Decimal::ZERO,
        }
    }

    /// Creates a credit movement.
    #[must_use]
    pub fn credit(account: AccountKey, amount: Decimal) -> Self {
        Self {
            account,
            debit: Decimal::ZERO,
            credit: amount,
        }
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// A multi-line journal entry synthesized from one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Identifier of the source transaction.
    pub id: TransactionId,
    /// Entry date.
    pub date: NaiveDate,
    /// Human-readable description.
    pub description: String,
    /// Kind of the source transaction.
    pub kind: TransactionKind,
    /// Movements, in emission order.
    pub lines: Vec<JournalEntryLine>,
}

impl JournalEntry {
    /// Sums the debit and credit sides.
    #[must_use]
    pub fn totals(&self) -> EntryTotals {
        let debit: Decimal = self.lines.iter().map(|l| l.debit).sum();
        let credit: Decimal = self.lines.iter().map(|l| l.credit).sum();
        EntryTotals::new(debit, credit)
    }

    /// Returns true if debits equal credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.totals().is_balanced
    }

    /// Lines posted to one account, in emission order.
    pub fn lines_for<'a>(
        &'a self,
        account: &'a AccountKey,
    ) -> impl Iterator<Item = &'a JournalEntryLine> + 'a {
        self.lines.iter().filter(move |l| &l.account == account)
    }
}

/// Debit and credit totals of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryTotals {
    /// Total debit amount.
    pub debit: Decimal,
    /// Total credit amount.
    pub credit: Decimal,
    /// Whether the entry is balanced (debits == credits).
    pub is_balanced: bool,
}

impl EntryTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(debit: Decimal, credit: Decimal) -> Self {
        Self {
            debit,
            credit,
            is_balanced: debit == credit,
        }
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit - self.credit
    }
}
