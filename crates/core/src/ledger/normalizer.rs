//! Transaction normalization.

use super::range::DateRange;
use super::transaction::Transaction;
use crate::records::{Expense, Invoice};

/// Maps raw invoices and expenses into [`Transaction`]s.
pub struct TransactionNormalizer;

impl TransactionNormalizer {
    /// Normalizes the records that fall within `range`.
    ///
    /// Voided invoices never become transactions. The result is ordered by
    /// recency (latest day first); records sharing a day keep their input
    /// order, invoices before expenses.
    #[must_use]
    pub fn normalize(
        invoices: &[Invoice],
        expenses: &[Expense],
        range: &DateRange,
    ) -> Vec<Transaction> {
        let income = invoices
            .iter()
            .filter(|invoice| !invoice.is_voided() && range.contains(invoice.date))
            .map(Transaction::from_invoice);
        let outgoing = expenses
            .iter()
            .filter(|expense| range.contains(expense.date))
            .map(Transaction::from_expense);

        let mut transactions: Vec<Transaction> = income.chain(outgoing).collect();
        // Stable sort keeps input order among same-day records.
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions
    }
}
