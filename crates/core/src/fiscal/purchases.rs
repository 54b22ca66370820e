//! Purchases book.

use chrono::NaiveDate;
use freightbooks_shared::types::ExpenseId;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::Transaction;

/// One supplier invoice as declared in the purchases book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasesBookRow {
    /// Expense date.
    pub date: NaiveDate,
    /// Source expense.
    pub expense_id: ExpenseId,
    /// Supplier display name.
    pub supplier_name: String,
    /// Supplier tax identifier.
    pub supplier_rif: String,
    /// Supplier invoice number.
    pub invoice_number: String,
    /// Net amount before VAT.
    pub taxable_base: Decimal,
    /// VAT credit.
    pub vat: Decimal,
    /// Gross amount.
    pub total: Decimal,
}

/// Column totals of the purchases book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasesBookTotals {
    /// Sum of taxable bases.
    pub taxable_base: Decimal,
    /// Sum of VAT.
    pub vat: Decimal,
    /// Sum of totals.
    pub total: Decimal,
}

/// Purchases book for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasesBook {
    /// Rows ascending by date.
    pub rows: Vec<PurchasesBookRow>,
    /// Column totals.
    pub totals: PurchasesBookTotals,
}

impl PurchasesBook {
    /// Builds the purchases book from normalized transactions.
    ///
    /// Only expenses carrying both a supplier tax id and a supplier invoice
    /// number are declarable; the rest are left out, not zeroed.
    #[must_use]
    pub fn build(transactions: &[Transaction]) -> Self {
        let mut rows: Vec<PurchasesBookRow> = transactions
            .iter()
            .filter_map(Transaction::as_expense)
            .filter(|expense| expense.is_fiscally_documented())
            .map(|expense| PurchasesBookRow {
                date: expense.date,
                expense_id: expense.id,
                supplier_name: expense.supplier_name.clone(),
                supplier_rif: expense.supplier_rif.clone().unwrap_or_default(),
                invoice_number: expense.invoice_number.clone().unwrap_or_default(),
                taxable_base: expense.effective_taxable_base(),
                vat: expense.vat_amount,
                total: expense.amount,
            })
            .collect();
        rows.sort_by_key(|row| row.date);

        let totals = rows
            .iter()
            .fold(PurchasesBookTotals::default(), |mut acc, row| {
                acc.taxable_base += row.taxable_base;
                acc.vat += row.vat;
                acc.total += row.total;
                acc
            });

        Self { rows, totals }
    }
}
