//! Purchase expense records.

use chrono::NaiveDate;
use freightbooks_shared::types::{ExpenseId, PaymentMethodId, lenient};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement status of an expense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    /// Owed to the supplier.
    #[default]
    Pending,
    /// Paid out.
    Paid,
}

/// A purchase expense, optionally backed by a supplier invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Expense identifier.
    pub id: ExpenseId,
    /// Expense date.
    #[serde(deserialize_with = "lenient::calendar_day")]
    pub date: NaiveDate,
    /// Settlement status.
    #[serde(default)]
    pub status: ExpenseStatus,
    /// Gross amount, VAT credit included.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub amount: Decimal,
    /// Net amount before VAT, when recorded.
    #[serde(default, deserialize_with = "lenient::optional_decimal")]
    pub taxable_base: Option<Decimal>,
    /// Recoverable VAT.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub vat_amount: Decimal,
    /// Expense category; names the expense account.
    #[serde(default)]
    pub category: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Supplier display name.
    #[serde(default)]
    pub supplier_name: String,
    /// Supplier tax identifier.
    #[serde(default)]
    pub supplier_rif: Option<String>,
    /// Supplier's invoice number.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Payment method used, when paid.
    #[serde(default)]
    pub payment_method_id: Option<PaymentMethodId>,
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

impl Expense {
    /// Net amount before VAT, falling back to the gross amount when no base
    /// was recorded (absent or zero).
    #[must_use]
    pub fn effective_taxable_base(&self) -> Decimal {
        match self.taxable_base {
            Some(base) if !base.is_zero() => base,
            _ => self.amount,
        }
    }

    /// Returns true if the expense has been paid out.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.status == ExpenseStatus::Paid
    }

    /// Returns true if the expense is backed by a supplier invoice that can
    /// be declared: both supplier tax id and invoice number are present.
    #[must_use]
    pub fn is_fiscally_documented(&self) -> bool {
        !is_blank(self.supplier_rif.as_deref()) && !is_blank(self.invoice_number.as_deref())
    }
}
