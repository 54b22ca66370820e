//! Typed account keys.
//!
//! The chart of accounts is implicit: accounts are discovered from the
//! postings that reference them. System accounts are fixed variants; accounts
//! named after a counterparty, category or payment method carry their name.

use std::fmt;
use std::str::FromStr;

use freightbooks_shared::types::PaymentMethodId;
use serde::{Serialize, Serializer};

use crate::records::PaymentMethod;

const RECEIVABLE_PREFIX: &str = "Accounts Receivable – ";
const PAYABLE_PREFIX: &str = "Accounts Payable – ";
const EXPENSE_PREFIX: &str = "Expense – ";

/// Ledger account identity.
///
/// Ordering groups system accounts before counterparty accounts and is only
/// used for deterministic report layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountKey {
    /// Fallback treasury account when no payment method resolves.
    CashOrBank,
    /// Treasury account named after a payment method.
    PaymentMethod(String),
    /// Amount owed by a client.
    Receivable(String),
    /// Freight revenue.
    FreightIncome,
    /// Handling revenue.
    HandlingIncome,
    /// Insurance revenue.
    InsuranceIncome,
    /// Contra-revenue for freight discounts.
    SalesDiscounts,
    /// VAT collected on sales.
    VatPayable,
    /// Postal-service levy collected on behalf of the regulator.
    PostalLevyPayable,
    /// FX transaction tax collected.
    FxTaxPayable,
    /// Recoverable VAT on purchases.
    VatCredit,
    /// Amount owed to a supplier.
    Payable(String),
    /// Expense account for a category.
    Expense(String),
}

impl AccountKey {
    /// Resolves the treasury account for a payment method reference.
    ///
    /// Falls back to [`AccountKey::CashOrBank`] when the reference is missing,
    /// unknown, or names a method with a blank name.
    #[must_use]
    pub fn treasury(methods: &[PaymentMethod], id: Option<PaymentMethodId>) -> Self {
        id.and_then(|id| methods.iter().find(|m| m.id == id))
            .map(|m| m.name.trim())
            .filter(|name| !name.is_empty())
            .map_or(Self::CashOrBank, |name| Self::PaymentMethod(name.to_string()))
    }

    /// Returns true for accounts whose name is discovered from records.
    #[must_use]
    pub fn is_counterparty(&self) -> bool {
        matches!(
            self,
            Self::PaymentMethod(_) | Self::Receivable(_) | Self::Payable(_) | Self::Expense(_)
        )
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CashOrBank => f.write_str("Cash/Bank"),
            Self::PaymentMethod(name) => f.write_str(name),
            Self::Receivable(client) => write!(f, "{RECEIVABLE_PREFIX}{client}"),
            Self::FreightIncome => f.write_str("Freight Income"),
            Self::HandlingIncome => f.write_str("Handling Income"),
            Self::InsuranceIncome => f.write_str("Insurance Income"),
            Self::SalesDiscounts => f.write_str("Sales Discounts"),
            Self::VatPayable => f.write_str("VAT Payable"),
            Self::PostalLevyPayable => f.write_str("Postal Levy Payable"),
            Self::FxTaxPayable => f.write_str("FX Tax Payable"),
            Self::VatCredit => f.write_str("VAT Credit"),
            Self::Payable(supplier) => write!(f, "{PAYABLE_PREFIX}{supplier}"),
            Self::Expense(category) => write!(f, "{EXPENSE_PREFIX}{category}"),
        }
    }
}

impl FromStr for AccountKey {
    type Err = std::convert::Infallible;

    /// Parses an account name; unrecognised names are payment-method accounts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "Cash/Bank" => Self::CashOrBank,
            "Freight Income" => Self::FreightIncome,
            "Handling Income" => Self::HandlingIncome,
            "Insurance Income" => Self::InsuranceIncome,
            "Sales Discounts" => Self::SalesDiscounts,
            "VAT Payable" => Self::VatPayable,
            "Postal Levy Payable" => Self::PostalLevyPayable,
            "FX Tax Payable" => Self::FxTaxPayable,
            "VAT Credit" => Self::VatCredit,
            other => {
                if let Some(client) = other.strip_prefix(RECEIVABLE_PREFIX) {
                    Self::Receivable(client.to_string())
                } else if let Some(supplier) = other.strip_prefix(PAYABLE_PREFIX) {
                    Self::Payable(supplier.to_string())
                } else if let Some(category) = other.strip_prefix(EXPENSE_PREFIX) {
                    Self::Expense(category.to_string())
                } else {
                    Self::PaymentMethod(other.to_string())
                }
            }
        };
        Ok(key)
    }
}

impl Serialize for AccountKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
