//! Report data types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::AccountKey;

/// One account in the trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceRow {
    /// Account.
    #[serde(rename = "accountName")]
    pub account: AccountKey,
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Debit-normal balance.
    pub final_balance: Decimal,
}

/// Trial balance totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceReport {
    /// Report type identifier.
    pub report_type: String,
    /// Account rows in ledger order.
    pub accounts: Vec<TrialBalanceRow>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}
