//! Report generation service.

use rust_decimal::Decimal;

use super::types::{TrialBalanceReport, TrialBalanceRow, TrialBalanceTotals};
use crate::ledger::GeneralLedger;

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates a trial balance from the general ledger.
    ///
    /// The trial balance verifies that total debits equal total credits. No
    /// correction is applied when they differ.
    #[must_use]
    pub fn generate_trial_balance(ledger: &GeneralLedger) -> TrialBalanceReport {
        let accounts: Vec<TrialBalanceRow> = ledger
            .values()
            .map(|account| TrialBalanceRow {
                account: account.account.clone(),
                total_debit: account.total_debit,
                total_credit: account.total_credit,
                final_balance: account.final_balance,
            })
            .collect();

        let total_debit: Decimal = accounts.iter().map(|a| a.total_debit).sum();
        let total_credit: Decimal = accounts.iter().map(|a| a.total_credit).sum();

        TrialBalanceReport {
            report_type: "trial_balance".to_string(),
            accounts,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                is_balanced: total_debit == total_credit,
            },
        }
    }
}
