//! Normalize, journalize, post and balance in one pass.

use freightbooks_shared::types::TransactionId;
use serde::Serialize;
use tracing::{debug, warn};

use crate::freight::CompanyConfig;
use crate::ledger::{
    DateRange, GeneralLedger, JournalEntry, JournalGenerator, LedgerBuilder, Transaction,
    TransactionNormalizer,
};
use crate::records::{Expense, Invoice, PaymentMethod};
use crate::reports::{ReportService, TrialBalanceReport};

/// Read-only snapshot of the records to derive from.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionInput<'a> {
    /// Sales invoices.
    pub invoices: &'a [Invoice],
    /// Purchase expenses.
    pub expenses: &'a [Expense],
    /// Known payment methods.
    pub payment_methods: &'a [PaymentMethod],
    /// Tariff snapshot.
    pub config: &'a CompanyConfig,
    /// Period of interest.
    pub range: DateRange,
}

/// Everything derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Normalized transactions, most recent first.
    pub transactions: Vec<Transaction>,
    /// One journal entry per transaction, same order.
    pub journal: Vec<JournalEntry>,
    /// General ledger.
    pub ledger: GeneralLedger,
    /// Trial balance over the ledger.
    pub trial_balance: TrialBalanceReport,
    /// Entries whose debits and credits differ.
    pub unbalanced_entries: Vec<TransactionId>,
}

/// Runs the derivation pipeline.
pub struct BookkeepingEngine;

impl BookkeepingEngine {
    /// Derives transactions, journal, ledger and trial balance.
    #[must_use]
    pub fn project(input: &ProjectionInput<'_>) -> Projection {
        let transactions =
            TransactionNormalizer::normalize(input.invoices, input.expenses, &input.range);
        let journal =
            JournalGenerator::generate_all(&transactions, input.config, input.payment_methods);

        let unbalanced_entries: Vec<TransactionId> = journal
            .iter()
            .filter(|entry| !entry.is_balanced())
            .map(|entry| {
                let totals = entry.totals();
                warn!(
                    entry_id = %entry.id,
                    debit = %totals.debit,
                    credit = %totals.credit,
                    "Journal entry is not balanced"
                );
                entry.id
            })
            .collect();

        let ledger = LedgerBuilder::general_ledger(&journal);
        let trial_balance = ReportService::generate_trial_balance(&ledger);

        debug!(
            transactions = transactions.len(),
            accounts = ledger.len(),
            balanced = trial_balance.totals.is_balanced,
            "Projection derived"
        );

        Projection {
            transactions,
            journal,
            ledger,
            trial_balance,
            unbalanced_entries,
        }
    }
}
