//! General and subsidiary ledgers.
//!
//! Both ledgers share one roll-up path so the balances of an account are
//! identical whichever view produced them. Balances are debit-normal:
//! `running_balance += debit - credit`, whatever the nature of the account.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use freightbooks_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::Serialize;

use super::account::AccountKey;
use super::entry::JournalEntry;

/// One posting as seen from an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerLine {
    /// Journal entry the posting belongs to.
    pub entry_id: TransactionId,
    /// Entry date.
    pub date: NaiveDate,
    /// Entry description.
    pub description: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Balance after this posting.
    pub running_balance: Decimal,
}

/// All postings of one account, chronologically, with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerAccount {
    /// Account identity.
    #[serde(rename = "accountName")]
    pub account: AccountKey,
    /// Postings sorted ascending by date.
    pub entries: Vec<LedgerLine>,
    /// Sum of debits.
    pub total_debit: Decimal,
    /// Sum of credits.
    pub total_credit: Decimal,
    /// `total_debit - total_credit`.
    pub final_balance: Decimal,
}

impl LedgerAccount {
    /// An account with no postings.
    #[must_use]
    pub fn empty(account: AccountKey) -> Self {
        Self {
            account,
            entries: Vec::new(),
            total_debit: Decimal::ZERO,
            total_credit: Decimal::ZERO,
            final_balance: Decimal::ZERO,
        }
    }
}

/// General ledger keyed by account.
pub type GeneralLedger = BTreeMap<AccountKey, LedgerAccount>;

/// Builder of ledgers from journal entries.
pub struct LedgerBuilder;

impl LedgerBuilder {
    /// Groups every posting by account and rolls each account up.
    ///
    /// Accounts appear only if at least one line references them.
    #[must_use]
    pub fn general_ledger(entries: &[JournalEntry]) -> GeneralLedger {
        let mut postings: BTreeMap<AccountKey, Vec<LedgerLine>> = BTreeMap::new();
        for entry in entries {
            for line in &entry.lines {
                postings
                    .entry(line.account.clone())
                    .or_default()
                    .push(Self::posting(entry, line.debit, line.credit));
            }
        }

        postings
            .into_iter()
            .map(|(account, lines)| {
                let rolled = Self::roll_up(account.clone(), lines);
                (account, rolled)
            })
            .collect()
    }

    /// Postings of a single account.
    ///
    /// Taken from the general ledger so both views always agree. An account
    /// nobody posted to yields an empty, all-zero ledger.
    #[must_use]
    pub fn subsidiary_ledger(entries: &[JournalEntry], account: &AccountKey) -> LedgerAccount {
        Self::general_ledger(entries)
            .remove(account)
            .unwrap_or_else(|| LedgerAccount::empty(account.clone()))
    }

    fn posting(entry: &JournalEntry, debit: Decimal, credit: Decimal) -> LedgerLine {
        LedgerLine {
            entry_id: entry.id,
            date: entry.date,
            description: entry.description.clone(),
            debit,
            credit,
            running_balance: Decimal::ZERO,
        }
    }

    /// Sorts postings by date (stable) and accumulates the running balance.
    fn roll_up(account: AccountKey, mut lines: Vec<LedgerLine>) -> LedgerAccount {
        lines.sort_by_key(|l| l.date);

        let mut ledger = LedgerAccount::empty(account);
        let mut balance = Decimal::ZERO;
        for mut line in lines {
            balance += line.debit - line.credit;
            line.running_balance = balance;
            ledger.total_debit += line.debit;
            ledger.total_credit += line.credit;
            ledger.entries.push(line);
        }
        ledger.final_balance = ledger.total_debit - ledger.total_credit;
        ledger
    }
}
