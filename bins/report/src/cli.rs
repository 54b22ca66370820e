//! Command-line surface.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use freightbooks_core::ledger::AccountKey;

/// Derive accounting reports from a Freightbooks record snapshot.
#[derive(Parser, Debug)]
#[command(name = "freightbooks-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON snapshot with `invoices`, `expenses`, `paymentMethods` and an
    /// optional `company` override.
    #[arg(short, long, env = "FREIGHTBOOKS_SNAPSHOT", value_name = "FILE")]
    pub snapshot: PathBuf,

    /// First day of the period (inclusive).
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    pub from: Option<NaiveDate>,

    /// Last day of the period (inclusive).
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    pub to: Option<NaiveDate>,

    /// Report to print.
    #[command(subcommand)]
    pub command: Command,
}

/// Available reports.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Normalized transactions, most recent first.
    Transactions,
    /// Journal entries.
    Journal,
    /// General ledger of every account.
    Ledger,
    /// Subsidiary ledger of one account, by display name.
    Account {
        /// Account name, e.g. "Accounts Receivable – Acme" or "Freight Income".
        name: AccountKey,
    },
    /// Trial balance.
    TrialBalance,
    /// Sales book.
    SalesBook,
    /// Purchases book.
    PurchasesBook,
    /// Financial breakdown and per-item charges of each invoice.
    Financials {
        /// Restrict to one invoice number.
        #[arg(long)]
        invoice: Option<String>,
    },
    /// Every report at once.
    All,
}
