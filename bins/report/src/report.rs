//! Report rendering over one snapshot.

use anyhow::{Context, Result, bail};
use freightbooks_core::fiscal::{PurchasesBook, SalesBook};
use freightbooks_core::freight::{
    ChargeAllocator, CompanyConfig, Financials, FreightCalculator, ItemCharges,
};
use freightbooks_core::ledger::{DateRange, LedgerBuilder};
use freightbooks_core::projection::{ProjectionCache, ProjectionInput};
use freightbooks_core::records::{Expense, Invoice, PaymentMethod};
use freightbooks_shared::AppConfig;
use freightbooks_shared::types::InvoiceId;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::cli::Command;

/// Records exported by the back-office API.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Sales invoices, voided ones included.
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    /// Purchase expenses.
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Payment methods referenced by records.
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    /// Tariff override; the configured company settings apply otherwise.
    #[serde(default)]
    pub company: Option<CompanyConfig>,
}

/// Breakdown of one invoice with its per-item charges.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InvoiceFinancials<'a> {
    invoice_id: InvoiceId,
    invoice_number: &'a str,
    financials: Financials,
    items: Vec<ItemCharges>,
}

/// Everything needed to render any report.
pub struct ReportContext {
    snapshot: Snapshot,
    config: CompanyConfig,
    range: DateRange,
    cache: ProjectionCache,
}

impl ReportContext {
    /// Builds the context, resolving the tariff from the snapshot or settings.
    #[must_use]
    pub fn new(mut snapshot: Snapshot, settings: &AppConfig, range: DateRange) -> Self {
        let config = snapshot.company.take().unwrap_or_else(|| {
            CompanyConfig::new(
                settings.company.cost_per_kg,
                settings.company.bcv_rate,
                settings.company.version,
            )
        });
        let cache = ProjectionCache::with_config(settings.cache.capacity, settings.cache.ttl_secs);

        Self {
            snapshot,
            config,
            range,
            cache,
        }
    }

    fn input(&self) -> ProjectionInput<'_> {
        ProjectionInput {
            invoices: &self.snapshot.invoices,
            expenses: &self.snapshot.expenses,
            payment_methods: &self.snapshot.payment_methods,
            config: &self.config,
            range: self.range,
        }
    }

    /// Renders one report as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a requested invoice does not exist or a report
    /// cannot be serialized.
    pub fn render(&self, command: &Command) -> Result<Value> {
        let projection = self.cache.get_or_project(&self.input());
        debug!(?command, "Rendering report");

        let value = match command {
            Command::Transactions => serde_json::to_value(&projection.transactions)?,
            Command::Journal => serde_json::to_value(&projection.journal)?,
            Command::Ledger => serde_json::to_value(&projection.ledger)?,
            Command::Account { name } => {
                serde_json::to_value(LedgerBuilder::subsidiary_ledger(&projection.journal, name))?
            }
            Command::TrialBalance => serde_json::to_value(&projection.trial_balance)?,
            Command::SalesBook => serde_json::to_value(SalesBook::build(
                &self.snapshot.invoices,
                &self.range,
                &self.config,
            ))?,
            Command::PurchasesBook => {
                serde_json::to_value(PurchasesBook::build(&projection.transactions))?
            }
            Command::Financials { invoice } => self.financials(invoice.as_deref())?,
            Command::All => json!({
                "transactions": self.render(&Command::Transactions)?,
                "journal": self.render(&Command::Journal)?,
                "ledger": self.render(&Command::Ledger)?,
                "trialBalance": self.render(&Command::TrialBalance)?,
                "salesBook": self.render(&Command::SalesBook)?,
                "purchasesBook": self.render(&Command::PurchasesBook)?,
            }),
        };
        Ok(value)
    }

    fn financials(&self, number: Option<&str>) -> Result<Value> {
        let rows: Vec<InvoiceFinancials<'_>> = self
            .snapshot
            .invoices
            .iter()
            .filter(|invoice| self.range.contains(invoice.date))
            .filter(|invoice| number.is_none_or(|n| invoice.invoice_number == n))
            .map(|invoice| {
                let financials = FreightCalculator::calculate(&invoice.guide, &self.config);
                InvoiceFinancials {
                    invoice_id: invoice.id,
                    invoice_number: &invoice.invoice_number,
                    items: ChargeAllocator::allocate(&invoice.guide, &financials, &self.config),
                    financials,
                }
            })
            .collect();

        if let Some(number) = number
            && rows.is_empty()
        {
            bail!("invoice {number} not found in the selected period");
        }
        serde_json::to_value(rows).context("serializing invoice financials")
    }
}
