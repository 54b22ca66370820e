//! Sales book.

use chrono::NaiveDate;
use freightbooks_shared::types::InvoiceId;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::freight::{CompanyConfig, Financials, FreightCalculator};
use crate::ledger::DateRange;
use crate::records::Invoice;

/// One invoice as declared in the sales book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesBookRow {
    /// Invoice date.
    pub date: NaiveDate,
    /// Source invoice.
    pub invoice_id: InvoiceId,
    /// Invoice number.
    pub invoice_number: String,
    /// Fiscal control number.
    pub control_number: Option<String>,
    /// Client display name.
    pub client_name: String,
    /// Client tax identifier.
    pub client_rif: Option<String>,
    /// Annulled invoice, listed with zero amounts.
    pub voided: bool,
    /// Taxable base (the shipment subtotal).
    pub taxable_base: Decimal,
    /// VAT.
    pub vat: Decimal,
    /// Postal levy.
    pub postal_levy: Decimal,
    /// FX transaction tax.
    pub fx_tax: Decimal,
    /// Invoice total.
    pub total: Decimal,
}

/// Column totals of the sales book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesBookTotals {
    /// Sum of taxable bases.
    pub taxable_base: Decimal,
    /// Sum of VAT.
    pub vat: Decimal,
    /// Sum of postal levies.
    pub postal_levy: Decimal,
    /// Sum of FX taxes.
    pub fx_tax: Decimal,
    /// Sum of totals.
    pub total: Decimal,
}

/// Sales book for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesBook {
    /// Rows ascending by date.
    pub rows: Vec<SalesBookRow>,
    /// Column totals.
    pub totals: SalesBookTotals,
}

impl SalesBook {
    /// Builds the sales book of every invoice dated within `range`.
    ///
    /// Voided invoices stay visible with zeroed amounts so the numbering
    /// sequence has no gaps.
    #[must_use]
    pub fn build(invoices: &[Invoice], range: &DateRange, config: &CompanyConfig) -> Self {
        let mut rows: Vec<SalesBookRow> = invoices
            .iter()
            .filter(|invoice| range.contains(invoice.date))
            .map(|invoice| Self::row(invoice, config))
            .collect();
        rows.sort_by_key(|row| row.date);

        let totals = rows.iter().fold(SalesBookTotals::default(), |mut acc, row| {
            acc.taxable_base += row.taxable_base;
            acc.vat += row.vat;
            acc.postal_levy += row.postal_levy;
            acc.fx_tax += row.fx_tax;
            acc.total += row.total;
            acc
        });

        Self { rows, totals }
    }

    fn row(invoice: &Invoice, config: &CompanyConfig) -> SalesBookRow {
        let voided = invoice.is_voided();
        let financials = if voided {
            Financials::default()
        } else {
            FreightCalculator::calculate(&invoice.guide, config)
        };

        SalesBookRow {
            date: invoice.date,
            invoice_id: invoice.id,
            invoice_number: invoice.invoice_number.clone(),
            control_number: invoice.control_number.clone(),
            client_name: invoice.client_name.clone(),
            client_rif: invoice.client_rif.clone(),
            voided,
            taxable_base: financials.subtotal,
            vat: financials.vat,
            postal_levy: financials.postal_levy,
            fx_tax: financials.fx_tax,
            total: financials.total,
        }
    }
}
