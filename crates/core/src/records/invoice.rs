//! Sales invoice records.

use chrono::NaiveDate;
use freightbooks_shared::types::{InvoiceId, PaymentMethodId, lenient};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::freight::{PaymentMode, ShippingManifest};

/// Lifecycle status of an invoice document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet issued.
    Draft,
    /// Issued to the client.
    #[default]
    Issued,
    /// Annulled; carries no fiscal or accounting effect.
    Voided,
}

/// Collection status of an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Not yet collected.
    #[default]
    Pending,
    /// Collected.
    Paid,
}

/// A freight sales invoice with its shipping manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice identifier.
    pub id: InvoiceId,
    /// Printed invoice number.
    #[serde(default)]
    pub invoice_number: String,
    /// Fiscal control number, when assigned.
    #[serde(default)]
    pub control_number: Option<String>,
    /// Issue date.
    #[serde(deserialize_with = "lenient::calendar_day")]
    pub date: NaiveDate,
    /// Document status.
    #[serde(default)]
    pub status: InvoiceStatus,
    /// Collection status.
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// Delivery tracking status. Carried through, never interpreted.
    #[serde(default)]
    pub shipping_status: Option<String>,
    /// Invoiced amount as issued.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_amount: Decimal,
    /// Client display name.
    #[serde(default)]
    pub client_name: String,
    /// Client tax identifier.
    #[serde(default)]
    pub client_rif: Option<String>,
    /// Payment method used to collect, when known.
    #[serde(default)]
    pub payment_method_id: Option<PaymentMethodId>,
    /// Shipping manifest.
    #[serde(default)]
    pub guide: ShippingManifest,
}

impl Invoice {
    /// Returns true if the invoice was annulled.
    #[must_use]
    pub fn is_voided(&self) -> bool {
        self.status == InvoiceStatus::Voided
    }

    /// Returns true if the invoice has been collected.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    /// Returns true if the sender paid at issuance.
    #[must_use]
    pub fn is_paid_on_issue(&self) -> bool {
        self.is_paid() && self.guide.payment_mode == PaymentMode::Prepaid
    }

    /// Returns true if a collect-on-delivery invoice has been collected.
    #[must_use]
    pub fn is_collected_on_delivery(&self) -> bool {
        self.is_paid() && self.guide.payment_mode == PaymentMode::Collect
    }
}
