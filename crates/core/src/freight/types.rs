//! Shipment domain types consumed and produced by the freight calculator.

use freightbooks_shared::types::lenient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Who pays the freight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Sender pays at issuance.
    #[default]
    Prepaid,
    /// Receiver pays upon delivery.
    Collect,
}

/// Settlement currency of a shipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementCurrency {
    /// Local currency.
    #[default]
    Local,
    /// Foreign currency (USD); attracts the FX transaction tax.
    Foreign,
}

/// One line of a shipping manifest.
///
/// Measurements are in kilograms and centimetres. Malformed numeric fields
/// decode as zero, which zeroes this item's contribution only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoItem {
    /// Number of identical units.
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub quantity: u32,
    /// Actual weight of one unit.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub real_weight: Decimal,
    /// Length of one unit.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub length: Decimal,
    /// Width of one unit.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub width: Decimal,
    /// Height of one unit.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub height: Decimal,
    /// Merchandise category reference.
    #[serde(default)]
    pub category_id: Option<String>,
}

/// Shipping manifest ("guide") attached to an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingManifest {
    /// Cargo lines.
    #[serde(default)]
    pub items: Vec<CargoItem>,
    /// Who pays the freight.
    #[serde(default)]
    pub payment_mode: PaymentMode,
    /// Settlement currency.
    #[serde(default)]
    pub currency: SettlementCurrency,
    /// Whether the shipment is insured.
    #[serde(default)]
    pub has_insurance: bool,
    /// Declared merchandise value used as the insurance basis.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub declared_value: Decimal,
    /// Insurance premium as a percentage of the declared value.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub insurance_percent: Decimal,
    /// Whether a freight discount applies.
    #[serde(default)]
    pub has_discount: bool,
    /// Discount as a percentage of freight. Not clamped.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub discount_percent: Decimal,
}

/// Snapshot of the company tariff configuration.
///
/// Passed explicitly to every derivation; the engine never reads it from
/// ambient state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyConfig {
    /// Freight price per chargeable kilogram.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost_per_kg: Decimal,
    /// Official exchange rate. Informational; not used by the calculator.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub bcv_rate: Decimal,
    /// Administrative revision of this configuration.
    #[serde(default)]
    pub version: u64,
}

impl CompanyConfig {
    /// Creates a configuration snapshot.
    #[must_use]
    pub const fn new(cost_per_kg: Decimal, bcv_rate: Decimal, version: u64) -> Self {
        Self {
            cost_per_kg,
            bcv_rate,
            version,
        }
    }
}

/// Complete financial breakdown of a shipment.
///
/// Always derived from a manifest and a configuration; never stored as
/// ledger truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    /// Undiscounted freight (`total chargeable weight * cost per kg`).
    pub freight: Decimal,
    /// Insurance premium on the declared value.
    pub insurance_cost: Decimal,
    /// Fixed handling fee.
    pub handling: Decimal,
    /// Freight discount.
    pub discount: Decimal,
    /// Discounted freight plus insurance and handling.
    pub subtotal: Decimal,
    /// Postal-service levy on small-package freight.
    pub postal_levy: Decimal,
    /// Value added tax. Currently always zero.
    pub vat: Decimal,
    /// Foreign-currency transaction tax.
    pub fx_tax: Decimal,
    /// Amount payable.
    pub total: Decimal,
}

impl Financials {
    /// Freight after the discount is applied.
    #[must_use]
    pub fn freight_after_discount(&self) -> Decimal {
        self.freight - self.discount
    }
}
