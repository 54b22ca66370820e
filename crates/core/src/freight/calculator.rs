//! Shipment financial breakdown.
//!
//! Pure, deterministic derivation of [`Financials`] from a manifest and a
//! tariff snapshot. No rounding is applied here; amounts keep full decimal
//! precision so downstream aggregation never compounds rounding error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{CargoItem, CompanyConfig, Financials, SettlementCurrency, ShippingManifest};

/// Divisor converting cubic centimetres to volumetric kilograms.
pub const VOLUMETRIC_DIVISOR: Decimal = dec!(5000);

/// Flat handling fee charged on any shipment with chargeable weight.
pub const HANDLING_FEE: Decimal = dec!(10);

/// Postal-service levy rate on small-package freight.
pub const POSTAL_LEVY_RATE: Decimal = dec!(0.06);

/// Heaviest per-unit chargeable weight (inclusive) subject to the postal levy.
pub const POSTAL_LEVY_MAX_WEIGHT: Decimal = dec!(30.99);

/// VAT rate. The cooperative's regime suppresses VAT on freight.
pub const VAT_RATE: Decimal = Decimal::ZERO;

/// Foreign-currency transaction tax rate.
pub const FX_TAX_RATE: Decimal = dec!(0.03);

/// Freight calculator.
///
/// Holds no state: the same manifest and configuration always produce the
/// same [`Financials`].
pub struct FreightCalculator;

impl FreightCalculator {
    /// Volumetric weight of one unit: `(L * W * H) / 5000`.
    ///
    /// Zero when the dimensions overflow the decimal range.
    #[must_use]
    pub fn volumetric_weight(item: &CargoItem) -> Decimal {
        Self::checked_volumetric_weight(item).unwrap_or(Decimal::ZERO)
    }

    /// Chargeable weight of one unit: the larger of real and volumetric weight.
    #[must_use]
    pub fn chargeable_weight_per_unit(item: &CargoItem) -> Decimal {
        Self::checked_weight_per_unit(item).unwrap_or(Decimal::ZERO)
    }

    /// Chargeable weight of the whole line.
    #[must_use]
    pub fn chargeable_weight(item: &CargoItem) -> Decimal {
        Self::checked_line_weight(item).unwrap_or(Decimal::ZERO)
    }

    /// Undiscounted freight of one line.
    #[must_use]
    pub fn item_freight(item: &CargoItem, config: &CompanyConfig) -> Decimal {
        Self::checked_line_weight(item)
            .and_then(|weight| weight.checked_mul(config.cost_per_kg))
            .unwrap_or(Decimal::ZERO)
    }

    /// Whether a line is a small package subject to the postal levy.
    ///
    /// Per-unit chargeable weight must lie in `(0, 30.99]`.
    #[must_use]
    pub fn is_levy_eligible(item: &CargoItem) -> bool {
        let per_unit = Self::chargeable_weight_per_unit(item);
        per_unit > Decimal::ZERO && per_unit <= POSTAL_LEVY_MAX_WEIGHT
    }

    /// Computes the complete financial breakdown of a shipment.
    ///
    /// A line whose figures overflow contributes nothing; the rest of the
    /// manifest is still priced.
    #[must_use]
    pub fn calculate(manifest: &ShippingManifest, config: &CompanyConfig) -> Financials {
        let total_weight = checked_sum(manifest.items.iter().map(Self::chargeable_weight));
        let freight = checked_sum(
            manifest
                .items
                .iter()
                .map(|item| Self::item_freight(item, config)),
        );

        let discount = if manifest.has_discount {
            percent_of(freight, manifest.discount_percent)
        } else {
            Decimal::ZERO
        };

        let insurance_cost = if manifest.has_insurance {
            percent_of(manifest.declared_value, manifest.insurance_percent)
        } else {
            Decimal::ZERO
        };

        let handling = if total_weight > Decimal::ZERO {
            HANDLING_FEE
        } else {
            Decimal::ZERO
        };

        let subtotal = checked_sum([freight, -discount, insurance_cost, handling]);

        let postal_levy_base = checked_sum(
            manifest
                .items
                .iter()
                .filter(|item| Self::is_levy_eligible(item))
                .map(|item| Self::item_freight(item, config)),
        );
        let postal_levy = product(postal_levy_base, POSTAL_LEVY_RATE);

        let vat = product(subtotal, VAT_RATE);
        let pre_fx_total = checked_sum([subtotal, postal_levy, vat]);

        let fx_tax = match manifest.currency {
            SettlementCurrency::Foreign => product(pre_fx_total, FX_TAX_RATE),
            SettlementCurrency::Local => Decimal::ZERO,
        };

        Financials {
            freight,
            insurance_cost,
            handling,
            discount,
            subtotal,
            postal_levy,
            vat,
            fx_tax,
            total: checked_sum([pre_fx_total, fx_tax]),
        }
    }

    fn checked_volumetric_weight(item: &CargoItem) -> Option<Decimal> {
        item.length
            .checked_mul(item.width)?
            .checked_mul(item.height)?
            .checked_div(VOLUMETRIC_DIVISOR)
    }

    fn checked_weight_per_unit(item: &CargoItem) -> Option<Decimal> {
        Self::checked_volumetric_weight(item).map(|volumetric| item.real_weight.max(volumetric))
    }

    fn checked_line_weight(item: &CargoItem) -> Option<Decimal> {
        Self::checked_weight_per_unit(item)?.checked_mul(Decimal::from(item.quantity))
    }
}

/// Sums the amounts, skipping any that would overflow the running total.
fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount).unwrap_or(acc)
    })
}

fn product(amount: Decimal, rate: Decimal) -> Decimal {
    amount.checked_mul(rate).unwrap_or(Decimal::ZERO)
}

fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount
        .checked_mul(percent)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}
