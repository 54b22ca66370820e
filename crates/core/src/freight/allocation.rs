//! Per-item apportionment of shipment charges.
//!
//! Invoice detail views show each cargo line with its share of the
//! shipment-level charges. This allocator consumes an already computed
//! [`Financials`] and never feeds back into the ledger.
//!
//! Shares are rounded to cents with the Largest Remainder Method, so every
//! allocated column sums exactly to the rounded shipment amount.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::calculator::FreightCalculator;
use super::types::{CompanyConfig, Financials, ShippingManifest};

/// Decimal places of allocated amounts.
pub const ALLOCATION_DECIMAL_PLACES: u32 = 2;

/// Charges attributed to one cargo line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCharges {
    /// Position of the line in the manifest.
    pub index: usize,
    /// Undiscounted freight of the line.
    pub freight: Decimal,
    /// Share of the freight discount.
    pub discount: Decimal,
    /// Share of the insurance premium.
    pub insurance_cost: Decimal,
    /// Share of the handling fee.
    pub handling: Decimal,
    /// Share of the postal levy (small-package lines only).
    pub postal_levy: Decimal,
    /// Share of the FX transaction tax.
    pub fx_tax: Decimal,
    /// Line total.
    pub total: Decimal,
}

/// Allocator for shipment-level charges.
pub struct ChargeAllocator;

impl ChargeAllocator {
    /// Splits the shipment charges over the manifest's cargo lines.
    ///
    /// Discount, insurance, handling and FX tax follow each line's freight
    /// share; the postal levy follows freight among levy-eligible lines only.
    /// With no freight at all, shared charges land on the first line.
    #[must_use]
    pub fn allocate(
        manifest: &ShippingManifest,
        financials: &Financials,
        config: &CompanyConfig,
    ) -> Vec<ItemCharges> {
        if manifest.items.is_empty() {
            return vec![];
        }

        let freights: Vec<Decimal> = manifest
            .items
            .iter()
            .map(|item| FreightCalculator::item_freight(item, config))
            .collect();
        let levy_weights: Vec<Decimal> = manifest
            .items
            .iter()
            .zip(&freights)
            .map(|(item, freight)| {
                if FreightCalculator::is_levy_eligible(item) {
                    *freight
                } else {
                    Decimal::ZERO
                }
            })
            .collect();

        let dp = ALLOCATION_DECIMAL_PLACES;
        let freight = Self::allocate_by_weights(financials.freight, &freights, dp);
        let discount = Self::allocate_by_weights(financials.discount, &freights, dp);
        let insurance = Self::allocate_by_weights(financials.insurance_cost, &freights, dp);
        let handling = Self::allocate_by_weights(financials.handling, &freights, dp);
        let postal_levy = Self::allocate_by_weights(financials.postal_levy, &levy_weights, dp);
        let fx_tax = Self::allocate_by_weights(financials.fx_tax, &freights, dp);

        (0..manifest.items.len())
            .map(|i| ItemCharges {
                index: i,
                freight: freight[i],
                discount: discount[i],
                insurance_cost: insurance[i],
                handling: handling[i],
                postal_levy: postal_levy[i],
                fx_tax: fx_tax[i],
                total: freight[i] - discount[i] + insurance[i] + handling[i] + postal_levy[i]
                    + fx_tax[i],
            })
            .collect()
    }

    /// Allocate `total` proportionally to non-negative `weights`.
    ///
    /// The result always sums to `total` rounded to `decimal_places`. When all
    /// weights are zero the whole amount goes to the first slot.
    #[must_use]
    pub fn allocate_by_weights(
        total: Decimal,
        weights: &[Decimal],
        decimal_places: u32,
    ) -> Vec<Decimal> {
        if weights.is_empty() {
            return vec![];
        }

        let total_rounded =
            total.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
        let mut weights: Vec<Decimal> = weights.iter().map(|w| (*w).max(Decimal::ZERO)).collect();
        let weight_sum = match weights.iter().try_fold(Decimal::ZERO, |acc, w| acc.checked_add(*w)) {
            Some(sum) => sum,
            None => {
                // Shares only depend on ratios; rescale so the sum fits.
                let scale = Decimal::from(weights.len() + 1);
                for w in &mut weights {
                    *w /= scale;
                }
                weights.iter().copied().sum()
            }
        };

        let mut result = vec![Decimal::ZERO; weights.len()];
        if weight_sum.is_zero() {
            result[0] = total_rounded;
            return result;
        }

        // Work on the magnitude so truncation always leaves a non-negative remainder.
        let magnitude = total_rounded.abs();
        let unit = Decimal::new(1, decimal_places);

        let exact: Vec<Decimal> = weights
            .iter()
            .map(|&w| {
                // Fall back to dividing first when the product overflows; the
                // share is at most one so the second product cannot.
                magnitude
                    .checked_mul(w)
                    .map_or_else(|| magnitude * (w / weight_sum), |scaled| scaled / weight_sum)
            })
            .collect();

        for (slot, share) in result.iter_mut().zip(&exact) {
            *slot = share.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero);
        }

        let allocated: Decimal = result.iter().copied().sum();
        let units_to_distribute = ((magnitude - allocated) / unit)
            .round_dp_with_strategy(0, RoundingStrategy::ToZero)
            .to_usize()
            .unwrap_or(0);

        if units_to_distribute > 0 {
            let mut remainders: Vec<(usize, Decimal)> = exact
                .iter()
                .zip(result.iter())
                .enumerate()
                .map(|(i, (e, r))| (i, *e - *r))
                .collect();
            // Stable: equal remainders favour earlier lines.
            remainders.sort_by(|a, b| b.1.cmp(&a.1));

            for (idx, _) in remainders.iter().take(units_to_distribute) {
                result[*idx] += unit;
            }
        }

        if total_rounded.is_sign_negative() {
            for slot in &mut result {
                *slot = -*slot;
            }
        }

        result
    }
}
