//! Property-based tests for the freight calculator.
//!
//! - Determinism: identical inputs yield identical breakdowns
//! - Composition: total equals the sum of its components
//! - Postal levy never exceeds the levy rate applied to total freight

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::{FreightCalculator, HANDLING_FEE, POSTAL_LEVY_RATE};
use super::types::{
    CargoItem, CompanyConfig, PaymentMode, SettlementCurrency, ShippingManifest,
};

/// Strategy for measurements with two decimals (0.00 to 999.99).
fn measure() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn percent() -> impl Strategy<Value = Decimal> {
    (0i64..10_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn cargo_item() -> impl Strategy<Value = CargoItem> {
    (0u32..20, measure(), measure(), measure(), measure()).prop_map(
        |(quantity, real_weight, length, width, height)| CargoItem {
            quantity,
            real_weight,
            length,
            width,
            height,
            category_id: None,
        },
    )
}

fn manifest() -> impl Strategy<Value = ShippingManifest> {
    (
        prop::collection::vec(cargo_item(), 0..6),
        any::<bool>(),
        any::<bool>(),
        measure(),
        percent(),
        any::<bool>(),
        percent(),
    )
        .prop_map(
            |(items, collect, foreign, declared_value, insurance_percent, has_discount, discount_percent)| {
                ShippingManifest {
                    items,
                    payment_mode: if collect { PaymentMode::Collect } else { PaymentMode::Prepaid },
                    currency: if foreign {
                        SettlementCurrency::Foreign
                    } else {
                        SettlementCurrency::Local
                    },
                    has_insurance: declared_value > Decimal::ZERO,
                    declared_value,
                    insurance_percent,
                    has_discount,
                    discount_percent,
                }
            },
        )
}

fn company() -> impl Strategy<Value = CompanyConfig> {
    (0i64..5_000i64).prop_map(|n| CompanyConfig::new(Decimal::new(n, 2), Decimal::ONE, 1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Same manifest and configuration always produce the same breakdown.
    #[test]
    fn prop_calculation_is_deterministic(guide in manifest(), config in company()) {
        let first = FreightCalculator::calculate(&guide, &config);
        let second = FreightCalculator::calculate(&guide, &config);
        prop_assert_eq!(first, second);
    }

    /// The total is composed exactly from its parts.
    #[test]
    fn prop_total_is_sum_of_components(guide in manifest(), config in company()) {
        let f = FreightCalculator::calculate(&guide, &config);
        prop_assert_eq!(
            f.subtotal,
            f.freight - f.discount + f.insurance_cost + f.handling
        );
        prop_assert_eq!(f.total, f.subtotal + f.postal_levy + f.vat + f.fx_tax);
        prop_assert_eq!(f.vat, Decimal::ZERO);
    }

    /// Handling is charged exactly when there is chargeable weight.
    #[test]
    fn prop_handling_follows_weight(guide in manifest(), config in company()) {
        let f = FreightCalculator::calculate(&guide, &config);
        let weight: Decimal = guide.items.iter().map(FreightCalculator::chargeable_weight).sum();
        let expected = if weight > Decimal::ZERO { HANDLING_FEE } else { Decimal::ZERO };
        prop_assert_eq!(f.handling, expected);
    }

    /// The postal levy base is a subset of total freight.
    #[test]
    fn prop_postal_levy_bounded_by_freight(guide in manifest(), config in company()) {
        let f = FreightCalculator::calculate(&guide, &config);
        prop_assert!(f.postal_levy >= Decimal::ZERO);
        prop_assert!(f.postal_levy <= f.freight * POSTAL_LEVY_RATE);
    }

    /// Local settlements never carry the FX tax.
    #[test]
    fn prop_local_currency_has_no_fx_tax(mut guide in manifest(), config in company()) {
        guide.currency = SettlementCurrency::Local;
        let f = FreightCalculator::calculate(&guide, &config);
        prop_assert_eq!(f.fx_tax, Decimal::ZERO);
    }
}
