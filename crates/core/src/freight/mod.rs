//! Shipment financial derivation.
//!
//! - `types` - cargo manifest, tariff snapshot and the resulting breakdown
//! - `calculator` - freight, insurance, handling, discount, levy and tax rules
//! - `allocation` - apportionment of shipment charges to cargo lines

pub mod allocation;
pub mod calculator;
pub mod types;

#[cfg(test)]
mod calculator_props;

pub use allocation::{ChargeAllocator, ItemCharges};
pub use calculator::FreightCalculator;
pub use types::{
    CargoItem, CompanyConfig, Financials, PaymentMode, SettlementCurrency, ShippingManifest,
};
