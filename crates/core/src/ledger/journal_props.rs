//! Property-based tests for journal synthesis and ledger roll-up.
//!
//! - Every generated entry is balanced, collection-on-delivery included
//! - A subsidiary ledger equals the general ledger's view of that account
//! - Account balances sum to the journal's net movement

use chrono::NaiveDate;
use freightbooks_shared::types::{ExpenseId, InvoiceId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::LedgerBuilder;
use super::generator::JournalGenerator;
use super::transaction::Transaction;
use crate::freight::{CargoItem, CompanyConfig, PaymentMode, SettlementCurrency, ShippingManifest};
use crate::records::{Expense, ExpenseStatus, Invoice, InvoiceStatus, PaymentStatus};

fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Discounts up to 100% keep every charge non-negative.
fn percent() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (1u32..=28).prop_map(|d| NaiveDate::from_ymd_opt(2024, 2, d).unwrap())
}

fn cargo_item() -> impl Strategy<Value = CargoItem> {
    (0u32..10, amount(), amount(), amount()).prop_map(|(quantity, real_weight, length, width)| {
        CargoItem {
            quantity,
            real_weight,
            length,
            width,
            height: Decimal::TEN,
            category_id: None,
        }
    })
}

fn invoice() -> impl Strategy<Value = Invoice> {
    (
        prop::collection::vec(cargo_item(), 0..4),
        any::<(bool, bool, bool, bool, bool)>(),
        amount(),
        percent(),
        percent(),
        date(),
        prop_oneof![Just("Acme"), Just("Beta"), Just("Delta")],
    )
        .prop_map(
            |(items, (collect, foreign, insured, discounted, paid), declared, ins_pct, disc_pct, date, client)| {
                Invoice {
                    id: InvoiceId::new(),
                    invoice_number: "F-1".into(),
                    control_number: None,
                    date,
                    status: InvoiceStatus::Issued,
                    payment_status: if paid { PaymentStatus::Paid } else { PaymentStatus::Pending },
                    shipping_status: None,
                    total_amount: Decimal::ZERO,
                    client_name: client.into(),
                    client_rif: None,
                    payment_method_id: None,
                    guide: ShippingManifest {
                        items,
                        payment_mode: if collect { PaymentMode::Collect } else { PaymentMode::Prepaid },
                        currency: if foreign {
                            SettlementCurrency::Foreign
                        } else {
                            SettlementCurrency::Local
                        },
                        has_insurance: insured,
                        declared_value: declared,
                        insurance_percent: ins_pct,
                        has_discount: discounted,
                        discount_percent: disc_pct,
                    },
                }
            },
        )
}

/// Expenses whose gross amount is base plus VAT.
fn expense() -> impl Strategy<Value = Expense> {
    (amount(), amount(), any::<bool>(), date(), prop_oneof![Just("Fuel"), Just("Tolls")]).prop_map(
        |(base, vat, paid, date, category)| Expense {
            id: ExpenseId::new(),
            date,
            status: if paid { ExpenseStatus::Paid } else { ExpenseStatus::Pending },
            amount: base + vat,
            taxable_base: Some(base),
            vat_amount: vat,
            category: category.into(),
            description: None,
            supplier_name: "Supplier".into(),
            supplier_rif: None,
            invoice_number: None,
            payment_method_id: None,
        },
    )
}

fn transactions() -> impl Strategy<Value = Vec<Transaction>> {
    (
        prop::collection::vec(invoice(), 0..6),
        prop::collection::vec(expense(), 0..6),
    )
        .prop_map(|(invoices, expenses)| {
            invoices
                .iter()
                .map(Transaction::from_invoice)
                .chain(expenses.iter().map(Transaction::from_expense))
                .collect()
        })
}

fn company() -> impl Strategy<Value = CompanyConfig> {
    (0i64..5_000i64).prop_map(|n| CompanyConfig::new(Decimal::new(n, 2), Decimal::ONE, 1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every synthesized entry has equal debit and credit sides.
    #[test]
    fn prop_generated_entries_are_balanced(txs in transactions(), config in company()) {
        for entry in JournalGenerator::generate_all(&txs, &config, &[]) {
            let totals = entry.totals();
            prop_assert!(totals.is_balanced, "unbalanced {}: {:?}", entry.description, totals);
        }
    }

    /// One entry per transaction, sharing its identity.
    #[test]
    fn prop_one_entry_per_transaction(txs in transactions(), config in company()) {
        let entries = JournalGenerator::generate_all(&txs, &config, &[]);
        prop_assert_eq!(entries.len(), txs.len());
        for (tx, entry) in txs.iter().zip(&entries) {
            prop_assert_eq!(tx.id, entry.id);
            prop_assert_eq!(tx.date, entry.date);
        }
    }

    /// The subsidiary view of each account equals the general ledger's.
    #[test]
    fn prop_subsidiary_equals_general(txs in transactions(), config in company()) {
        let entries = JournalGenerator::generate_all(&txs, &config, &[]);
        let general = LedgerBuilder::general_ledger(&entries);
        for (account, ledger) in &general {
            prop_assert_eq!(&LedgerBuilder::subsidiary_ledger(&entries, account), ledger);
        }
    }

    /// Final balances follow the postings and sum to zero for a balanced journal.
    #[test]
    fn prop_balances_follow_postings(txs in transactions(), config in company()) {
        let entries = JournalGenerator::generate_all(&txs, &config, &[]);
        let general = LedgerBuilder::general_ledger(&entries);

        let mut net = Decimal::ZERO;
        for ledger in general.values() {
            prop_assert_eq!(ledger.final_balance, ledger.total_debit - ledger.total_credit);
            let last = ledger.entries.last().map_or(Decimal::ZERO, |l| l.running_balance);
            prop_assert_eq!(last, ledger.final_balance);
            prop_assert!(ledger.entries.windows(2).all(|w| w[0].date <= w[1].date));
            net += ledger.final_balance;
        }
        prop_assert_eq!(net, Decimal::ZERO);
    }
}
