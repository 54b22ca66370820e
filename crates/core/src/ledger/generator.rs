//! Journal entry synthesis.
//!
//! Each transaction becomes exactly one journal entry. Income entries are
//! derived from the invoice's re-computed [`Financials`], never from the
//! stored invoice total.

use rust_decimal::Decimal;

use super::account::AccountKey;
use super::entry::{JournalEntry, JournalEntryLine};
use super::transaction::{Transaction, TransactionSource};
use crate::freight::{CompanyConfig, Financials, FreightCalculator};
use crate::records::{Expense, Invoice, PaymentMethod};

/// Generator of journal entries from normalized transactions.
pub struct JournalGenerator;

impl JournalGenerator {
    /// Synthesizes the journal entry for one transaction.
    #[must_use]
    pub fn generate(
        transaction: &Transaction,
        config: &CompanyConfig,
        payment_methods: &[PaymentMethod],
    ) -> JournalEntry {
        match &transaction.source {
            TransactionSource::Invoice(invoice) => {
                Self::income_entry(transaction, invoice, config, payment_methods)
            }
            TransactionSource::Expense(expense) => {
                Self::expense_entry(transaction, expense, payment_methods)
            }
        }
    }

    /// Synthesizes entries for a batch, preserving transaction order.
    #[must_use]
    pub fn generate_all(
        transactions: &[Transaction],
        config: &CompanyConfig,
        payment_methods: &[PaymentMethod],
    ) -> Vec<JournalEntry> {
        transactions
            .iter()
            .map(|tx| Self::generate(tx, config, payment_methods))
            .collect()
    }

    /// Sales invoice.
    ///
    /// The debit leg hits the treasury account only when the sender paid at
    /// issuance; otherwise the client's receivable. A collected
    /// collect-on-delivery invoice additionally books the collection
    /// (treasury debit, receivable credit) inside the same entry.
    fn income_entry(
        transaction: &Transaction,
        invoice: &Invoice,
        config: &CompanyConfig,
        payment_methods: &[PaymentMethod],
    ) -> JournalEntry {
        let financials = FreightCalculator::calculate(&invoice.guide, config);
        let treasury = AccountKey::treasury(payment_methods, invoice.payment_method_id);
        let receivable = AccountKey::Receivable(invoice.client_name.clone());

        let debit_account = if invoice.is_paid_on_issue() {
            treasury.clone()
        } else {
            receivable.clone()
        };

        let mut lines = vec![JournalEntryLine::debit(debit_account, financials.total)];
        Self::push_revenue_lines(&mut lines, &financials);

        if invoice.is_collected_on_delivery() {
            lines.push(JournalEntryLine::debit(treasury, financials.total));
            lines.push(JournalEntryLine::credit(receivable, financials.total));
        }

        JournalEntry {
            id: transaction.id,
            date: transaction.date,
            description: format!("Invoice {} - {}", invoice.invoice_number, invoice.client_name),
            kind: transaction.kind,
            lines,
        }
    }

    fn push_revenue_lines(lines: &mut Vec<JournalEntryLine>, financials: &Financials) {
        lines.push(JournalEntryLine::credit(
            AccountKey::FreightIncome,
            financials.freight,
        ));
        lines.push(JournalEntryLine::credit(
            AccountKey::HandlingIncome,
            financials.handling,
        ));

        let optional = [
            (AccountKey::InsuranceIncome, financials.insurance_cost, false),
            (AccountKey::SalesDiscounts, financials.discount, true),
            (AccountKey::VatPayable, financials.vat, false),
            (AccountKey::PostalLevyPayable, financials.postal_levy, false),
            (AccountKey::FxTaxPayable, financials.fx_tax, false),
        ];
        for (account, amount, contra) in optional {
            if amount > Decimal::ZERO {
                lines.push(if contra {
                    JournalEntryLine::debit(account, amount)
                } else {
                    JournalEntryLine::credit(account, amount)
                });
            }
        }
    }

    /// Purchase expense: expense and VAT credit debited against treasury or
    /// the supplier's payable.
    fn expense_entry(
        transaction: &Transaction,
        expense: &Expense,
        payment_methods: &[PaymentMethod],
    ) -> JournalEntry {
        let mut lines = vec![JournalEntryLine::debit(
            AccountKey::Expense(expense.category.clone()),
            expense.effective_taxable_base(),
        )];
        if expense.vat_amount > Decimal::ZERO {
            lines.push(JournalEntryLine::debit(
                AccountKey::VatCredit,
                expense.vat_amount,
            ));
        }

        let credit_account = if expense.is_paid() {
            AccountKey::treasury(payment_methods, expense.payment_method_id)
        } else {
            AccountKey::Payable(expense.supplier_name.clone())
        };
        lines.push(JournalEntryLine::credit(credit_account, expense.amount));

        let description = expense
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map_or_else(
                || format!("Expense {} - {}", expense.category, expense.supplier_name),
                str::to_string,
            );

        JournalEntry {
            id: transaction.id,
            date: transaction.date,
            description,
            kind: transaction.kind,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freight::{CargoItem, PaymentMode, SettlementCurrency, ShippingManifest};
    use crate::ledger::transaction::TransactionKind;
    use crate::records::{ExpenseStatus, InvoiceStatus, PaymentStatus};
    use chrono::NaiveDate;
    use freightbooks_shared::types::{ExpenseId, InvoiceId, PaymentMethodId};
    use rust_decimal_macros::dec;

    fn config() -> CompanyConfig {
        CompanyConfig::new(dec!(12), dec!(36.5), 1)
    }

    fn bank() -> (PaymentMethodId, Vec<PaymentMethod>) {
        let id = PaymentMethodId::new();
        (
            id,
            vec![PaymentMethod {
                id,
                name: "Bank 0102".into(),
            }],
        )
    }

    fn reference_guide(payment_mode: PaymentMode) -> ShippingManifest {
        ShippingManifest {
            items: vec![CargoItem {
                quantity: 1,
                real_weight: dec!(5),
                length: dec!(10),
                width: dec!(10),
                height: dec!(10),
                category_id: None,
            }],
            payment_mode,
            currency: SettlementCurrency::Foreign,
            has_insurance: true,
            declared_value: dec!(1000),
            insurance_percent: dec!(2),
            has_discount: true,
            discount_percent: dec!(10),
        }
    }

    fn invoice(
        payment_mode: PaymentMode,
        payment_status: PaymentStatus,
        method: Option<PaymentMethodId>,
    ) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            invoice_number: "F-0042".into(),
            control_number: Some("00-0042".into()),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            status: InvoiceStatus::Issued,
            payment_status,
            shipping_status: Some("delivered".into()),
            total_amount: dec!(90.228),
            client_name: "Acme".into(),
            client_rif: Some("J-1".into()),
            payment_method_id: method,
            guide: reference_guide(payment_mode),
        }
    }

    fn expense(status: ExpenseStatus, method: Option<PaymentMethodId>) -> Expense {
        Expense {
            id: ExpenseId::new(),
            date: NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(),
            status,
            amount: dec!(116),
            taxable_base: Some(dec!(100)),
            vat_amount: dec!(16),
            category: "Fuel".into(),
            description: None,
            supplier_name: "Gas Co".into(),
            supplier_rif: Some("J-9".into()),
            invoice_number: Some("A-1".into()),
            payment_method_id: method,
        }
    }

    fn amount(entry: &JournalEntry, account: &AccountKey) -> (Decimal, Decimal) {
        entry
            .lines_for(account)
            .fold((Decimal::ZERO, Decimal::ZERO), |(d, c), l| (d + l.debit, c + l.credit))
    }

    #[test]
    fn test_prepaid_paid_invoice_debits_treasury() {
        let (id, methods) = bank();
        let inv = invoice(PaymentMode::Prepaid, PaymentStatus::Paid, Some(id));
        let tx = Transaction::from_invoice(&inv);
        let entry = JournalGenerator::generate(&tx, &config(), &methods);

        assert_eq!(entry.id, tx.id);
        assert_eq!(entry.kind, TransactionKind::Income);
        assert_eq!(entry.description, "Invoice F-0042 - Acme");
        assert_eq!(entry.lines[0], JournalEntryLine::debit(AccountKey::PaymentMethod("Bank 0102".into()), dec!(90.228)));
        assert_eq!(amount(&entry, &AccountKey::FreightIncome), (Decimal::ZERO, dec!(60)));
        assert_eq!(amount(&entry, &AccountKey::HandlingIncome), (Decimal::ZERO, dec!(10)));
        assert_eq!(amount(&entry, &AccountKey::InsuranceIncome), (Decimal::ZERO, dec!(20)));
        assert_eq!(amount(&entry, &AccountKey::SalesDiscounts), (dec!(6), Decimal::ZERO));
        assert_eq!(amount(&entry, &AccountKey::PostalLevyPayable), (Decimal::ZERO, dec!(3.6)));
        assert_eq!(amount(&entry, &AccountKey::FxTaxPayable), (Decimal::ZERO, dec!(2.628)));
        assert_eq!(entry.lines_for(&AccountKey::VatPayable).count(), 0);
        assert!(entry.is_balanced());
        assert_eq!(entry.totals().debit, dec!(96.228));
    }

    #[test]
    fn test_unpaid_invoice_debits_receivable() {
        let inv = invoice(PaymentMode::Prepaid, PaymentStatus::Pending, None);
        let entry = JournalGenerator::generate(&Transaction::from_invoice(&inv), &config(), &[]);

        assert_eq!(entry.lines[0].account, AccountKey::Receivable("Acme".into()));
        assert_eq!(entry.lines[0].debit, dec!(90.228));
        assert!(entry.is_balanced());
    }

    #[test]
    fn test_collect_pending_stays_receivable_without_settlement() {
        let inv = invoice(PaymentMode::Collect, PaymentStatus::Pending, None);
        let entry = JournalGenerator::generate(&Transaction::from_invoice(&inv), &config(), &[]);

        assert_eq!(entry.lines_for(&AccountKey::CashOrBank).count(), 0);
        assert_eq!(
            amount(&entry, &AccountKey::Receivable("Acme".into())),
            (dec!(90.228), Decimal::ZERO)
        );
        assert!(entry.is_balanced());
    }

    #[test]
    fn test_collect_on_delivery_settlement_shape() {
        let inv = Invoice {
            guide: ShippingManifest {
                has_discount: false,
                discount_percent: Decimal::ZERO,
                ..reference_guide(PaymentMode::Collect)
            },
            ..invoice(PaymentMode::Collect, PaymentStatus::Paid, None)
        };
        let financials = FreightCalculator::calculate(&inv.guide, &config());
        let entry = JournalGenerator::generate(&Transaction::from_invoice(&inv), &config(), &[]);
        let totals = entry.totals();

        // Receivable debited at issuance, then the collection pair appended.
        let receivable = AccountKey::Receivable("Acme".into());
        assert_eq!(amount(&entry, &receivable), (financials.total, financials.total));
        assert_eq!(
            amount(&entry, &AccountKey::CashOrBank),
            (financials.total, Decimal::ZERO)
        );
        let tail = &entry.lines[entry.lines.len() - 2..];
        assert_eq!(tail[0], JournalEntryLine::debit(AccountKey::CashOrBank, financials.total));
        assert_eq!(tail[1], JournalEntryLine::credit(receivable, financials.total));

        assert_eq!(totals.debit, financials.total * dec!(2));
        assert_eq!(
            totals.credit,
            financials.total
                + financials.freight
                + financials.handling
                + financials.insurance_cost
                + financials.postal_levy
                + financials.fx_tax
        );
    }

    #[test]
    fn test_income_ignores_stored_total() {
        let inv = Invoice {
            total_amount: dec!(1),
            ..invoice(PaymentMode::Prepaid, PaymentStatus::Pending, None)
        };
        let tx = Transaction::from_invoice(&inv);
        let entry = JournalGenerator::generate(&tx, &config(), &[]);
        assert_eq!(tx.amount, dec!(1));
        assert_eq!(entry.lines[0].debit, dec!(90.228));
    }

    #[test]
    fn test_empty_manifest_still_books_freight_and_handling_lines() {
        let inv = Invoice {
            guide: ShippingManifest::default(),
            ..invoice(PaymentMode::Prepaid, PaymentStatus::Pending, None)
        };
        let entry = JournalGenerator::generate(&Transaction::from_invoice(&inv), &config(), &[]);

        assert_eq!(entry.lines.len(), 3);
        assert_eq!(entry.lines[1], JournalEntryLine::credit(AccountKey::FreightIncome, Decimal::ZERO));
        assert_eq!(entry.lines[2], JournalEntryLine::credit(AccountKey::HandlingIncome, Decimal::ZERO));
    }

    #[test]
    fn test_paid_expense_credits_treasury() {
        let (id, methods) = bank();
        let exp = expense(ExpenseStatus::Paid, Some(id));
        let entry = JournalGenerator::generate(&Transaction::from_expense(&exp), &config(), &methods);

        assert_eq!(
            entry.lines,
            vec![
                JournalEntryLine::debit(AccountKey::Expense("Fuel".into()), dec!(100)),
                JournalEntryLine::debit(AccountKey::VatCredit, dec!(16)),
                JournalEntryLine::credit(AccountKey::PaymentMethod("Bank 0102".into()), dec!(116)),
            ]
        );
        assert_eq!(entry.description, "Expense Fuel - Gas Co");
        assert!(entry.is_balanced());
    }

    #[test]
    fn test_paid_expense_unknown_method_falls_back_to_cash() {
        let exp = expense(ExpenseStatus::Paid, Some(PaymentMethodId::new()));
        let entry = JournalGenerator::generate(&Transaction::from_expense(&exp), &config(), &[]);
        assert_eq!(entry.lines[2].account, AccountKey::CashOrBank);
    }

    #[test]
    fn test_pending_expense_credits_supplier() {
        let exp = Expense {
            description: Some("Diesel refill".into()),
            ..expense(ExpenseStatus::Pending, None)
        };
        let entry = JournalGenerator::generate(&Transaction::from_expense(&exp), &config(), &[]);

        assert_eq!(
            entry.lines[2],
            JournalEntryLine::credit(AccountKey::Payable("Gas Co".into()), dec!(116))
        );
        assert_eq!(entry.description, "Diesel refill");
    }

    #[test]
    fn test_expense_without_base_or_vat() {
        let exp = Expense {
            taxable_base: None,
            vat_amount: Decimal::ZERO,
            amount: dec!(40),
            ..expense(ExpenseStatus::Pending, None)
        };
        let entry = JournalGenerator::generate(&Transaction::from_expense(&exp), &config(), &[]);

        assert_eq!(entry.lines.len(), 2);
        assert_eq!(entry.lines[0].debit, dec!(40));
        assert!(entry.is_balanced());
    }

    #[test]
    fn test_generate_all_preserves_order() {
        let invoices = [invoice(PaymentMode::Prepaid, PaymentStatus::Pending, None)];
        let txs = vec![
            Transaction::from_expense(&expense(ExpenseStatus::Pending, None)),
            Transaction::from_invoice(&invoices[0]),
        ];
        let entries = JournalGenerator::generate_all(&txs, &config(), &[]);
        let ids: Vec<_> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![txs[0].id, txs[1].id]);
    }
}
