//! Fiscal books.
//!
//! Re-projections of invoices and expenses into the rows declared to the tax
//! authority. No amount is computed here that the calculator or the source
//! record does not already carry.

pub mod purchases;
pub mod sales;


pub use purchases::{PurchasesBook, PurchasesBookRow, PurchasesBookTotals};
pub use sales::{SalesBook, SalesBookRow, SalesBookTotals};
