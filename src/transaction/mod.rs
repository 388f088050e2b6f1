//! Transactions and the views built from them.
//!
//! This module contains:
//! - The `Transaction` model as exchanged with the remote API
//! - The `Ledger` that keeps the running balance and expense totals
//! - The form, list and chart views
//! - Route handlers for loading the page, adding transactions and summarising the ledger

mod chart;
mod core;
mod create_endpoint;
mod form;
mod ledger;
mod summary_endpoint;
mod transactions_page;
mod view;

pub use core::{Transaction, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use ledger::{CategoryTotal, Ledger, LedgerSummary};
pub use summary_endpoint::get_summary;
pub use transactions_page::get_transactions_page;
