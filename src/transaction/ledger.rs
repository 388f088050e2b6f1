//! The running balance and expense breakdown of the transactions on the page.

use std::collections::HashMap;

use serde::Serialize;

use crate::transaction::core::Transaction;

/// The summed expenses for one category.
///
/// The category is the transaction description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The description shared by the grouped expenses.
    pub category: String,
    /// The sum of the grouped expense amounts.
    pub total: f64,
}

/// A snapshot of the ledger for API consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    /// Total income minus total expenses.
    pub balance: f64,
    /// The number of transactions in the ledger.
    pub transaction_count: usize,
    /// Expense totals in the order their categories were first seen.
    pub categories: Vec<CategoryTotal>,
}

/// The transactions shown on the page and their running balance.
///
/// Every transaction enters the ledger through [Ledger::record], whether it
/// was replayed from the remote list or added through the form, so the
/// balance always equals the fold over [Ledger::transactions].
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    balance: f64,
}

impl Ledger {
    /// Create an empty ledger with a zero balance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current state and replay `transactions` in order.
    pub fn reload(&mut self, transactions: Vec<Transaction>) {
        self.transactions.clear();
        self.balance = 0.0;

        for transaction in transactions {
            self.record(transaction);
        }
    }

    /// Append a transaction to the list and apply it to the balance.
    pub fn record(&mut self, transaction: Transaction) {
        self.update_balance(transaction.signed_amount());
        self.transactions.push(transaction);
    }

    fn update_balance(&mut self, signed_amount: f64) {
        self.balance += signed_amount;
    }

    /// Total income minus total expenses.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// The transactions in the order they were recorded.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Expense totals grouped by description.
    pub fn expense_totals(&self) -> Vec<CategoryTotal> {
        expense_totals_by_category(&self.transactions)
    }

    /// A serializable snapshot of the ledger.
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            balance: self.balance,
            transaction_count: self.transactions.len(),
            categories: self.expense_totals(),
        }
    }
}

/// Sums expense amounts by transaction description.
///
/// Income and transactions with an unrecognised type are skipped. Categories
/// are returned in the order they first appear in `transactions`.
pub fn expense_totals_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|transaction| transaction.is_expense()) {
        match positions.get(transaction.description.as_str()) {
            Some(&position) => totals[position].total += transaction.amount,
            None => {
                positions.insert(&transaction.description, totals.len());
                totals.push(CategoryTotal {
                    category: transaction.description.clone(),
                    total: transaction.amount,
                });
            }
        }
    }

    totals
}
