//! Defines the transaction model exchanged with the remote transaction API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// MODELS
// ============================================================================

/// Whether a transaction earned or spent money.
///
/// The remote API is free to send type strings other than `"income"` and
/// `"expense"`. Those are kept verbatim in [TransactionType::Other] so they
/// survive a round trip, and are treated as expenses when computing the
/// balance.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    #[default]
    Expense,
    /// A type string that is neither "income" nor "expense".
    Other(String),
}

impl TransactionType {
    /// The string used for this type on the wire and as a CSS class.
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Other(type_) => type_,
        }
    }
}

impl From<String> for TransactionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "income" => TransactionType::Income,
            "expense" => TransactionType::Expense,
            _ => TransactionType::Other(value),
        }
    }
}

impl From<TransactionType> for String {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Other(type_) => type_,
            type_ => type_.as_str().to_owned(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions carry no identity: the remote API owns them and this app only
/// ever appends new ones or reads the full list back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// A text description of what the transaction was for.
    ///
    /// Expenses are grouped by their description in the expense chart.
    pub description: String,
    /// The amount of money spent or earned, always positive.
    ///
    /// Whether the amount adds to or subtracts from the balance is decided by
    /// [Transaction::type_].
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// Whether this is an income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(description: &str, amount: f64, type_: TransactionType) -> Self {
        Self {
            description: description.to_owned(),
            amount,
            type_,
        }
    }

    /// The amount as it applies to the balance.
    ///
    /// Income is positive, anything else is negative.
    pub fn signed_amount(&self) -> f64 {
        match self.type_ {
            TransactionType::Income => self.amount,
            _ => -self.amount,
        }
    }

    /// Whether this transaction counts towards the expense breakdown.
    ///
    /// Only transactions explicitly typed as expenses count, unknown types
    /// are left out of the breakdown even though they reduce the balance.
    pub fn is_expense(&self) -> bool {
        self.type_ == TransactionType::Expense
    }
}

/// Accepts amounts sent either as a JSON number or as a numeric string.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(amount) => Ok(amount),
        RawAmount::Text(text) => text.trim().parse::<f64>().map_err(|error| {
            serde::de::Error::custom(format!("invalid amount \"{text}\": {error}"))
        }),
    }
}
