use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    alert::ALERT_CONTAINER_ID,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    transaction::{
        core::{Transaction, TransactionType},
        view::LEDGER_ID,
    },
};

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The value of the transaction, `None` if the field was left empty.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Whether the transaction is an income or an expense.
    #[serde(rename = "type", default)]
    pub type_: TransactionType,
}

impl TransactionForm {
    /// Check the form and turn it into a transaction.
    ///
    /// # Errors
    /// Returns [Error::MissingDescription] if the description is blank and
    /// [Error::InvalidAmount] if the amount is missing, not finite or not
    /// greater than zero.
    pub fn into_transaction(self) -> Result<Transaction, Error> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::MissingDescription);
        }

        let amount = match self.amount {
            Some(amount) if amount.is_finite() && amount > 0.0 => amount,
            amount => return Err(Error::InvalidAmount(amount)),
        };

        Ok(Transaction::new(description, amount, self.type_))
    }
}

/// Renders the form for adding a transaction.
///
/// A successful submission replaces the ledger and resets the form, a failed
/// one renders an alert and keeps the form contents.
pub fn transaction_form() -> Markup {
    let create_transaction_endpoint = endpoints::TRANSACTIONS_API;
    let ledger_target = format!("#{LEDGER_ID}");
    let alert_target = format!("#{ALERT_CONTAINER_ID}");

    html! {
        form
            id="transaction-form"
            hx-post=(create_transaction_endpoint)
            hx-target=(ledger_target)
            hx-swap="outerHTML"
            hx-target-error=(alert_target)
            "hx-on::after-request"="if (event.detail.successful) this.reset()"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    min="0.01"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="type"
                    class=(FORM_LABEL_STYLE)
                {
                    "Type"
                }

                select
                    name="type"
                    id="type"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value=(TransactionType::Expense.as_str()) selected { "Expense" }
                    option value=(TransactionType::Income.as_str()) { "Income" }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}
