//! Defines the endpoint for adding a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use maud::html;

use crate::{
    AppState, Error,
    alert::Alert,
    api_client::TransactionApiClient,
    transaction::{Transaction, form::TransactionForm, ledger::Ledger, view::ledger_view},
};

/// The state needed to add a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The client for the remote transaction API.
    pub api_client: TransactionApiClient,
    /// The transactions shown on the page.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The symbol displayed in front of transaction amounts.
    pub currency_symbol: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
            ledger: state.ledger.clone(),
            currency_symbol: state.currency_symbol.clone(),
        }
    }
}

/// Send `transaction` to the remote API and, once it has been accepted, add
/// it to `ledger`.
///
/// # Errors
/// Returns the remote API error if the transaction was not accepted, in which
/// case `ledger` is left unchanged, or [Error::LedgerLockError] if the ledger
/// lock is poisoned.
pub async fn add_transaction(
    api_client: &TransactionApiClient,
    ledger: &Mutex<Ledger>,
    transaction: Transaction,
) -> Result<(), Error> {
    api_client.create_transaction(&transaction).await?;

    let mut ledger = ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    tracing::info!(
        "Added transaction \"{}\" ({}, {:.2})",
        transaction.description,
        transaction.type_,
        transaction.amount
    );
    ledger.record(transaction);

    Ok(())
}

/// A route handler for adding a new transaction.
///
/// Responds with the updated ledger fragment and a success alert, or with an
/// error alert if the form is invalid or the remote API rejected the
/// transaction.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let transaction = match form.into_transaction() {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::warn!("Rejected transaction form: {error}");
            return error.into_alert_response();
        }
    };

    if let Err(error) = add_transaction(&state.api_client, &state.ledger, transaction).await {
        tracing::error!("could not add transaction: {error}");
        return error.into_alert_response();
    }

    let ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    let alert = Alert::Success {
        message: "Transaction added".to_owned(),
        details: String::new(),
    };

    html!(
        (ledger_view(&ledger, &state.currency_symbol))
        (alert.into_oob_html())
    )
    .into_response()
}
