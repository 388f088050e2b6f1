//! Defines the route handler for the page that lists transactions with their
//! balance and expense breakdown.
use std::sync::Mutex;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::html;

use crate::{
    AppState, Error,
    alert::Alert,
    api_client::TransactionApiClient,
    transaction::{
        ledger::Ledger,
        view::{ledger_view, transactions_page_view},
    },
};

/// Fetch every transaction from the remote API and replay them into `ledger`.
///
/// The ledger is only touched once the list has been fetched, so a failed
/// request leaves the previous state in place.
///
/// # Errors
/// Returns the remote API error if the list could not be fetched, or
/// [Error::LedgerLockError] if the ledger lock is poisoned.
pub async fn load_transactions(
    api_client: &TransactionApiClient,
    ledger: &Mutex<Ledger>,
) -> Result<(), Error> {
    let transactions = api_client.list_transactions().await?;

    let mut ledger = ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    ledger.reload(transactions);

    Ok(())
}

/// Display the transactions page, reloading the transactions from the remote API.
///
/// If the transactions cannot be loaded, the page is rendered with the
/// last known state and an alert. Requests made by htmx (the reload button)
/// only get the ledger fragment.
pub async fn get_transactions_page(
    State(state): State<AppState>,
    HxRequest(is_htmx_request): HxRequest,
) -> Result<Response, Error> {
    let alert = match load_transactions(&state.api_client, &state.ledger).await {
        Ok(()) => None,
        Err(Error::LedgerLockError) => return Err(Error::LedgerLockError),
        Err(error) => {
            tracing::error!("Error loading transactions: {error}");
            Some(Alert::Error {
                message: "Failed to load transactions".to_owned(),
                details: "Please try again later.".to_owned(),
            })
        }
    };

    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    if is_htmx_request {
        let alert = alert.map(Alert::into_oob_html);

        return Ok(html!(
            (ledger_view(&ledger, &state.currency_symbol))
            @if let Some(alert) = alert {
                (alert)
            }
        )
        .into_response());
    }

    let alert = alert.map(Alert::into_html);

    Ok(transactions_page_view(&ledger, &state.currency_symbol, alert).into_response())
}
