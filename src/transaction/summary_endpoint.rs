//! Defines the endpoint that reports the balance and expense breakdown as JSON.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    transaction::ledger::{Ledger, LedgerSummary},
};

/// The state needed to summarise the ledger.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The transactions shown on the page.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler that returns the current balance and expense totals of the
/// transactions on the page.
///
/// The summary reflects the last load or add, it does not contact the remote API.
pub async fn get_summary(State(state): State<SummaryState>) -> Result<Json<LedgerSummary>, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    Ok(Json(ledger.summary()))
}
