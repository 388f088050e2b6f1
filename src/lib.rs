//! A personal finance tracker web app.
//!
//! The app is a thin client of a remote transaction API: it lists the
//! transactions the API holds, lets the user add new ones, and shows the
//! running balance and a pie chart of expenses grouped by description.
//!
//! This library serves the HTML pages directly and updates them with htmx.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod api_client;
mod app_state;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api_client::{ApiConfig, DEFAULT_REQUEST_TIMEOUT, TransactionApiClient};
pub use app_state::{AppState, DEFAULT_CURRENCY_SYMBOL};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{CategoryTotal, Ledger, LedgerSummary, Transaction, TransactionType};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
