//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    transaction::{create_transaction_endpoint, get_summary, get_transactions_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_transactions_page))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::SUMMARY_API, get(get_summary))
        .fallback(get_404_not_found)
        .with_state(state)
}
