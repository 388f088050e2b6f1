//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    api_client::{ApiConfig, TransactionApiClient},
    transaction::Ledger,
};

/// The currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the remote transaction API.
    pub api_client: TransactionApiClient,

    /// The transactions shown on the page and their running balance.
    pub ledger: Arc<Mutex<Ledger>>,

    /// The symbol displayed in front of transaction amounts, e.g. "₹".
    pub currency_symbol: String,
}

impl AppState {
    /// Create a new [AppState] with an empty ledger.
    ///
    /// # Errors
    /// Returns an error if the HTTP client for the remote API cannot be created.
    pub fn new(api_config: ApiConfig, currency_symbol: &str) -> Result<Self, Error> {
        Ok(Self {
            api_client: TransactionApiClient::new(api_config)?,
            ledger: Arc::new(Mutex::new(Ledger::new())),
            currency_symbol: currency_symbol.to_owned(),
        })
    }
}
