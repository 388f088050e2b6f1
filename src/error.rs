//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxReswap, SwapOption};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A configured endpoint is not a valid absolute URL.
    ///
    /// Callers should pass in the offending string and the parser error.
    #[error("invalid URL \"{0}\": {1}")]
    InvalidUrl(String, String),

    /// The HTTP client for the remote API could not be created.
    #[error("could not build the HTTP client: {0}")]
    HttpClientError(String),

    /// The request to the remote API could not be sent or timed out.
    #[error("could not reach the transaction API: {0}")]
    ApiUnreachable(String),

    /// The remote API answered with a non-success status code.
    #[error("{method} {url} returned status {status}")]
    ApiStatus {
        /// The HTTP method of the failed request.
        method: &'static str,
        /// The URL of the failed request.
        url: String,
        /// The status code returned by the remote API.
        status: u16,
    },

    /// The remote API answered with a body that is not a list of transactions.
    #[error("could not decode the response from the transaction API: {0}")]
    InvalidApiResponse(String),

    /// The transaction form was submitted without a description.
    #[error("a transaction needs a description")]
    MissingDescription,

    /// The transaction form was submitted without a positive, finite amount.
    #[error("{0:?} is not a valid transaction amount")]
    InvalidAmount(Option<f64>),

    /// Could not acquire the ledger lock.
    #[error("could not acquire the ledger lock")]
    LedgerLockError,

    /// A request or response body could not be read while logging it.
    #[error("could not read the message body")]
    BodyReadError,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl Error {
    /// Whether the error was caused by the remote transaction API.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            Error::ApiUnreachable(_) | Error::ApiStatus { .. } | Error::InvalidApiResponse(_)
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            error if error.is_api_error() => {
                tracing::error!("The transaction API request failed: {error}");
                InternalServerError {
                    status_code: StatusCode::BAD_GATEWAY,
                    description: "Could not reach the transaction service.",
                    fix: "Try again later.",
                }
                .into_response()
            }
            Error::LedgerLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    ///
    /// Remote API errors are reported as a failure to add a transaction since
    /// creating transactions is the only operation that answers with an
    /// alert on its own. Page loads render their alert inline.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MissingDescription => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Missing description".to_owned(),
                    details: "Enter a description for the transaction.".to_owned(),
                },
            ),
            Error::InvalidAmount(_) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: "Enter an amount greater than zero.".to_owned(),
                },
            ),
            error if error.is_api_error() => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Failed to add transaction".to_owned(),
                    details: "Please try again.".to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        // Swap into the alert container, not over it, so it stays targetable.
        (
            status_code,
            HxReswap(SwapOption::InnerHtml),
            alert.into_html(),
        )
            .into_response()
    }
}
