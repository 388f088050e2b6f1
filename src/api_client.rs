//! HTTP client for the remote transaction API.
//!
//! The remote API owns the transactions. This app only lists them and
//! creates new ones, each with a single request and no retries.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::{Error, transaction::Transaction};

/// How long to wait for the remote API before giving up on a request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where to find the remote transaction API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// The URL that answers `GET` with a JSON array of transactions.
    pub list_url: Url,
    /// The URL that accepts a `POST` of a single JSON transaction.
    pub create_url: Url,
    /// The timeout applied to every request.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Parse the endpoint URLs.
    ///
    /// When `create_url` is `None`, transactions are created by posting to
    /// `list_url`.
    ///
    /// # Errors
    /// Returns [Error::InvalidUrl] if either URL cannot be parsed.
    pub fn new(list_url: &str, create_url: Option<&str>) -> Result<Self, Error> {
        let list_url = parse_url(list_url)?;
        let create_url = match create_url {
            Some(create_url) => parse_url(create_url)?,
            None => list_url.clone(),
        };

        Ok(Self {
            list_url,
            create_url,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn parse_url(url: &str) -> Result<Url, Error> {
    Url::parse(url).map_err(|error| Error::InvalidUrl(url.to_owned(), error.to_string()))
}

/// A client for the list and create endpoints of the remote transaction API.
#[derive(Debug, Clone)]
pub struct TransactionApiClient {
    http: Client,
    list_url: Url,
    create_url: Url,
}

impl TransactionApiClient {
    /// Create a client for the endpoints in `config`.
    ///
    /// # Errors
    /// Returns [Error::HttpClientError] if the underlying HTTP client cannot
    /// be initialised, e.g. the TLS backend is unavailable.
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| Error::HttpClientError(error.to_string()))?;

        Ok(Self {
            http,
            list_url: config.list_url,
            create_url: config.create_url,
        })
    }

    /// Fetch every transaction from the list endpoint.
    ///
    /// # Errors
    /// Returns [Error::ApiUnreachable] if the request could not be completed,
    /// [Error::ApiStatus] for a non-success status code and
    /// [Error::InvalidApiResponse] if the body is not a list of transactions.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, Error> {
        tracing::debug!("Fetching transactions from {}", self.list_url);

        let response = self
            .http
            .get(self.list_url.clone())
            .send()
            .await
            .map_err(|error| Error::ApiUnreachable(format!("GET {}: {error}", self.list_url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiStatus {
                method: "GET",
                url: self.list_url.to_string(),
                status: status.as_u16(),
            });
        }

        let transactions = response
            .json::<Vec<Transaction>>()
            .await
            .map_err(|error| Error::InvalidApiResponse(error.to_string()))?;

        tracing::debug!("Fetched {} transactions", transactions.len());

        Ok(transactions)
    }

    /// Send `transaction` to the create endpoint.
    ///
    /// Any 2xx status counts as success and the response body is ignored.
    ///
    /// # Errors
    /// Returns [Error::ApiUnreachable] if the request could not be completed
    /// and [Error::ApiStatus] for a non-success status code.
    pub async fn create_transaction(&self, transaction: &Transaction) -> Result<(), Error> {
        tracing::debug!("Posting transaction to {}: {transaction:?}", self.create_url);

        let response = self
            .http
            .post(self.create_url.clone())
            .json(transaction)
            .send()
            .await
            .map_err(|error| Error::ApiUnreachable(format!("POST {}: {error}", self.create_url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiStatus {
                method: "POST",
                url: self.create_url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;

    use crate::{
        Error,
        test_utils::{
            spawn_api_with_body, spawn_failing_api, spawn_fake_api, unreachable_api_url,
        },
        transaction::{Transaction, TransactionType},
    };

    use super::{ApiConfig, DEFAULT_REQUEST_TIMEOUT, TransactionApiClient};

    fn client_for(list_url: &str) -> TransactionApiClient {
        TransactionApiClient::new(ApiConfig::new(list_url, None).unwrap()).unwrap()
    }

    #[test]
    fn create_url_defaults_to_list_url() {
        let config = ApiConfig::new("http://localhost:3000/api/transactions", None).unwrap();

        assert_eq!(config.create_url, config.list_url);
        assert_eq!(config.timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn endpoints_can_point_at_different_hosts() {
        let config = ApiConfig::new(
            "https://example.com/api/transactions",
            Some("http://localhost:3000/api/transactions"),
        )
        .unwrap()
        .timeout(Duration::from_secs(2));

        assert_eq!(config.list_url.host_str(), Some("example.com"));
        assert_eq!(config.create_url.host_str(), Some("localhost"));
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn rejects_relative_url() {
        let result = ApiConfig::new("/api/transactions", None);

        assert!(
            matches!(result, Err(Error::InvalidUrl(ref url, _)) if url == "/api/transactions"),
            "want invalid URL error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn lists_transactions() {
        let want = vec![
            Transaction::new("Salary", 1000.0, TransactionType::Income),
            Transaction::new("Rent", 450.0, TransactionType::Expense),
        ];
        let api = spawn_fake_api(want.clone()).await;

        let got = client_for(&api.url).list_transactions().await.unwrap();

        assert_eq!(got, want);
    }

    #[tokio::test]
    async fn list_reports_error_status() {
        let url = spawn_failing_api(StatusCode::SERVICE_UNAVAILABLE).await;

        let result = client_for(&url).list_transactions().await;

        assert_eq!(
            result,
            Err(Error::ApiStatus {
                method: "GET",
                url: url.clone(),
                status: 503
            })
        );
    }

    #[tokio::test]
    async fn list_reports_undecodable_body() {
        let url = spawn_api_with_body(r#"{"transactions": []}"#).await;

        let result = client_for(&url).list_transactions().await;

        assert!(
            matches!(result, Err(Error::InvalidApiResponse(_))),
            "want invalid response error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_reports_unreachable_api() {
        let url = unreachable_api_url().await;

        let result = client_for(&url).list_transactions().await;

        assert!(
            matches!(result, Err(Error::ApiUnreachable(_))),
            "want unreachable error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn creates_transaction() {
        let api = spawn_fake_api(Vec::new()).await;
        let transaction = Transaction::new("Coffee", 4.5, TransactionType::Expense);

        client_for(&api.url)
            .create_transaction(&transaction)
            .await
            .unwrap();

        assert_eq!(api.stored_transactions(), vec![transaction]);
    }

    #[tokio::test]
    async fn create_reports_error_status() {
        let url = spawn_failing_api(StatusCode::INTERNAL_SERVER_ERROR).await;
        let transaction = Transaction::new("Coffee", 4.5, TransactionType::Expense);

        let result = client_for(&url).create_transaction(&transaction).await;

        assert_eq!(
            result,
            Err(Error::ApiStatus {
                method: "POST",
                url: url.clone(),
                status: 500
            })
        );
    }
}
