//! The API endpoints URIs.

/// The page that lists transactions with their balance and expense chart.
pub const ROOT: &str = "/";
/// The route for adding a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for the JSON summary of the balance and expense totals.
pub const SUMMARY_API: &str = "/api/summary";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_API);
        assert_endpoint_is_valid_uri(endpoints::SUMMARY_API);
    }
}
