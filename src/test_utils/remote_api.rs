//! A stand-in for the remote transaction API, served over a real socket so
//! the reqwest client is exercised end to end.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

use crate::transaction::Transaction;

const API_PATH: &str = "/api/transactions";

pub(crate) struct FakeApi {
    /// The URL of the transaction list and create endpoint.
    pub url: String,
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl FakeApi {
    /// Every transaction the fake API holds, including posted ones.
    pub(crate) fn stored_transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind fake API listener");
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{address}{API_PATH}")
}

/// Serve an API that lists `transactions` and stores posted transactions.
pub(crate) async fn spawn_fake_api(transactions: Vec<Transaction>) -> FakeApi {
    async fn list(State(transactions): State<Arc<Mutex<Vec<Transaction>>>>) -> Response {
        Json(transactions.lock().unwrap().clone()).into_response()
    }

    async fn create(
        State(transactions): State<Arc<Mutex<Vec<Transaction>>>>,
        Json(transaction): Json<Transaction>,
    ) -> StatusCode {
        transactions.lock().unwrap().push(transaction);
        StatusCode::CREATED
    }

    let transactions = Arc::new(Mutex::new(transactions));
    let router = Router::new()
        .route(API_PATH, get(list).post(create))
        .with_state(transactions.clone());

    FakeApi {
        url: serve(router).await,
        transactions,
    }
}

/// Serve an API that answers every request with `status`.
pub(crate) async fn spawn_failing_api(status: StatusCode) -> String {
    let router = Router::new().route(
        API_PATH,
        get(move || async move { status }).post(move || async move { status }),
    );

    serve(router).await
}

/// Serve an API that answers `GET` with `body` as JSON.
pub(crate) async fn spawn_api_with_body(body: &'static str) -> String {
    let router = Router::new().route(
        API_PATH,
        get(move || async move { ([("content-type", "application/json")], body) }),
    );

    serve(router).await
}

/// A URL on which nothing is listening.
pub(crate) async fn unreachable_api_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind listener");
    let address = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{address}{API_PATH}")
}
