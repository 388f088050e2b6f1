use std::{
    fs::OpenOptions,
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::Duration,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt,
};

use finance_tracker::{
    ApiConfig, AppState, DEFAULT_CURRENCY_SYMBOL, DEFAULT_REQUEST_TIMEOUT, build_router,
    graceful_shutdown, logging_middleware,
};

/// The web server for the finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The URL of the remote API that lists transactions, e.g.
    /// "http://localhost:8080/api/transactions".
    #[arg(long)]
    list_url: String,

    /// The URL of the remote API that creates transactions. Defaults to the list URL.
    #[arg(long)]
    create_url: Option<String>,

    /// The address to serve the app from.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The symbol displayed in front of amounts.
    #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
    currency_symbol: String,

    /// How many seconds to wait for the remote API before giving up.
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let api_config = ApiConfig::new(&args.list_url, args.create_url.as_deref())
        .expect("Could not parse the transaction API URLs.")
        .timeout(Duration::from_secs(args.request_timeout_secs));

    tracing::info!(
        "Using transaction API {} (create: {})",
        api_config.list_url,
        api_config.create_url
    );

    let app_state = AppState::new(api_config, &args.currency_symbol)
        .expect("Could not create the transaction API client.");

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(app_state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    let addr = SocketAddr::new(args.host, args.port);

    tracing::info!("HTTP server listening on http://{}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Could not start the server.");
}

fn setup_logging() {
    // RUST_LOG overrides the stdout level, e.g. `RUST_LOG=finance_tracker=debug`.
    let stdout_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(stdout_filter);

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log.with_filter(filter::LevelFilter::DEBUG))
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but errors are
        // already logged where they are handled.
        .on_failure(());

    router.layer(tracing_layer)
}
