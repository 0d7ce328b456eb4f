use std::{env, fs, net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use divvy::{
    AppState, build_router, graceful_shutdown,
    reminder::{LogOnlyReminderSink, ReminderSink, ResendMailer},
    stores::json::{JsonExpenseStore, JsonProfileStore},
};

/// The address reminder emails are sent from.
const REMINDER_FROM_ADDRESS: &str = "Divvy <onboarding@resend.dev>";

/// The JSON REST API server for divvy.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the ledger and profile documents.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    fs::create_dir_all(&args.data_dir).expect("Could not create the data directory.");

    let expense_store = JsonExpenseStore::new(args.data_dir.join("expenses.json"));
    let profile_store = JsonProfileStore::new(args.data_dir.join("user.json"));

    let reminder_sink: Arc<dyn ReminderSink> = match env::var("RESEND_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => {
            Arc::new(ResendMailer::new(&api_key, REMINDER_FROM_ADDRESS))
        }
        _ => {
            tracing::info!("RESEND_API_KEY is not set, reminders will only be logged.");
            Arc::new(LogOnlyReminderSink)
        }
    };

    let state = AppState::new(expense_store, profile_store, reminder_sink);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
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
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
