//! Divvy is a web app for tracking personal expenses and splitting bills
//! with friends.
//!
//! This library provides a JSON REST API backed by flat-file storage: the
//! expense ledger and the user profile are each persisted as a single JSON
//! document on local disk.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod routing;

pub mod balance;
pub mod endpoints;
pub mod expense;
pub mod profile;
pub mod reminder;
pub mod stores;

#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, ExpenseState, ProfileState, ReminderState};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
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

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The ledger or profile document could not be read from or written to
    /// disk.
    #[error("could not access the data file: {0}")]
    StorageError(String),

    /// A document or payload could not be serialized or deserialized as
    /// JSON.
    #[error("could not serialize as JSON: {0}")]
    JsonSerializationError(String),

    /// Tried to update an expense that does not exist in the ledger.
    #[error("tried to update an expense that is not in the ledger")]
    UpdateMissingExpense,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A reminder email could not be handed off to the notification sink.
    ///
    /// Sink failures never affect ledger state, only the response for the
    /// reminder call itself.
    #[error("could not deliver the reminder: {0}")]
    ReminderError(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::StorageError(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JsonSerializationError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::UpdateMissingExpense => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Expense not found" })),
            )
                .into_response(),
            Error::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
            }
            // Causes beyond "not found" are not exposed past the boundary.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Operation failed" })),
                )
                    .into_response()
            }
        }
    }
}
