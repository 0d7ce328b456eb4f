//! Defines the endpoint for listing every expense in the ledger.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{app_state::ExpenseState, stores::ExpenseStore};

/// A route handler that returns every expense in stored order, newest first.
///
/// A ledger that has never been written to comes back as an empty array.
pub async fn list_expenses_endpoint<E>(State(state): State<ExpenseState<E>>) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync,
{
    match state.expense_store.list() {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(error) => {
            tracing::error!("Could not list expenses: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch expenses" })),
            )
                .into_response()
        }
    }
}
