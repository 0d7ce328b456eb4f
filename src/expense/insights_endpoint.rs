//! Defines the endpoint for the derived balance figures.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{app_state::ExpenseState, balance::compute_insights, stores::ExpenseStore};

/// A route handler that derives the balance figures from the current ledger.
///
/// Returns the net balance, total spent, shared-bill count, and monthly
/// average computed by the [balance](crate::balance) module.
pub async fn get_insights_endpoint<E>(State(state): State<ExpenseState<E>>) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync,
{
    match state.expense_store.list() {
        Ok(expenses) => {
            (StatusCode::OK, Json(compute_insights(&expenses))).into_response()
        }
        Err(error) => {
            tracing::error!("Could not compute ledger insights: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to compute insights" })),
            )
                .into_response()
        }
    }
}
