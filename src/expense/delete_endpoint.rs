//! Defines the endpoint for deleting an expense.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{app_state::ExpenseState, expense::ExpenseId, stores::ExpenseStore};

/// A route handler for removing an expense from the ledger.
///
/// Deleting an identifier that is not in the ledger still reports success,
/// so repeated deletes are harmless.
pub async fn delete_expense_endpoint<E>(
    State(state): State<ExpenseState<E>>,
    Path(expense_id): Path<ExpenseId>,
) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync,
{
    let mut store = state.expense_store;

    match store.delete(&expense_id) {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(error) => {
            tracing::error!("Could not delete expense {expense_id}: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to delete expense" })),
            )
                .into_response()
        }
    }
}
