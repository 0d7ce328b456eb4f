//! Defines the endpoint for recording a new expense.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{app_state::ExpenseState, expense::ExpenseBuilder, stores::ExpenseStore};

/// A route handler for recording a new expense at the front of the ledger.
///
/// The request body is an expense without an identifier; the response is the
/// stored record including the identifier the store assigned.
pub async fn create_expense_endpoint<E>(
    State(state): State<ExpenseState<E>>,
    Json(builder): Json<ExpenseBuilder>,
) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync,
{
    let mut store = state.expense_store;

    match store.create(builder) {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(error) => {
            tracing::error!("Could not add expense: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to add expense" })),
            )
                .into_response()
        }
    }
}
