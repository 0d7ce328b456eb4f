//! Defines the endpoint for updating an existing expense.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    Error,
    app_state::ExpenseState,
    expense::{ExpenseBuilder, ExpenseId},
    stores::ExpenseStore,
};

/// A route handler for replacing the contents of an existing expense.
///
/// The path identifier is authoritative; the body carries the new field
/// values. The record keeps its identifier and its position in the ledger.
pub async fn update_expense_endpoint<E>(
    State(state): State<ExpenseState<E>>,
    Path(expense_id): Path<ExpenseId>,
    Json(builder): Json<ExpenseBuilder>,
) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync,
{
    let mut store = state.expense_store;

    match store.update(builder.finalize(expense_id)) {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(Error::UpdateMissingExpense) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Expense not found" })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not update expense: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to update expense" })),
            )
                .into_response()
        }
    }
}
