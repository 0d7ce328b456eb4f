//! Defines the endpoint for the raw total of all recorded amounts.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::json;

use crate::{app_state::ExpenseState, stores::ExpenseStore};

/// The response body for the total endpoint.
#[derive(Debug, Serialize)]
pub struct TotalResponse {
    /// The sum of `amount` over every record, credits and debits alike.
    pub total: f64,
}

/// A route handler that sums the raw `amount` of every record.
///
/// This is the undivided ledger total, not the owner's balance; split
/// parameters and direction are ignored here.
pub async fn get_total_endpoint<E>(State(state): State<ExpenseState<E>>) -> impl IntoResponse
where
    E: ExpenseStore + Clone + Send + Sync,
{
    match state.expense_store.list() {
        Ok(expenses) => {
            let total: f64 = expenses.iter().map(|expense| expense.amount).sum();

            (StatusCode::OK, Json(TotalResponse { total })).into_response()
        }
        Err(error) => {
            tracing::error!("Could not calculate the ledger total: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to calculate total" })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        build_router, endpoints,
        expense::{Direction, Expense},
        stores::ExpenseStore,
        test_utils::test_state,
    };

    #[tokio::test]
    async fn total_sums_raw_amounts_regardless_of_direction_and_split() {
        let (state, _sink) = test_state();
        let mut store = state.expense_store.clone();
        store
            .create(
                Expense::build(100.0, date!(2025 - 01 - 01), "salary")
                    .direction(Direction::Credit),
            )
            .unwrap();
        store
            .create(
                Expense::build(60.0, date!(2025 - 01 - 02), "dinner")
                    .split_with(vec!["ana@example.com".to_owned()]),
            )
            .unwrap();
        let server = TestServer::new(build_router(state));

        let response = server.get(endpoints::EXPENSES_TOTAL).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "total": 160.0 }));
    }

    #[tokio::test]
    async fn total_of_empty_ledger_is_zero() {
        let (state, _sink) = test_state();
        let server = TestServer::new(build_router(state));

        let response = server.get(endpoints::EXPENSES_TOTAL).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "total": 0.0 }));
    }
}
