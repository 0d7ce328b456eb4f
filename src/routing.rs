//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_insights_endpoint,
        get_total_endpoint, list_expenses_endpoint, update_expense_endpoint,
    },
    profile::{get_profile_endpoint, save_profile_endpoint},
    reminder::send_reminder_endpoint,
    stores::{ExpenseStore, ProfileStore},
};

/// Return a router with all the app's routes.
pub fn build_router<E, P>(state: AppState<E, P>) -> Router
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    P: ProfileStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint::<E>).post(create_expense_endpoint::<E>),
        )
        .route(
            endpoints::EXPENSE,
            put(update_expense_endpoint::<E>).delete(delete_expense_endpoint::<E>),
        )
        .route(endpoints::EXPENSES_TOTAL, get(get_total_endpoint::<E>))
        .route(
            endpoints::EXPENSES_INSIGHTS,
            get(get_insights_endpoint::<E>),
        )
        .route(
            endpoints::USER,
            get(get_profile_endpoint::<P>).post(save_profile_endpoint::<P>),
        )
        .route(endpoints::REMIND, post(send_reminder_endpoint::<P>))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The JSON 404 response for routes that do not exist.
async fn get_404_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}
