//! The API endpoint URIs.

/// The route to list and create expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to update or delete a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route for the raw sum of every recorded amount.
pub const EXPENSES_TOTAL: &str = "/api/expenses/total";
/// The route for the derived balance figures.
pub const EXPENSES_INSIGHTS: &str = "/api/expenses/insights";
/// The route to read or save the user profile.
pub const USER: &str = "/api/user";
/// The route to send a payment reminder to a friend.
pub const REMIND: &str = "/api/remind";

/// Replace the `{expense_id}` parameter in `endpoint_path` with `id`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    endpoint_path.replace("{expense_id}", id)
}
