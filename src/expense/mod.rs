//! Expense ledger management.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and `ExpenseBuilder` for creating expenses
//! - The JSON endpoint handlers for listing, creating, updating, and
//!   deleting ledger entries
//! - The aggregate endpoints for the raw total and the derived insights

mod core;
mod create_endpoint;
mod delete_endpoint;
mod insights_endpoint;
mod list_endpoint;
mod total_endpoint;
mod update_endpoint;

pub use core::{Direction, Expense, ExpenseBuilder, ExpenseId, PaymentMethod, SplitStatus};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use insights_endpoint::get_insights_endpoint;
pub use list_endpoint::list_expenses_endpoint;
pub use total_endpoint::get_total_endpoint;
pub use update_endpoint::update_expense_endpoint;

pub(crate) use core::deserialize_amount;
