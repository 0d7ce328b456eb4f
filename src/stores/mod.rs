//! Contains traits and implementations for objects that persist the expense
//! ledger and the user profile.

mod expense;
mod profile;

pub mod json;

pub use expense::ExpenseStore;
pub use profile::ProfileStore;
