//! Implements flat-file JSON backed stores.
//!
//! Each store owns one JSON document on local disk and rewrites it in full
//! on every mutation. There is no locking and no transaction log.

mod expense;
mod profile;

pub use expense::JsonExpenseStore;
pub use profile::JsonProfileStore;
