//! Defines the expense store trait.

use crate::{
    Error,
    expense::{Expense, ExpenseBuilder},
};

/// Sole authority over the persisted expense ledger.
///
/// Every mutation is a full read-modify-write of the backing document, so
/// concurrent writers may lose updates. Last write wins; this is accepted
/// for a single-user tool.
pub trait ExpenseStore {
    /// Retrieve every expense in the ledger, in stored order (newest first).
    ///
    /// A ledger that has never been written to is empty, not an error.
    fn list(&self) -> Result<Vec<Expense>, Error>;

    /// Assign a fresh identifier to `builder`, insert the record at the
    /// front of the ledger, and persist.
    ///
    /// Returns the stored record including its identifier.
    ///
    /// # Errors
    /// Returns [Error::StorageError] if the ledger cannot be written.
    fn create(&mut self, builder: ExpenseBuilder) -> Result<Expense, Error>;

    /// Replace the contents of the record whose identifier matches
    /// `expense.id`, preserving its position in the ledger, and persist.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingExpense] if no record has that
    /// identifier. The ledger is left untouched in that case.
    fn update(&mut self, expense: Expense) -> Result<Expense, Error>;

    /// Remove the record with identifier `id` if present and persist.
    ///
    /// Deleting an identifier that is not in the ledger is a no-op, not an
    /// error.
    fn delete(&mut self, id: &str) -> Result<(), Error>;
}
