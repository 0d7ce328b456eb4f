//! Implements a flat-file JSON backed expense store.

use std::{fs, path::PathBuf};

use time::OffsetDateTime;

use crate::{
    Error,
    expense::{Expense, ExpenseBuilder, ExpenseId},
    stores::ExpenseStore,
};

/// Stores the expense ledger as a single JSON array on local disk.
///
/// The whole document is read before and rewritten after every mutation.
/// Clones share the same file path, so cloned stores observe each other's
/// writes through the file system.
#[derive(Debug, Clone)]
pub struct JsonExpenseStore {
    path: PathBuf,
}

impl JsonExpenseStore {
    /// Create a store that persists the ledger at `path`.
    ///
    /// The file does not need to exist yet; a missing document reads as an
    /// empty ledger.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<Expense>, Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path)?;

        Ok(serde_json::from_str(&text)?)
    }

    fn persist(&self, expenses: &[Expense]) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(expenses)?;
        fs::write(&self.path, text)?;

        Ok(())
    }

    fn next_id() -> ExpenseId {
        OffsetDateTime::now_utc().unix_timestamp_nanos().to_string()
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn list(&self) -> Result<Vec<Expense>, Error> {
        self.load()
    }

    fn create(&mut self, builder: ExpenseBuilder) -> Result<Expense, Error> {
        let mut expenses = self.load()?;

        let mut id = Self::next_id();
        // Nanosecond timestamps only repeat if the clock stalls; retry until
        // the identifier is fresh.
        while expenses.iter().any(|expense| expense.id == id) {
            id = Self::next_id();
        }

        let expense = builder.finalize(id);
        expenses.insert(0, expense.clone());
        self.persist(&expenses)?;

        Ok(expense)
    }

    fn update(&mut self, mut expense: Expense) -> Result<Expense, Error> {
        let mut expenses = self.load()?;

        let index = expenses
            .iter()
            .position(|stored| stored.id == expense.id)
            .ok_or(Error::UpdateMissingExpense)?;

        if !expense.is_split {
            expense.friends.clear();
        }

        expenses[index] = expense.clone();
        self.persist(&expenses)?;

        Ok(expense)
    }

    fn delete(&mut self, id: &str) -> Result<(), Error> {
        let mut expenses = self.load()?;
        expenses.retain(|expense| expense.id != id);
        self.persist(&expenses)?;

        Ok(())
    }
}

#[cfg(test)]
mod json_expense_store_tests {
    use std::path::PathBuf;

    use tempfile::TempDir;
    use time::macros::date;

    use crate::{
        Error,
        expense::{Direction, Expense},
        stores::{ExpenseStore, json::JsonExpenseStore},
    };

    fn get_test_store() -> (JsonExpenseStore, TempDir) {
        let data_dir = TempDir::new().expect("Could not create temp dir");
        let store = JsonExpenseStore::new(data_dir.path().join("expenses.json"));

        (store, data_dir)
    }

    #[test]
    fn list_returns_empty_ledger_when_no_document_exists() {
        let (store, _data_dir) = get_test_store();

        let expenses = store.list().expect("Could not list expenses");

        assert!(expenses.is_empty());
    }

    #[test]
    fn create_prepends_and_assigns_distinct_ids() {
        let (mut store, _data_dir) = get_test_store();

        let first = store
            .create(Expense::build(1.0, date!(2025 - 01 - 01), "first"))
            .unwrap();
        let second = store
            .create(Expense::build(2.0, date!(2025 - 01 - 02), "second"))
            .unwrap();
        let third = store
            .create(Expense::build(3.0, date!(2025 - 01 - 03), "third"))
            .unwrap();

        let expenses = store.list().expect("Could not list expenses");

        assert_eq!(expenses, vec![third.clone(), second.clone(), first.clone()]);
        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
        assert_ne!(first.id, third.id);
    }

    #[test]
    fn ledger_survives_store_recreation() {
        let (mut store, data_dir) = get_test_store();
        let expense = store
            .create(Expense::build(12.3, date!(2025 - 02 - 03), "Groceries"))
            .unwrap();

        let reopened = JsonExpenseStore::new(data_dir.path().join("expenses.json"));
        let expenses = reopened.list().expect("Could not list expenses");

        assert_eq!(expenses, vec![expense]);
    }

    #[test]
    fn update_replaces_fields_but_keeps_id_and_position() {
        let (mut store, _data_dir) = get_test_store();
        store
            .create(Expense::build(1.0, date!(2025 - 01 - 01), "first"))
            .unwrap();
        let target = store
            .create(Expense::build(2.0, date!(2025 - 01 - 02), "second"))
            .unwrap();
        store
            .create(Expense::build(3.0, date!(2025 - 01 - 03), "third"))
            .unwrap();

        let mut edited = target.clone();
        edited.category = "renamed".to_owned();
        edited.amount = 20.0;
        edited.direction = Direction::Credit;
        let updated = store.update(edited.clone()).expect("Could not update");

        assert_eq!(updated, edited);

        let expenses = store.list().unwrap();
        assert_eq!(expenses.len(), 3);
        assert_eq!(expenses[1], edited);
        assert_eq!(expenses[1].id, target.id);
        assert_eq!(expenses[0].category, "third");
        assert_eq!(expenses[2].category, "first");
    }

    #[test]
    fn update_missing_expense_leaves_ledger_unchanged() {
        let (mut store, _data_dir) = get_test_store();
        let expense = store
            .create(Expense::build(5.0, date!(2025 - 01 - 01), "Coffee"))
            .unwrap();

        let mut phantom = expense.clone();
        phantom.id = "0".to_owned();
        let result = store.update(phantom);

        assert_eq!(result, Err(Error::UpdateMissingExpense));
        assert_eq!(store.list().unwrap(), vec![expense]);
    }

    #[test]
    fn update_clears_friends_when_no_longer_split() {
        let (mut store, _data_dir) = get_test_store();
        let expense = store
            .create(
                Expense::build(30.0, date!(2025 - 01 - 01), "Pizza")
                    .split_with(vec!["ana@example.com".to_owned()]),
            )
            .unwrap();

        let mut edited = expense.clone();
        edited.is_split = false;
        let updated = store.update(edited).expect("Could not update");

        assert!(updated.friends.is_empty());
        assert!(store.list().unwrap()[0].friends.is_empty());
    }

    #[test]
    fn delete_removes_expense() {
        let (mut store, _data_dir) = get_test_store();
        let keep = store
            .create(Expense::build(1.0, date!(2025 - 01 - 01), "keep"))
            .unwrap();
        let discard = store
            .create(Expense::build(2.0, date!(2025 - 01 - 02), "discard"))
            .unwrap();

        store.delete(&discard.id).expect("Could not delete");

        assert_eq!(store.list().unwrap(), vec![keep]);
    }

    #[test]
    fn delete_missing_expense_is_a_noop() {
        let (mut store, _data_dir) = get_test_store();
        let expense = store
            .create(Expense::build(1.0, date!(2025 - 01 - 01), "keep"))
            .unwrap();

        let result = store.delete("0");

        assert_eq!(result, Ok(()));
        assert_eq!(store.list().unwrap(), vec![expense]);
    }

    #[test]
    fn create_reports_storage_error_when_document_cannot_be_written() {
        let mut store = JsonExpenseStore::new(PathBuf::from(
            "/nonexistent-divvy-dir/expenses.json",
        ));

        let result = store.create(Expense::build(1.0, date!(2025 - 01 - 01), "Coffee"));

        assert!(matches!(result, Err(Error::StorageError(_))));
    }
}
