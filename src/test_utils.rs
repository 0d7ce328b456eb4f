//! In-memory fakes for exercising handlers without touching the disk.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseBuilder},
    profile::UserProfile,
    reminder::{Reminder, ReminderSink},
    stores::{ExpenseStore, ProfileStore},
};

/// An expense store that keeps the ledger in memory.
///
/// Clones share the same ledger, mirroring how clones of the JSON store
/// observe each other's writes through the file.
#[derive(Debug, Clone, Default)]
pub struct FakeExpenseStore {
    inner: Arc<Mutex<FakeLedger>>,
}

#[derive(Debug, Default)]
struct FakeLedger {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl ExpenseStore for FakeExpenseStore {
    fn list(&self) -> Result<Vec<Expense>, Error> {
        Ok(self.inner.lock().unwrap().expenses.clone())
    }

    fn create(&mut self, builder: ExpenseBuilder) -> Result<Expense, Error> {
        let mut ledger = self.inner.lock().unwrap();
        ledger.next_id += 1;

        let expense = builder.finalize(ledger.next_id.to_string());
        ledger.expenses.insert(0, expense.clone());

        Ok(expense)
    }

    fn update(&mut self, mut expense: Expense) -> Result<Expense, Error> {
        let mut ledger = self.inner.lock().unwrap();

        let index = ledger
            .expenses
            .iter()
            .position(|stored| stored.id == expense.id)
            .ok_or(Error::UpdateMissingExpense)?;

        if !expense.is_split {
            expense.friends.clear();
        }

        ledger.expenses[index] = expense.clone();

        Ok(expense)
    }

    fn delete(&mut self, id: &str) -> Result<(), Error> {
        let mut ledger = self.inner.lock().unwrap();
        ledger.expenses.retain(|expense| expense.id != id);

        Ok(())
    }
}

/// A profile store that keeps the single record in memory.
#[derive(Debug, Clone, Default)]
pub struct FakeProfileStore {
    inner: Arc<Mutex<Option<UserProfile>>>,
}

impl ProfileStore for FakeProfileStore {
    fn get(&self) -> Result<Option<UserProfile>, Error> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn save(&mut self, profile: UserProfile) -> Result<UserProfile, Error> {
        *self.inner.lock().unwrap() = Some(profile.clone());

        Ok(profile)
    }
}

/// A reminder sink that records what it was asked to send.
#[derive(Debug, Clone, Default)]
pub struct RecordingReminderSink {
    sent: Arc<Mutex<Vec<Reminder>>>,
    fail_next: Arc<AtomicBool>,
}

impl RecordingReminderSink {
    /// Every reminder the sink has been asked to deliver so far.
    pub fn sent(&self) -> Vec<Reminder> {
        self.sent.lock().unwrap().clone()
    }

    /// Make the next delivery fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReminderSink for RecordingReminderSink {
    async fn notify(&self, reminder: &Reminder) -> Result<(), Error> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(Error::ReminderError("the sink was told to fail".to_owned()));
        }

        self.sent.lock().unwrap().push(reminder.clone());

        Ok(())
    }
}

/// An [AppState] wired up with fakes, plus the sink for inspecting
/// deliveries.
pub fn test_state() -> (
    AppState<FakeExpenseStore, FakeProfileStore>,
    RecordingReminderSink,
) {
    let sink = RecordingReminderSink::default();
    let state = AppState::new(
        FakeExpenseStore::default(),
        FakeProfileStore::default(),
        Arc::new(sink.clone()),
    );

    (state, sink)
}
