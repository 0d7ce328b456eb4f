//! Implements the structs that hold the state of the REST server.

use std::{
    marker::{Send, Sync},
    sync::Arc,
};

use axum::extract::FromRef;

use crate::{
    reminder::ReminderSink,
    stores::{ExpenseStore, ProfileStore},
};

/// The state of the REST server.
///
/// Generic over the store implementations so that handlers can be exercised
/// against in-memory fakes in tests.
#[derive(Debug, Clone)]
pub struct AppState<E, P>
where
    E: ExpenseStore + Clone + Send + Sync,
    P: ProfileStore + Clone + Send + Sync,
{
    /// The store for the expense ledger.
    pub expense_store: E,
    /// The store for the user profile.
    pub profile_store: P,
    /// The outbound sink for payment reminders.
    pub reminder_sink: Arc<dyn ReminderSink>,
}

impl<E, P> AppState<E, P>
where
    E: ExpenseStore + Clone + Send + Sync,
    P: ProfileStore + Clone + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(expense_store: E, profile_store: P, reminder_sink: Arc<dyn ReminderSink>) -> Self {
        Self {
            expense_store,
            profile_store,
            reminder_sink,
        }
    }
}

/// The state needed by the expense ledger endpoints.
#[derive(Debug, Clone)]
pub struct ExpenseState<E>
where
    E: ExpenseStore + Clone + Send + Sync,
{
    /// The store for the expense ledger.
    pub expense_store: E,
}

impl<E, P> FromRef<AppState<E, P>> for ExpenseState<E>
where
    E: ExpenseStore + Clone + Send + Sync,
    P: ProfileStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<E, P>) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// The state needed by the profile endpoints.
#[derive(Debug, Clone)]
pub struct ProfileState<P>
where
    P: ProfileStore + Clone + Send + Sync,
{
    /// The store for the user profile.
    pub profile_store: P,
}

impl<E, P> FromRef<AppState<E, P>> for ProfileState<P>
where
    E: ExpenseStore + Clone + Send + Sync,
    P: ProfileStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<E, P>) -> Self {
        Self {
            profile_store: state.profile_store.clone(),
        }
    }
}

/// The state needed to send a payment reminder.
///
/// Reminders read the profile for the sender's name and currency symbol.
#[derive(Debug, Clone)]
pub struct ReminderState<P>
where
    P: ProfileStore + Clone + Send + Sync,
{
    /// The store for the user profile.
    pub profile_store: P,
    /// The outbound sink for payment reminders.
    pub reminder_sink: Arc<dyn ReminderSink>,
}

impl<E, P> FromRef<AppState<E, P>> for ReminderState<P>
where
    E: ExpenseStore + Clone + Send + Sync,
    P: ProfileStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<E, P>) -> Self {
        Self {
            profile_store: state.profile_store.clone(),
            reminder_sink: state.reminder_sink.clone(),
        }
    }
}
