//! The outbound reminder port and its email implementations.
//!
//! Reminders are fire-and-forget from the ledger's perspective: a sink
//! failure fails the reminder call itself but never touches ledger state.

use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    Error,
    app_state::ReminderState,
    stores::ProfileStore,
};

/// A payment reminder addressed to one friend on a split bill.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    /// The email address of the friend being reminded.
    pub recipient: String,
    /// The friend's share of the bill, already divided by the caller.
    pub amount: f64,
    /// The expense's category label.
    pub category: String,
    /// The expense's date as it appears in the ledger (`YYYY-MM-DD`).
    pub date: String,
    /// The display name of the ledger owner requesting payment.
    pub sender_name: String,
    /// The owner's currency symbol, e.g. `€`.
    pub currency: String,
}

/// A one-way notification sink for payment reminders.
#[async_trait]
pub trait ReminderSink: Debug + Send + Sync {
    /// Deliver `reminder` to its recipient.
    ///
    /// # Errors
    /// Returns [Error::ReminderError] if the reminder could not be handed
    /// off. Callers must not roll back ledger state on failure.
    async fn notify(&self, reminder: &Reminder) -> Result<(), Error>;
}

/// A sink that only logs reminders.
///
/// Used when no email API key is configured, so the rest of the app behaves
/// identically in local setups.
#[derive(Debug, Clone, Default)]
pub struct LogOnlyReminderSink;

#[async_trait]
impl ReminderSink for LogOnlyReminderSink {
    async fn notify(&self, reminder: &Reminder) -> Result<(), Error> {
        tracing::info!(
            "Reminder simulation (no API key): {} owes {}{:.2} for {} on {}",
            reminder.recipient,
            reminder.currency,
            reminder.amount,
            reminder.category,
            reminder.date
        );

        Ok(())
    }
}

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// A sink that sends reminder emails through the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    from: String,
}

impl ResendMailer {
    /// Create a mailer that authenticates with `api_key` and sends from the
    /// address `from`, e.g. `"Divvy <reminders@example.com>"`.
    pub fn new(api_key: &str, from: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_owned(),
            from: from.to_owned(),
        }
    }
}

#[async_trait]
impl ReminderSink for ResendMailer {
    async fn notify(&self, reminder: &Reminder) -> Result<(), Error> {
        let subject = format!("Reminder: Payment for {}", reminder.category);
        let html = format!(
            "<p>Hi,</p>\
             <p><strong>{}</strong> is reminding you to pay <strong>{}{:.2}</strong> \
             for the <strong>{}</strong> expense on {}.</p>\
             <p>Please settle up soon!</p>",
            reminder.sender_name,
            reminder.currency,
            reminder.amount,
            reminder.category,
            reminder.date
        );

        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": reminder.recipient,
                "subject": subject,
                "html": html,
            }))
            .send()
            .await
            .map_err(|error| Error::ReminderError(error.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::ReminderError(format!(
                "the email API responded with status {}",
                response.status()
            )));
        }

        Ok(())
    }
}

/// The request body for sending a payment reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderForm {
    /// The email address of the friend to remind.
    #[serde(rename = "friendEmail")]
    pub friend_email: String,
    /// The friend's share of the bill.
    ///
    /// Coerced to a number when submitted as a JSON string.
    #[serde(deserialize_with = "crate::expense::deserialize_amount")]
    pub amount: f64,
    /// The expense's category label.
    pub category: String,
    /// The expense's date as shown in the ledger.
    pub date: String,
}

/// A route handler for sending a payment reminder to one friend.
///
/// The owner's name and currency come from the stored profile; the call
/// fails if onboarding has not happened yet.
pub async fn send_reminder_endpoint<P>(
    State(state): State<ReminderState<P>>,
    Json(form): Json<ReminderForm>,
) -> impl IntoResponse
where
    P: ProfileStore + Clone + Send + Sync,
{
    let profile = match state.profile_store.get() {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            tracing::error!("A reminder was requested before a profile was saved");
            return failed_response();
        }
        Err(error) => {
            tracing::error!("Could not read the profile for a reminder: {error}");
            return failed_response();
        }
    };

    let reminder = Reminder {
        recipient: form.friend_email,
        amount: form.amount,
        category: form.category,
        date: form.date,
        sender_name: profile.name,
        currency: profile.currency,
    };

    match state.reminder_sink.notify(&reminder).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(error) => {
            tracing::error!("Could not send a reminder to {}: {error}", reminder.recipient);
            failed_response()
        }
    }
}

fn failed_response() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to send reminder" })),
    )
        .into_response()
}
