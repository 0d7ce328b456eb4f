//! Defines the core data model for expenses.

use serde::{Deserialize, Deserializer, Serialize};
use time::Date;

/// The string form of an expense identifier.
///
/// Identifiers are assigned by the ledger store on creation and never change
/// afterwards.
pub type ExpenseId = String;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Whether an expense increases or decreases the owner's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Money coming in, e.g. salary or a repayment.
    Credit,
    /// Money going out.
    Debit,
}

/// How an expense was paid. Informational only, no logic depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card, bank transfer, or any other electronic payment.
    Electronic,
    /// Physical cash.
    Cash,
}

/// The settlement state of a split bill. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitStatus {
    /// The friends named on the bill have not paid their shares yet.
    Pending,
    /// The bill has been settled.
    Paid,
}

/// A single entry in the expense ledger.
///
/// `amount` is always the total transaction amount, not a per-person share.
/// When `is_split` is true the cost is divided evenly between the owner and
/// everyone in `friends`, with the owner as the implicit extra party.
///
/// To create a new `Expense`, use [Expense::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The identifier assigned by the ledger store.
    pub id: ExpenseId,
    /// When the expense happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// A short text label describing the expense.
    pub category: String,
    /// The total transaction amount.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// Whether the expense is a credit or a debit.
    #[serde(rename = "type")]
    pub direction: Direction,
    /// How the expense was paid.
    pub method: PaymentMethod,
    /// Whether `amount` is shared with the people in `friends`.
    #[serde(rename = "isSplit")]
    pub is_split: bool,
    /// The email addresses of the people sharing this bill.
    ///
    /// Always empty when `is_split` is false.
    #[serde(default)]
    pub friends: Vec<String>,
    /// The settlement state of a split bill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SplitStatus>,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(amount: f64, date: Date, category: &str) -> ExpenseBuilder {
        ExpenseBuilder {
            date,
            category: category.to_owned(),
            amount,
            direction: Direction::Debit,
            method: PaymentMethod::Electronic,
            is_split: false,
            friends: Vec::new(),
            status: None,
        }
    }
}

/// An expense that has not been given an identifier yet.
///
/// This is both the builder used in code and the request payload accepted by
/// the create and update endpoints: it is an [Expense] minus the `id` field.
/// Call a store's `create` to persist it and get back the stored record with
/// its assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBuilder {
    /// When the expense happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// A short text label describing the expense.
    pub category: String,
    /// The total transaction amount.
    ///
    /// Clients sometimes submit this as a JSON string; it is coerced to a
    /// number on the way in.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// Whether the expense is a credit or a debit.
    #[serde(rename = "type")]
    pub direction: Direction,
    /// How the expense was paid.
    pub method: PaymentMethod,
    /// Whether `amount` is shared with the people in `friends`.
    #[serde(rename = "isSplit")]
    pub is_split: bool,
    /// The email addresses of the people sharing this bill.
    #[serde(default)]
    pub friends: Vec<String>,
    /// The settlement state of a split bill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SplitStatus>,
}

impl ExpenseBuilder {
    /// Set the direction of the expense.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the payment method of the expense.
    pub fn method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    /// Mark the expense as split with `friends`.
    pub fn split_with(mut self, friends: Vec<String>) -> Self {
        self.is_split = true;
        self.friends = friends;
        self
    }

    /// Set the settlement status of the expense.
    pub fn status(mut self, status: Option<SplitStatus>) -> Self {
        self.status = status;
        self
    }

    /// Turn the builder into a stored record with the identifier `id`.
    ///
    /// Enforces the split invariant: `friends` is emptied when `is_split` is
    /// false.
    pub fn finalize(self, id: ExpenseId) -> Expense {
        let friends = if self.is_split { self.friends } else { Vec::new() };

        Expense {
            id,
            date: self.date,
            category: self.category,
            amount: self.amount,
            direction: self.direction,
            method: self.method,
            is_split: self.is_split,
            friends,
            status: self.status,
        }
    }
}

/// Deserialize an amount that may arrive as either a JSON number or a JSON
/// string such as `"42.50"`.
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(number) => Ok(number),
        RawAmount::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
