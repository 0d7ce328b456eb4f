//! Pure aggregate math over a snapshot of the expense ledger.
//!
//! Nothing in this module touches storage; callers pass in whatever snapshot
//! they hold and get figures back.

use std::collections::HashSet;

use serde::Serialize;

use crate::expense::{Direction, Expense};

/// The derived figures shown alongside the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Credits minus the owner's share of each debit.
    pub net_balance: f64,
    /// The owner's share of all debits.
    pub total_spent: f64,
    /// How many expenses are split bills.
    pub shared_bill_count: usize,
    /// Total spent averaged over the distinct months in the ledger.
    pub monthly_average: f64,
}

/// The owner's share of an expense.
///
/// The full amount when the bill is not split, otherwise an even division
/// between the owner and the friends named on the bill. The owner is always
/// the implicit extra party, so a bill split with three friends divides by
/// four.
pub fn per_person_share(expense: &Expense) -> f64 {
    if expense.is_split {
        expense.amount / (expense.friends.len() + 1) as f64
    } else {
        expense.amount
    }
}

/// The owner's running balance over the whole ledger.
///
/// Debits subtract only the owner's share. Credits add the full amount even
/// when flagged as split: the payer who fronted a bill gets the whole
/// repayment.
pub fn net_balance(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .map(|expense| match expense.direction {
            Direction::Credit => expense.amount,
            Direction::Debit => -per_person_share(expense),
        })
        .sum()
}

/// The owner's share of all debits. Credits are ignored entirely.
pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .filter(|expense| expense.direction == Direction::Debit)
        .map(per_person_share)
        .sum()
}

/// How many expenses in the ledger are split bills.
pub fn shared_bill_count(expenses: &[Expense]) -> usize {
    expenses.iter().filter(|expense| expense.is_split).count()
}

/// Total spent averaged over the distinct calendar months in the ledger.
///
/// An empty ledger averages to zero rather than dividing by zero.
pub fn monthly_average(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        return 0.0;
    }

    let months: HashSet<_> = expenses
        .iter()
        // Day 1 always exists, so replace_day cannot fail here.
        .map(|expense| expense.date.replace_day(1).unwrap())
        .collect();

    total_spent(expenses) / months.len() as f64
}

/// Compute every aggregate figure in one pass over the snapshot.
pub fn compute_insights(expenses: &[Expense]) -> Insights {
    Insights {
        net_balance: net_balance(expenses),
        total_spent: total_spent(expenses),
        shared_bill_count: shared_bill_count(expenses),
        monthly_average: monthly_average(expenses),
    }
}
