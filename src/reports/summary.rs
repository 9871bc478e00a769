//! Financial summary
//!
//! Income, expense and balance totals over the transactions matching a filter.

use chrono::NaiveDate;

use crate::models::{FilterState, Money, Transaction, TransactionType};

use super::period::{matches, resolve_period, DateRange};

/// Totals for one filter selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Always `total_income - total_expenses`
    pub total_balance: Money,
    /// The resolved period, for display
    pub period: DateRange,
    /// Number of matching transactions
    pub transaction_count: usize,
}

/// Sum the transactions matching `filter` by type
pub fn summarize(
    transactions: &[Transaction],
    filter: &FilterState,
    today: NaiveDate,
) -> FinancialSummary {
    let period = resolve_period(filter, today);

    let mut total_income = Money::zero();
    let mut total_expenses = Money::zero();
    let mut transaction_count = 0;

    for txn in transactions.iter().filter(|t| matches(t, filter, &period)) {
        match txn.kind {
            TransactionType::Income => total_income += txn.amount,
            TransactionType::Expense => total_expenses += txn.amount,
        }
        transaction_count += 1;
    }

    FinancialSummary {
        total_income,
        total_expenses,
        total_balance: total_income - total_expenses,
        period,
        transaction_count,
    }
}
