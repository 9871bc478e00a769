//! Expense breakdown by category

use chrono::NaiveDate;

use crate::models::{Category, FilterState, Money, Transaction};

use super::period::{matches, resolve_period};

/// Expense total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    /// Category id as stored on the transactions
    pub category_id: String,
    /// Display name, or the raw id for unknown categories
    pub category: String,
    /// Sum of matching expense amounts
    pub amount: Money,
    /// Share of all matching expenses, 0 to 100
    pub percentage: f64,
    /// Display color, neutral gray for unknown categories
    pub color: &'static str,
}

/// Group matching expenses by category
///
/// Only expenses count, whatever the filter's type. Groups appear in the
/// order their category is first seen in `transactions`. When the matching
/// expenses add up to zero every row gets a share of 0.
pub fn breakdown_by_category(
    transactions: &[Transaction],
    filter: &FilterState,
    today: NaiveDate,
) -> Vec<CategoryBreakdown> {
    let range = resolve_period(filter, today);

    let mut totals: Vec<(&str, Money)> = Vec::new();
    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && matches(t, filter, &range))
    {
        match totals.iter_mut().find(|(id, _)| *id == txn.category) {
            Some((_, total)) => *total += txn.amount,
            None => totals.push((txn.category.as_str(), txn.amount)),
        }
    }

    let grand_total: Money = totals.iter().map(|(_, amount)| *amount).sum();
    let share = |amount: Money| {
        if grand_total.is_zero() {
            0.0
        } else {
            amount.cents() as f64 / grand_total.cents() as f64 * 100.0
        }
    };

    totals
        .into_iter()
        .map(|(id, amount)| CategoryBreakdown {
            category_id: id.to_string(),
            category: Category::display_name(id).to_string(),
            amount,
            percentage: share(amount),
            color: Category::display_color(id),
        })
        .collect()
}
