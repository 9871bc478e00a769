//! Month-by-month income and expense totals

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::models::{Money, Transaction, TransactionType};

/// How many of the most recent months the series keeps
pub const MONTHS_SHOWN: usize = 12;

/// Totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyData {
    /// Label such as "January 2024"
    pub month: String,
    pub year: i32,
    /// 1 through 12
    pub month_number: u32,
    pub income: Money,
    pub expenses: Money,
}

impl MonthlyData {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Totals per calendar month over ALL transactions, ignoring any filter
///
/// Months are keyed by year and month and returned oldest first; only the
/// last [`MONTHS_SHOWN`] months with activity are kept.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyData> {
    let mut months: BTreeMap<(i32, u32), (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let entry = months
            .entry((txn.date.year(), txn.date.month()))
            .or_insert((Money::zero(), Money::zero()));
        match txn.kind {
            TransactionType::Income => entry.0 += txn.amount,
            TransactionType::Expense => entry.1 += txn.amount,
        }
    }

    let skip = months.len().saturating_sub(MONTHS_SHOWN);
    months
        .into_iter()
        .skip(skip)
        .map(|((year, month_number), (income, expenses))| MonthlyData {
            month: month_label(year, month_number),
            year,
            month_number,
            income,
            expenses,
        })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", year, month))
}
