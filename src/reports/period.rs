//! Period resolution and the transaction predicate
//!
//! Every report resolves the filter's period to an inclusive date range
//! relative to an injected `today`, then keeps the transactions for which
//! [`matches`] holds.

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

use crate::models::{parse_date, FilterState, Period, Transaction};

/// An inclusive date range
///
/// No ordering is enforced: a range whose start is after its end contains
/// no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First through last day of the month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(date);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Resolve the filter's period to concrete bounds
///
/// - current-month: first/last day of `today`'s month
/// - last-month: first/last day of the previous month
/// - custom: the parsed custom bounds, each falling back to the matching
///   current-month bound when absent or unparsable
pub fn resolve_period(filter: &FilterState, today: NaiveDate) -> DateRange {
    let current = DateRange::month_of(today);

    match filter.period {
        Period::CurrentMonth => current,
        Period::LastMonth => {
            let previous = current
                .start
                .checked_sub_months(Months::new(1))
                .unwrap_or(current.start);
            DateRange::month_of(previous)
        }
        Period::Custom => DateRange {
            start: filter
                .custom_start
                .as_deref()
                .and_then(parse_date)
                .unwrap_or(current.start),
            end: filter
                .custom_end
                .as_deref()
                .and_then(parse_date)
                .unwrap_or(current.end),
        },
    }
}

/// Date inside the range, type accepted, category accepted
pub fn matches(txn: &Transaction, filter: &FilterState, range: &DateRange) -> bool {
    range.contains(txn.date) && filter.kind.accepts(txn.kind) && filter.category.accepts(&txn.category)
}

/// Transactions matching the filter, newest date first
///
/// Transactions on the same date keep their stored order.
pub fn filtered_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &FilterState,
    today: NaiveDate,
) -> Vec<&'a Transaction> {
    let range = resolve_period(filter, today);
    let mut matching: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| matches(t, filter, &range))
        .collect();
    matching.sort_by(|a, b| b.date.cmp(&a.date));
    matching
}
