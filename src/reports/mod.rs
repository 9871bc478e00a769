//! Reports module for FinTrack
//!
//! Pure aggregation over the transaction list: period resolution, summary
//! totals, the expense breakdown by category and the monthly series. Nothing
//! here reads the clock; callers pass `today`.

pub mod breakdown;
pub mod monthly;
pub mod period;
pub mod summary;

pub use breakdown::{breakdown_by_category, CategoryBreakdown};
pub use monthly::{monthly_series, MonthlyData, MONTHS_SHOWN};
pub use period::{filtered_transactions, matches, resolve_period, DateRange};
pub use summary::{summarize, FinancialSummary};

use chrono::NaiveDate;

use crate::models::{FilterState, Transaction};

/// Everything the dashboard shows for one filter selection
#[derive(Debug, Clone)]
pub struct DashboardReport<'a> {
    pub summary: FinancialSummary,
    pub breakdown: Vec<CategoryBreakdown>,
    pub monthly: Vec<MonthlyData>,
    /// Matching transactions, newest first
    pub transactions: Vec<&'a Transaction>,
}

impl<'a> DashboardReport<'a> {
    /// Generate every view from one snapshot of the list
    pub fn generate(transactions: &'a [Transaction], filter: &FilterState, today: NaiveDate) -> Self {
        Self {
            summary: summarize(transactions, filter, today),
            breakdown: breakdown_by_category(transactions, filter, today),
            monthly: monthly_series(transactions),
            transactions: filtered_transactions(transactions, filter, today),
        }
    }
}
