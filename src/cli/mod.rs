//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service and report layers.

pub mod report;
pub mod transaction;

pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;
use clap::Args;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_date, Category, CategoryFilter, FilterState, Period, TypeFilter};

/// Filter flags shared by listing and report commands
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Transaction type: all, income or expense
    #[arg(short = 't', long = "type", default_value = "all")]
    pub kind: TypeFilter,

    /// Category id, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,

    /// Period: current-month, last-month or custom
    #[arg(short, long, default_value = "current-month")]
    pub period: Period,

    /// Custom range start (YYYY-MM-DD); implies --period custom
    #[arg(long)]
    pub from: Option<String>,

    /// Custom range end (YYYY-MM-DD); implies --period custom
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Check the flags and build the filter they describe
    pub fn to_filter_state(&self) -> TrackerResult<FilterState> {
        if let CategoryFilter::Only(id) = &self.category {
            if Category::find(id).is_none() {
                return Err(TrackerError::category_not_found(id.clone()));
            }
        }

        for bound in [&self.from, &self.to].into_iter().flatten() {
            parse_cli_date(bound)?;
        }

        let period = if self.from.is_some() || self.to.is_some() {
            Period::Custom
        } else {
            self.period
        };

        Ok(FilterState {
            kind: self.kind,
            category: self.category.clone(),
            period,
            custom_start: self.from.clone(),
            custom_end: self.to.clone(),
        })
    }
}

/// Parse a `YYYY-MM-DD` command-line date
pub fn parse_cli_date(s: &str) -> TrackerResult<NaiveDate> {
    parse_date(s).ok_or_else(|| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}
