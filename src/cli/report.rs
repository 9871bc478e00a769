//! Report CLI commands
//!
//! Summary, breakdown, monthly and dashboard views over the stored
//! transactions, plus the category reference table.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_breakdown, format_categories, format_dashboard, format_monthly, format_summary,
};
use crate::error::TrackerResult;
use crate::models::TransactionType;
use crate::reports::{breakdown_by_category, monthly_series, summarize, DashboardReport};
use crate::storage::{Storage, TransactionStore};

use super::FilterArgs;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show income, expense and balance totals
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show expenses grouped by category
    Breakdown {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show income and expenses per month (last 12 months with activity)
    Monthly,
    /// Show every view at once
    Dashboard {
        #[command(flatten)]
        filter: FilterArgs,
        /// Page of the transaction list
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// List the available categories
    Categories {
        /// Only categories for this type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },
}

/// Handle a report command
pub fn handle_report_command<S: TransactionStore>(
    storage: &Storage<S>,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let transactions = storage.transactions.all();

    match cmd {
        ReportCommands::Summary { filter } => {
            let filter = filter.to_filter_state()?;
            let summary = summarize(transactions, &filter, today);
            print!("{}", format_summary(&summary, settings));
        }
        ReportCommands::Breakdown { filter } => {
            let filter = filter.to_filter_state()?;
            let rows = breakdown_by_category(transactions, &filter, today);
            print!("{}", format_breakdown(&rows, settings));
        }
        ReportCommands::Monthly => {
            let series = monthly_series(transactions);
            print!("{}", format_monthly(&series, settings));
        }
        ReportCommands::Dashboard { filter, page } => {
            let filter = filter.to_filter_state()?;
            let report = DashboardReport::generate(transactions, &filter, today);
            print!("{}", format_dashboard(&report, page, settings));
        }
        ReportCommands::Categories { kind } => {
            print!("{}", format_categories(kind));
        }
    }

    Ok(())
}
