//! Transaction CLI commands
//!
//! Implements CLI commands for adding, editing, removing and listing
//! transactions.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_signed_amount, format_transaction_details, format_transaction_page};
use crate::error::TrackerResult;
use crate::models::{Money, TransactionDraft, TransactionType, DATE_FORMAT};
use crate::reports::filtered_transactions;
use crate::services::TransactionService;
use crate::storage::{Storage, TransactionStore};

use super::FilterArgs;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount, always positive (e.g. "3.50" or "1,200")
        amount: String,
        /// Transaction type: income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Category id (see `fintrack categories`)
        #[arg(short, long, default_value = "")]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit a transaction; omitted fields keep their current value
    Edit {
        /// Transaction ID or unique prefix
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// New category id
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or unique prefix
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete every transaction
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or unique prefix
        id: String,
    },
    /// List transactions matching a filter, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Page number
        #[arg(long, default_value = "1")]
        page: usize,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: TransactionStore>(
    storage: &mut Storage<S>,
    settings: &Settings,
    today: NaiveDate,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let mut service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            kind,
            category,
            date,
        } => {
            let draft = TransactionDraft {
                description,
                amount: Money::parse(&amount).ok(),
                kind,
                category,
                date: date.unwrap_or_else(|| today.format(DATE_FORMAT).to_string()),
            };

            let txn = service.create(draft)?;

            println!("Created transaction:");
            println!("  ID:          {}", txn.id);
            println!("  Date:        {}", settings.format_date(txn.date));
            println!("  Description: {}", txn.description);
            println!("  Category:    {}", txn.category_name());
            println!("  Amount:      {}", format_signed_amount(&txn, settings));
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            kind,
            category,
            date,
        } => {
            let existing = service.find(&id)?;
            let txn_id = existing.id.clone();
            let mut draft = TransactionDraft::from_transaction(existing);

            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(amount) = amount {
                draft.amount = Money::parse(&amount).ok();
            }
            if let Some(kind) = kind {
                draft.kind = kind;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(date) = date {
                draft.date = date;
            }

            let updated = service.update(&txn_id, draft)?;

            println!("Updated transaction: {}", updated.id);
            println!("  Date:        {}", settings.format_date(updated.date));
            println!("  Description: {}", updated.description);
            println!("  Category:    {}", updated.category_name());
            println!("  Amount:      {}", format_signed_amount(&updated, settings));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.find(&id)?.clone();

            if !force {
                println!("About to delete transaction:");
                println!("  Date:        {}", settings.format_date(txn.date));
                println!("  Description: {}", txn.description);
                println!("  Amount:      {}", format_signed_amount(&txn, settings));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            service.delete(&txn.id)?;
            println!("Deleted transaction: {}", txn.id);
        }

        TransactionCommands::Clear { force } => {
            let count = service.list().len();

            if !force {
                println!("About to delete all {} transactions.", count);
                println!();
                println!("Use --force to confirm");
                return Ok(());
            }

            let removed = service.clear()?;
            println!("Deleted {} transactions.", removed);
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", format_transaction_details(txn, settings));
        }

        TransactionCommands::List { filter, page } => {
            let filter = filter.to_filter_state()?;
            let matching = filtered_transactions(service.list(), &filter, today);
            print!("{}", format_transaction_page(&matching, page, settings));
        }
    }

    Ok(())
}
