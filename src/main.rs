use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use fintrack::cli::{
    handle_report_command, handle_transaction_command, parse_cli_date, ReportCommands,
    TransactionCommands,
};
use fintrack::config::{Settings, TrackerPaths};
use fintrack::display::format_audit_entries;
use fintrack::storage::Storage;
use fintrack::TrackerError;

/// Environment variable holding the log filter directives
const LOG_ENV: &str = "FINTRACK_LOG";

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker for the terminal",
    long_about = "FinTrack records income and expenses, keeps them in a local JSON \
                  document and summarizes them by period, category and month."
)]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today when resolving periods
    #[arg(long, global = true, env = "FINTRACK_TODAY", hide = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Show the most recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory and write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Err(err) => match err.downcast_ref::<TrackerError>().and_then(|e| e.field_errors()) {
            Some(errors) => {
                eprintln!("Invalid transaction:");
                for (field, message) in errors.iter() {
                    eprintln!("  {}: {}", field.as_str(), message);
                }
                std::process::exit(1);
            }
            None => Err(err),
        },
        Ok(()) => Ok(()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let today = match cli.today.as_deref() {
        Some(date) => parse_cli_date(date)?,
        None => Local::now().date_naive(),
    };

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            let mut storage = open_storage(&paths, &settings)?;
            handle_transaction_command(&mut storage, &settings, today, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let storage = open_storage(&paths, &settings)?;
            handle_report_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            let storage = open_storage(&paths, &settings)?;
            match storage.audit() {
                Some(logger) => print!("{}", format_audit_entries(&logger.read_recent(limit)?)),
                None => println!("Audit logging is disabled (audit_enabled = false)."),
            }
        }
        Some(Commands::Init) => {
            println!("Initializing FinTrack at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'fintrack categories' to see the available categories.");
        }
        Some(Commands::Config) => {
            print_config(&paths, &settings, today);
        }
        None => {
            println!("FinTrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    Ok(())
}

fn open_storage(paths: &TrackerPaths, settings: &Settings) -> Result<Storage> {
    let mut storage = Storage::open(paths, settings)?;
    storage.load_all();
    Ok(storage)
}

fn print_config(paths: &TrackerPaths, settings: &Settings, today: NaiveDate) {
    println!("FinTrack Configuration");
    println!("======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!(
        "Transactions:     {}",
        paths.transactions_file(&settings.storage_key).display()
    );
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!("Initialized:      {}", paths.is_initialized());
    println!();
    println!("Settings:");
    println!("  Storage key:     {}", settings.storage_key);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  Page size:       {}", settings.page_size);
    println!("  Audit enabled:   {}", settings.audit_enabled);
    println!("  Today:           {}", settings.format_date(today));
}
