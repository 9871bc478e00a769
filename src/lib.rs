//! FinTrack - personal finance tracker
//!
//! This library records income and expense transactions, persists them as a
//! single JSON document and derives summaries, category breakdowns and
//! monthly series from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, categories, filters)
//! - `storage`: JSON document storage behind a store trait
//! - `audit`: Audit logging system
//! - `services`: Validated mutations of the transaction list
//! - `reports`: Pure aggregation (summary, breakdown, monthly series)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{Settings, TrackerPaths};
//! use fintrack::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::open(&paths, &settings)?;
//! storage.load_all();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
