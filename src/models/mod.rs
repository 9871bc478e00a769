//! Core data models for FinTrack
//!
//! This module contains the data structures of the finance domain:
//! transactions, the fixed category table, money amounts, filters and
//! transaction drafts.

pub mod category;
pub mod draft;
pub mod filter;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{Category, CATEGORIES, NEUTRAL_COLOR};
pub use draft::{parse_date, validate, Field, FieldErrors, TransactionDraft, DATE_FORMAT};
pub use filter::{CategoryFilter, FilterState, Period, TypeFilter};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionFields, TransactionType};
