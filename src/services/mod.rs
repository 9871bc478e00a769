//! Service layer for FinTrack
//!
//! The service layer sits on top of storage: it validates input, computes the
//! next transaction list and records the change in the audit log.

pub mod ledger;
pub mod transaction;

pub use ledger::{apply, LedgerAction};
pub use transaction::TransactionService;
