//! Audit logging for FinTrack
//!
//! Records every create, update, delete and clear with before/after values
//! in an append-only JSONL file.
//!
//! - `AuditEntry`: one mutation with timestamp, operation, affected record
//!   and optional diff summary.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
