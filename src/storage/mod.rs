//! Storage layer for FinTrack
//!
//! The transaction list is persisted as one JSON array behind the
//! [`TransactionStore`] port. [`Storage`] bundles the repository with the
//! optional audit log.

pub mod store;
pub mod transactions;

pub use store::{JsonFileStore, MemoryStore, TransactionStore};
pub use transactions::TransactionRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerError;

/// Storage coordinator: transaction repository plus audit log
pub struct Storage<S = JsonFileStore> {
    pub transactions: TransactionRepository<S>,
    audit: Option<AuditLogger>,
}

impl Storage<JsonFileStore> {
    /// Open file-backed storage under `paths` using the configured storage key
    pub fn open(paths: &TrackerPaths, settings: &Settings) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        let store = JsonFileStore::new(paths.transactions_file(&settings.storage_key));
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            transactions: TransactionRepository::new(store),
            audit,
        })
    }
}

impl Storage<MemoryStore> {
    /// Storage that never touches the filesystem and keeps no audit log
    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new(), None)
    }
}

impl<S: TransactionStore> Storage<S> {
    /// Build storage from any store and an optional audit logger
    pub fn with_store(store: S, audit: Option<AuditLogger>) -> Self {
        Self {
            transactions: TransactionRepository::new(store),
            audit,
        }
    }

    /// Load all data; never fails, see [`TransactionRepository::load`]
    pub fn load_all(&mut self) {
        self.transactions.load();
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Append an audit entry; failures are logged, not returned
    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(err) = logger.log(&entry) {
                tracing::warn!(
                    operation = %entry.operation,
                    entity = %entry.entity_id,
                    error = %err,
                    "failed to write audit entry"
                );
            }
        }
    }

    pub fn log_create<T: Serialize>(&self, id: String, name: Option<String>, entity: &T) {
        self.record(AuditEntry::create(id, name, entity));
    }

    pub fn log_update<T: Serialize>(
        &self,
        id: String,
        name: Option<String>,
        before: &T,
        after: &T,
        diff: Option<String>,
    ) {
        self.record(AuditEntry::update(id, name, before, after, diff));
    }

    pub fn log_delete<T: Serialize>(&self, id: String, name: Option<String>, entity: &T) {
        self.record(AuditEntry::delete(id, name, entity));
    }

    pub fn log_clear<T: Serialize + ?Sized>(&self, removed_count: usize, removed: &T) {
        self.record(AuditEntry::clear(removed_count, removed));
    }
}
