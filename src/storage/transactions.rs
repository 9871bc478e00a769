//! Transaction repository
//!
//! Owns the ordered transaction list. The list is read in full once at
//! startup and written in full after every change; callers never edit it in
//! place.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionId};

use super::store::TransactionStore;

/// Repository for the persisted transaction list
pub struct TransactionRepository<S> {
    store: S,
    transactions: Vec<Transaction>,
}

impl<S: TransactionStore> TransactionRepository<S> {
    /// Create an empty repository backed by `store`
    pub fn new(store: S) -> Self {
        Self {
            store,
            transactions: Vec::new(),
        }
    }

    /// Load the list from the store
    ///
    /// Unreadable or corrupt data is logged and replaced by an empty list;
    /// it never surfaces as an error.
    pub fn load(&mut self) {
        self.transactions = match self.store.load() {
            Ok(list) => {
                tracing::debug!(
                    count = list.len(),
                    store = %self.store.describe(),
                    "loaded transactions"
                );
                list
            }
            Err(err) => {
                tracing::warn!(
                    store = %self.store.describe(),
                    error = %err,
                    "could not read stored transactions, starting with an empty list"
                );
                Vec::new()
            }
        };
    }

    /// Swap in a new list and persist it
    ///
    /// The in-memory list is replaced even if saving fails, matching what the
    /// user just did; the error is logged and returned.
    pub fn replace(&mut self, transactions: Vec<Transaction>) -> TrackerResult<()> {
        self.transactions = transactions;
        self.save()
    }

    /// Write the current list to the store
    pub fn save(&self) -> TrackerResult<()> {
        match self.store.save(&self.transactions) {
            Ok(()) => {
                tracing::debug!(
                    count = self.transactions.len(),
                    store = %self.store.describe(),
                    "saved transactions"
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    store = %self.store.describe(),
                    error = %err,
                    "failed to save transactions"
                );
                Err(err)
            }
        }
    }

    /// All transactions in stored (insertion) order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Get a transaction by ID
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == *id)
    }

    /// Find a transaction by full id or a unique id prefix
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<&Transaction>> {
        let identifier = identifier.trim();
        if let Some(txn) = self.transactions.iter().find(|t| t.id.as_str() == identifier) {
            return Ok(Some(txn));
        }

        let mut matches = self
            .transactions
            .iter()
            .filter(|t| t.id.matches_prefix(identifier));

        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(Some(txn)),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(TrackerError::Ambiguous(identifier.to_string())),
        }
    }

    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
