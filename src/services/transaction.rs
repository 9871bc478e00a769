//! Transaction service
//!
//! Validates drafts, applies list transitions through [`apply`], persists the
//! result and records every change in the audit log.

use chrono::Utc;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionDraft, TransactionId};
use crate::storage::{Storage, TransactionStore};

use super::ledger::{apply, LedgerAction};

/// Service for transaction management
pub struct TransactionService<'a, S: TransactionStore> {
    storage: &'a mut Storage<S>,
}

impl<'a, S: TransactionStore> TransactionService<'a, S> {
    /// Create a new transaction service
    pub fn new(storage: &'a mut Storage<S>) -> Self {
        Self { storage }
    }

    /// Validate a draft and append it as a new transaction
    pub fn create(&mut self, draft: TransactionDraft) -> TrackerResult<Transaction> {
        let fields = draft.into_fields().map_err(TrackerError::InvalidInput)?;
        let txn = Transaction::new(fields, Utc::now());

        let next = apply(self.storage.transactions.all(), LedgerAction::Add(txn.clone()));
        self.storage.transactions.replace(next)?;

        self.storage
            .log_create(txn.id.as_str().to_string(), Some(txn.description.clone()), &txn);

        tracing::info!(id = %txn.id, amount = %txn.amount, kind = %txn.kind, "created transaction");
        Ok(txn)
    }

    /// Replace the editable fields of an existing transaction
    pub fn update(&mut self, id: &TransactionId, draft: TransactionDraft) -> TrackerResult<Transaction> {
        let before = self
            .storage
            .transactions
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        let fields = draft.into_fields().map_err(TrackerError::InvalidInput)?;

        let next = apply(
            self.storage.transactions.all(),
            LedgerAction::Update {
                id: id.clone(),
                fields,
                at: Utc::now(),
            },
        );
        self.storage.transactions.replace(next)?;

        let after = self
            .storage
            .transactions
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        self.storage.log_update(
            id.as_str().to_string(),
            Some(after.description.clone()),
            &before,
            &after,
            describe_changes(&before, &after),
        );

        tracing::info!(id = %id, "updated transaction");
        Ok(after)
    }

    /// Remove a transaction, returning what was removed
    pub fn delete(&mut self, id: &TransactionId) -> TrackerResult<Transaction> {
        let removed = self
            .storage
            .transactions
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        let next = apply(self.storage.transactions.all(), LedgerAction::Delete(id.clone()));
        self.storage.transactions.replace(next)?;

        self.storage
            .log_delete(id.as_str().to_string(), Some(removed.description.clone()), &removed);

        tracing::info!(id = %id, "deleted transaction");
        Ok(removed)
    }

    /// Remove every transaction, returning how many were removed
    pub fn clear(&mut self) -> TrackerResult<usize> {
        let removed = self.storage.transactions.all().to_vec();

        let next = apply(&removed, LedgerAction::Clear);
        self.storage.transactions.replace(next)?;

        self.storage.log_clear(removed.len(), removed.as_slice());

        tracing::info!(count = removed.len(), "cleared transactions");
        Ok(removed.len())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full ID or unique prefix
    pub fn find(&self, identifier: &str) -> TrackerResult<&Transaction> {
        self.storage
            .transactions
            .find(identifier)?
            .ok_or_else(|| TrackerError::transaction_not_found(identifier))
    }

    /// All transactions in stored order
    pub fn list(&self) -> &[Transaction] {
        self.storage.transactions.all()
    }
}

/// One-line summary of the fields that differ, or `None` if nothing changed
fn describe_changes(before: &Transaction, after: &Transaction) -> Option<String> {
    let mut changes = Vec::new();

    if before.description != after.description {
        changes.push(format!(
            "description: '{}' -> '{}'",
            before.description, after.description
        ));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.kind != after.kind {
        changes.push(format!("type: {} -> {}", before.kind, after.kind));
    }
    if before.category != after.category {
        changes.push(format!("category: {} -> {}", before.category, after.category));
    }
    if before.date != after.date {
        changes.push(format!("date: {} -> {}", before.date, after.date));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, Operation};
    use crate::models::{Field, Money, TransactionType};
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    fn coffee() -> TransactionDraft {
        TransactionDraft {
            description: "Coffee".into(),
            amount: Some(Money::from_cents(350)),
            kind: TransactionType::Expense,
            category: "food".into(),
            date: "2024-01-01".into(),
        }
    }

    #[test]
    fn test_create_appends_and_persists() {
        let mut storage = Storage::in_memory();
        let mut service = TransactionService::new(&mut storage);

        let txn = service.create(coffee()).unwrap();
        assert_eq!(txn.description, "Coffee");
        assert_eq!(txn.created_at, txn.updated_at);
        assert_eq!(service.list().len(), 1);

        let document = storage.transactions.store().document().unwrap();
        assert!(document.contains("\"description\":\"Coffee\""));
        assert!(document.contains("\"amount\":3.5"));
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let mut storage = Storage::in_memory();
        let mut service = TransactionService::new(&mut storage);

        let err = service.create(TransactionDraft::default()).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(Field::Amount));
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut storage = Storage::in_memory();
        let mut service = TransactionService::new(&mut storage);
        let original = service.create(coffee()).unwrap();

        let mut draft = TransactionDraft::from_transaction(&original);
        draft.amount = Some(Money::from_cents(425));
        draft.description = "Latte".into();

        let updated = service.update(&original.id, draft).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(updated.amount.cents(), 425);
        assert_eq!(service.list()[0].description, "Latte");
    }

    #[test]
    fn test_update_invalid_leaves_list_unchanged() {
        let mut storage = Storage::in_memory();
        let mut service = TransactionService::new(&mut storage);
        let original = service.create(coffee()).unwrap();

        let mut draft = TransactionDraft::from_transaction(&original);
        draft.amount = Some(Money::zero());

        assert!(service.update(&original.id, draft).is_err());
        assert_eq!(service.list()[0], original);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut storage = Storage::in_memory();
        let mut service = TransactionService::new(&mut storage);

        let err = service.update(&TransactionId::new(), coffee()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_and_clear() {
        let mut storage = Storage::in_memory();
        let mut service = TransactionService::new(&mut storage);
        let a = service.create(coffee()).unwrap();
        service.create(coffee()).unwrap();
        service.create(coffee()).unwrap();

        let removed = service.delete(&a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert_eq!(service.list().len(), 2);
        assert!(service.get(&a.id).is_none());

        assert_eq!(service.clear().unwrap(), 2);
        assert!(service.list().is_empty());
        assert!(service.delete(&a.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_by_prefix() {
        let mut storage = Storage::in_memory();
        let mut service = TransactionService::new(&mut storage);
        let txn = service.create(coffee()).unwrap();

        let short = txn.id.to_string();
        assert_eq!(service.find(&short).unwrap().id, txn.id);
        assert!(service.find("txn-zzzzzzzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut storage = Storage::with_store(MemoryStore::new(), Some(logger));
        let mut service = TransactionService::new(&mut storage);

        let txn = service.create(coffee()).unwrap();
        let mut draft = TransactionDraft::from_transaction(&txn);
        draft.date = "2024-01-02".into();
        service.update(&txn.id, draft).unwrap();
        service.delete(&txn.id).unwrap();
        service.clear().unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        let operations: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            vec![Operation::Create, Operation::Update, Operation::Delete, Operation::Clear]
        );
        assert_eq!(entries[0].entity_id, txn.id.as_str());
        assert_eq!(entries[0].entity_name.as_deref(), Some("Coffee"));
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("date: 2024-01-01 -> 2024-01-02")
        );
    }
}
