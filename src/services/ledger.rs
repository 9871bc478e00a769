//! Pure list transitions
//!
//! Every change to the transaction list is expressed as a [`LedgerAction`]
//! and applied by [`apply`], which returns a new list and never touches
//! storage. The service layer persists whatever `apply` returns.

use chrono::{DateTime, Utc};

use crate::models::{Transaction, TransactionFields, TransactionId};

/// A single change to the transaction list
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerAction {
    /// Append a new transaction
    Add(Transaction),
    /// Replace the editable fields of the transaction with `id`
    Update {
        id: TransactionId,
        fields: TransactionFields,
        at: DateTime<Utc>,
    },
    /// Remove the transaction with this id
    Delete(TransactionId),
    /// Remove everything
    Clear,
}

/// Compute the list that results from `action`
///
/// Update and delete with an unknown id leave the list unchanged.
pub fn apply(list: &[Transaction], action: LedgerAction) -> Vec<Transaction> {
    match action {
        LedgerAction::Add(txn) => {
            let mut next = list.to_vec();
            next.push(txn);
            next
        }
        LedgerAction::Update { id, fields, at } => list
            .iter()
            .map(|txn| {
                if txn.id == id {
                    let mut updated = txn.clone();
                    updated.replace_fields(fields.clone(), at);
                    updated
                } else {
                    txn.clone()
                }
            })
            .collect(),
        LedgerAction::Delete(id) => list.iter().filter(|t| t.id != id).cloned().collect(),
        LedgerAction::Clear => Vec::new(),
    }
}
