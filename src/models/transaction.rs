//! Transaction model
//!
//! A transaction is a single income or expense event. Records are persisted
//! with camelCase field names (`createdAt`, `updatedAt`) and the type stored
//! under `type`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid transaction type: '{}'. Use income or expense",
                other
            )),
        }
    }
}

/// The user-editable fields of a transaction, already validated
///
/// Produced by [`TransactionDraft::into_fields`](super::TransactionDraft::into_fields).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFields {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionType,
    pub category: String,
    pub date: NaiveDate,
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Free-text description
    pub description: String,

    /// Always positive; the direction comes from `kind`
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Category id from the category table
    pub category: String,

    /// Calendar date of the event
    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction from validated fields, stamped with `now`
    pub fn new(fields: TransactionFields, now: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            description: fields.description,
            amount: fields.amount,
            kind: fields.kind,
            category: fields.category,
            date: fields.date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every user-editable field, keeping id and creation time
    pub fn replace_fields(&mut self, fields: TransactionFields, now: DateTime<Utc>) {
        self.description = fields.description;
        self.amount = fields.amount;
        self.kind = fields.kind;
        self.category = fields.category;
        self.date = fields.date;
        self.updated_at = now;
    }

    /// The user-editable fields of this transaction
    pub fn fields(&self) -> TransactionFields {
        TransactionFields {
            description: self.description.clone(),
            amount: self.amount,
            kind: self.kind,
            category: self.category.clone(),
            date: self.date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Display name of the category, or the raw id if it is not in the table
    pub fn category_name(&self) -> &str {
        Category::display_name(&self.category)
    }

    /// Amount with the sign implied by the type (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}
