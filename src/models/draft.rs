//! Transaction drafts and field-level validation
//!
//! A draft is raw user input for a transaction. Validation never rejects the
//! draft wholesale: it reports one message per offending field so the caller
//! can show them all and let the user fix the input.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::transaction::{Transaction, TransactionFields, TransactionType};

/// Date format used for stored dates and command-line input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// A validated field of a transaction draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Description,
    Amount,
    Category,
    Date,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field -> message mapping; empty means the draft is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in field order (description, amount, category, date)
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Raw, unvalidated transaction input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: Option<Money>,
    pub kind: TransactionType,
    pub category: String,
    pub date: String,
}

impl TransactionDraft {
    /// Start an edit from the current values of a stored transaction
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            description: txn.description.clone(),
            amount: Some(txn.amount),
            kind: txn.kind,
            category: txn.category.clone(),
            date: txn.date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Check every field and collect one message per violated rule
    ///
    /// The category/type consistency and date format checks only run once the
    /// basic presence rule for that field passed.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.description.trim().is_empty() {
            errors.insert(Field::Description, "Description is required");
        }

        if !self.amount.is_some_and(|a| a.is_positive()) {
            errors.insert(Field::Amount, "Amount must be greater than 0");
        }

        if self.category.is_empty() {
            errors.insert(Field::Category, "Category is required");
        } else if !Category::accepts(&self.category, self.kind) {
            errors.insert(Field::Category, "Category does not match transaction type");
        }

        if self.date.trim().is_empty() {
            errors.insert(Field::Date, "Date is required");
        } else if parse_date(&self.date).is_none() {
            errors.insert(Field::Date, "Date must be in YYYY-MM-DD format");
        }

        errors
    }

    /// Convert into validated fields, or return every field error
    pub fn into_fields(self) -> Result<TransactionFields, FieldErrors> {
        let errors = self.validate();
        match (self.amount, parse_date(&self.date)) {
            (Some(amount), Some(date)) if errors.is_empty() => Ok(TransactionFields {
                description: self.description.trim().to_string(),
                amount,
                kind: self.kind,
                category: self.category,
                date,
            }),
            _ => Err(errors),
        }
    }
}

/// Validate a draft; an empty result means it can be submitted
pub fn validate(draft: &TransactionDraft) -> FieldErrors {
    draft.validate()
}
