//! Transaction identifiers
//!
//! An id is an opaque string. New ids are random UUIDs, but stored records
//! may carry any string and are kept as-is. The short display form (`txn-`
//! plus the first eight characters) is what the CLI prints and accepts.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "txn-";
const SHORT_LEN: usize = 8;

/// Unique identifier of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The full stored id
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first eight characters of the id, or all of it if shorter
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_LEN) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }

    /// Whether `prefix` (with or without the `txn-` display prefix) is a
    /// case-insensitive prefix of this id
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = strip_display_prefix(prefix.trim()).to_lowercase();
        !prefix.is_empty() && self.0.to_lowercase().starts_with(&prefix)
    }
}

fn strip_display_prefix(s: &str) -> &str {
    s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s)
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.short())
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl FromStr for TransactionId {
    type Err = Infallible;

    /// Takes the full id; a leading `txn-` is not stripped
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_uuids() {
        let id = TransactionId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());

        let display = id.to_string();
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = TransactionId::from("550e8400-e29b-41d4-a716-446655440000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");

        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_non_uuid_ids_are_kept() {
        let id: TransactionId = serde_json::from_str("\"1704450000000\"").unwrap();
        assert_eq!(id.as_str(), "1704450000000");
        assert_eq!(id.to_string(), "txn-17044500");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1704450000000\"");
    }

    #[test]
    fn test_short_form_of_short_and_multibyte_ids() {
        assert_eq!(TransactionId::from("abc").to_string(), "txn-abc");
        assert_eq!(TransactionId::from("").short(), "");
        assert_eq!(TransactionId::from("ééééééééé").short(), "éééééééé");
    }

    #[test]
    fn test_matches_prefix() {
        let id = TransactionId::from("550e8400-e29b-41d4-a716-446655440000");
        assert!(id.matches_prefix("550e"));
        assert!(id.matches_prefix("txn-550E8400"));
        assert!(id.matches_prefix(&id.to_string()));
        assert!(!id.matches_prefix("551"));
        assert!(!id.matches_prefix(""));
        assert!(!id.matches_prefix("txn-"));
    }
}
