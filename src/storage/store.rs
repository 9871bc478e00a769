//! Persistence port for the transaction list
//!
//! The whole list is read and written as one unit. Aggregation code never
//! sees a store; only the repository talks to one.

use std::cell::RefCell;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::TrackerError;
use crate::models::Transaction;

/// Load/save interface for the persisted transaction list
pub trait TransactionStore {
    /// Read the full list; a store with nothing saved yet returns an empty list
    fn load(&self) -> Result<Vec<Transaction>, TrackerError>;

    /// Replace the persisted list with `transactions`
    fn save(&self, transactions: &[Transaction]) -> Result<(), TrackerError>;

    /// Human-readable location, used in log messages
    fn describe(&self) -> String;
}

/// Stores the list as a single JSON array in one file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next document is written to before it replaces the
    /// current one
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("transactions.json"));
        name.push(".saving");
        self.path.with_file_name(name)
    }

    fn storage_error(&self, action: &str, err: impl std::fmt::Display) -> TrackerError {
        TrackerError::Storage(format!(
            "Failed to {} transactions at {}: {}",
            action,
            self.path.display(),
            err
        ))
    }

    fn write_staged(&self, staging: &Path, document: &[u8]) -> io::Result<()> {
        let mut file = File::create(staging)?;
        file.write_all(document)?;
        file.write_all(b"\n")?;
        file.sync_all()
    }
}

impl TransactionStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Transaction>, TrackerError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.storage_error("read", e)),
        };

        serde_json::from_slice(&raw).map_err(|e| self.storage_error("parse", e))
    }

    /// Write the new array next to the old one, then swap it into place so
    /// a failed save leaves the previous document intact
    fn save(&self, transactions: &[Transaction]) -> Result<(), TrackerError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.storage_error("prepare directory for", e))?;
        }

        let document =
            serde_json::to_vec_pretty(transactions).map_err(|e| self.storage_error("encode", e))?;

        let staging = self.staging_path();
        self.write_staged(&staging, &document)
            .and_then(|()| fs::rename(&staging, &self.path))
            .map_err(|e| {
                let _ = fs::remove_file(&staging);
                self.storage_error("write", e)
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps the serialized list in memory
///
/// Data goes through the same JSON encoding as the file store, so tests
/// exercise the persisted shape without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw JSON document, e.g. one that is corrupt
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
        }
    }

    /// The currently stored JSON document, if anything was saved
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl TransactionStore for MemoryStore {
    fn load(&self) -> Result<Vec<Transaction>, TrackerError> {
        match self.document.borrow().as_deref() {
            Some(doc) => serde_json::from_str(doc)
                .map_err(|e| TrackerError::Storage(format!("Failed to parse memory store: {}", e))),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), TrackerError> {
        let doc = serde_json::to_string(transactions)?;
        *self.document.borrow_mut() = Some(doc);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
