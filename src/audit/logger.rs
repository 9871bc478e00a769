//! Append-only JSONL audit log

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// Appends one JSON object per line to the audit file and reads them back
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append `entry` as a single line
    ///
    /// The line is encoded up front and written with one call, so a failed
    /// write never leaves half an entry behind.
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        let mut line = serde_json::to_vec(entry)
            .map_err(|e| TrackerError::Json(format!("Cannot encode {} audit entry: {}", entry.operation, e)))?;
        line.push(b'\n');

        if let Some(dir) = self.log_path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(&line))
            .map_err(|e| self.io_error(e))
    }

    /// Every entry in the log, oldest first
    pub fn read_all(&self) -> TrackerResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.log_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::Deserializer::from_str(&contents)
            .into_iter::<AuditEntry>()
            .enumerate()
            .map(|(index, entry)| {
                entry.map_err(|e| {
                    TrackerError::Json(format!("Audit entry {} is unreadable: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TrackerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let keep_from = entries.len().saturating_sub(count);
        Ok(entries.split_off(keep_from))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn io_error(&self, err: io::Error) -> TrackerError {
        TrackerError::Io(format!("Audit log {}: {}", self.log_path.display(), err))
    }
}
