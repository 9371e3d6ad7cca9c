//! Ordered, file-backed record store
//!
//! Records are addressed by their position. Every successful mutation
//! rewrites the whole collection through the [`JsonFile`] adapter.
//!
//! A save failure is returned as `Err` *after* the in-memory change has been
//! applied: memory is then ahead of disk and the caller decides whether to
//! retry or warn.

use super::persist::{JsonFile, StorageError};
use super::record::{Draft, Record};
use super::validate::{validate_draft, ValidationError};

/// Result of a store mutation that reached no storage error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The change was applied and saved
    Applied,
    /// Input failed validation; nothing changed
    Rejected(ValidationError),
    /// The index does not name a record; nothing changed
    OutOfRange,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// User-facing reason for a rejection, if any
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Rejected(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

/// The in-memory roster and its backing file
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    file: JsonFile,
}

impl RecordStore {
    /// Load the roster from `file` (empty if missing or corrupt)
    pub fn open(file: JsonFile) -> Self {
        let records = file.load();
        Self { records, file }
    }

    pub fn file(&self) -> &JsonFile {
        &self.file
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only view of all records in order
    pub fn read_all(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: i64) -> Option<&Record> {
        self.position(index).map(|i| &self.records[i])
    }

    /// Validate and append a record
    pub fn create(&mut self, draft: Draft<'_>) -> Result<Outcome, StorageError> {
        if let Err(e) = validate_draft(&draft) {
            tracing::debug!("Rejected new record: {}", e);
            return Ok(Outcome::Rejected(e));
        }

        self.records.push(draft.trimmed());
        self.persist()?;
        tracing::info!("Added record #{}", self.records.len() - 1);
        Ok(Outcome::Applied)
    }

    /// Validate and replace the record at `index` in place
    pub fn update(&mut self, index: i64, draft: Draft<'_>) -> Result<Outcome, StorageError> {
        let Some(i) = self.position(index) else {
            return Ok(Outcome::OutOfRange);
        };
        if let Err(e) = validate_draft(&draft) {
            tracing::debug!("Rejected update of record #{}: {}", i, e);
            return Ok(Outcome::Rejected(e));
        }

        self.records[i] = draft.trimmed();
        self.persist()?;
        tracing::info!("Updated record #{}", i);
        Ok(Outcome::Applied)
    }

    /// Remove the record at `index`, shifting later records down by one
    pub fn delete(&mut self, index: i64) -> Result<Outcome, StorageError> {
        let Some(i) = self.position(index) else {
            return Ok(Outcome::OutOfRange);
        };

        self.records.remove(i);
        self.persist()?;
        tracing::info!("Deleted record #{}", i);
        Ok(Outcome::Applied)
    }

    /// Map an external index to a valid position
    fn position(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.records.len())
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.file.save(&self.records).inspect_err(|e| {
            tracing::warn!("Roster is ahead of disk: {}", e);
        })
    }
}
