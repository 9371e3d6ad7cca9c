//! Application state shared by front-ends
//!
//! Owns the record store plus the position currently being edited. The
//! editing position is dropped whenever a delete could have shifted it.

use super::persist::StorageError;
use super::record::{Draft, Record};
use super::store::{Outcome, RecordStore};

#[derive(Debug)]
pub struct Session {
    store: RecordStore,
    editing: Option<usize>,
}

impl Session {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            editing: None,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn records(&self) -> &[Record] {
        self.store.read_all()
    }

    pub fn create(&mut self, draft: Draft<'_>) -> Result<Outcome, StorageError> {
        self.store.create(draft)
    }

    /// Mark the record at `index` as being edited
    ///
    /// Returns the record to pre-fill the edit form, or `None` if the index
    /// is out of range.
    pub fn begin_edit(&mut self, index: i64) -> Option<&Record> {
        let position = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.store.len());
        self.editing = position;
        position.map(|i| &self.store.read_all()[i])
    }

    /// Position currently being edited, if it still names a record
    pub fn editing(&self) -> Option<usize> {
        self.editing.filter(|&i| i < self.store.len())
    }

    pub fn editing_record(&self) -> Option<&Record> {
        self.editing().map(|i| &self.store.read_all()[i])
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the edit form over the record being edited
    ///
    /// The editing position is kept on rejection so the user can fix the
    /// input, and cleared once the update is applied.
    pub fn commit_edit(&mut self, draft: Draft<'_>) -> Result<Outcome, StorageError> {
        let Some(i) = self.editing() else {
            self.editing = None;
            return Ok(Outcome::OutOfRange);
        };

        let outcome = self.store.update(i as i64, draft)?;
        if outcome.is_applied() {
            self.editing = None;
        }
        Ok(outcome)
    }

    /// Delete a record, invalidating an edit at or after it
    pub fn delete(&mut self, index: i64) -> Result<Outcome, StorageError> {
        let result = self.store.delete(index);
        // The record is gone from memory even if the save failed.
        if matches!(result, Ok(Outcome::Applied) | Err(_)) {
            if let (Some(editing), Ok(deleted)) = (self.editing, usize::try_from(index)) {
                if deleted <= editing {
                    self.editing = None;
                }
            }
        }
        result
    }
}
