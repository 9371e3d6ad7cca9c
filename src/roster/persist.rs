//! JSON file persistence for the record collection
//!
//! The whole collection is rewritten on every save. Loading is lenient: a
//! missing, unreadable or malformed file is treated as an empty roster.

use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::record::Record;

/// Failure to persist the collection
///
/// When this is returned the file on disk still holds the previous save.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A roster stored as a JSON array of objects
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record from the file
    ///
    /// Never fails; anything that isn't a list of objects yields an empty
    /// collection.
    pub fn load(&self) -> Vec<Record> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No roster at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match parse_records(&content) {
            Some(records) => {
                tracing::debug!(
                    "Loaded {} records from {}",
                    records.len(),
                    self.path.display()
                );
                records
            }
            None => {
                tracing::warn!(
                    "Ignoring malformed roster at {}, starting empty",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the file with `records`
    ///
    /// Writes go to a temporary file in the same directory which is then
    /// renamed over the target, so a failure never truncates the old file.
    pub fn save(&self, records: &[Record]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(records)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let write_err = |source: io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        fs::create_dir_all(&dir).map_err(write_err)?;
        let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        tracing::debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Parse file contents into records, or `None` if the shape is wrong
fn parse_records(content: &str) -> Option<Vec<Record>> {
    let json: Value = serde_json::from_str(content).ok()?;
    let items = json.as_array()?;
    items
        .iter()
        .map(|item| {
            if item.is_object() {
                serde_json::from_value(item.clone()).ok()
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Record> {
        vec![
            Record {
                name: "Alice".into(),
                enrollment: "E100".into(),
                courses: "Math".into(),
                phone: "555-1234567".into(),
            },
            Record {
                name: "Bob".into(),
                enrollment: "E100".into(),
                courses: "Bio, Chem".into(),
                phone: "(555) 765 4321".into(),
            },
        ]
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.path().join("storage.json"));

        file.save(&sample()).unwrap();
        assert_eq!(file.load(), sample());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.path().join("nope.json"));
        assert!(file.load().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[{\"name\": \"Alice\"").unwrap();
        assert!(JsonFile::new(&path).load().is_empty());
    }

    #[test]
    fn test_non_list_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"name": "Alice"}"#).unwrap();
        assert!(JsonFile::new(&path).load().is_empty());

        fs::write(&path, r#"[{"name": "Alice"}, 7]"#).unwrap();
        assert!(JsonFile::new(&path).load().is_empty());
    }

    #[test]
    fn test_lenient_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"[{"name": "Alice", "age": 20}]"#).unwrap();

        let records = JsonFile::new(&path).load();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].phone, "");
    }

    #[test]
    fn test_save_writes_pretty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        JsonFile::new(&path).save(&sample()[..1]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains("\"enrollment\": \"E100\""));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.path().join("nested").join("storage.json"));
        file.save(&sample()).unwrap();
        assert_eq!(file.load().len(), 2);
    }

    #[test]
    fn test_failed_save_is_reported() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let file = JsonFile::new(blocker.join("storage.json"));
        let err = file.save(&sample()).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
    }

    #[test]
    fn test_failed_save_keeps_previous_contents() {
        let dir = TempDir::new().unwrap();
        // A directory at the target path cannot be replaced by a file.
        let path = dir.path().join("storage.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "previous").unwrap();

        let err = JsonFile::new(&path).save(&sample()).unwrap_err();
        assert!(err.to_string().contains("storage.json"));
        assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "previous");
    }
}
