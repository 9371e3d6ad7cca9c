//! Edit command - Change fields of one student

use anyhow::Result;
use std::path::Path;

use super::utils;
use roster::roster::Draft;

/// Replacement values; `None` keeps the current value
#[derive(Debug, Default)]
pub struct EditOptions {
    pub name: Option<String>,
    pub enrollment: Option<String>,
    pub courses: Option<String>,
    pub phone: Option<String>,
}

/// Execute the edit command for a 1-based `row`
pub fn execute(data: &Path, row: usize, options: &EditOptions) -> Result<bool> {
    let mut session = utils::open_session(data);

    let Some(current) = session.begin_edit(utils::row_to_index(row)).cloned() else {
        return utils::report(Ok(roster::roster::Outcome::OutOfRange), "Saved", row);
    };

    let draft = Draft::new(
        options.name.as_deref().unwrap_or(&current.name),
        options.enrollment.as_deref().unwrap_or(&current.enrollment),
        options.courses.as_deref().unwrap_or(&current.courses),
        options.phone.as_deref().unwrap_or(&current.phone),
    );
    let result = session.commit_edit(draft);
    utils::report(result, "Saved", row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::roster::JsonFile;
    use tempfile::TempDir;

    #[test]
    fn test_edit_changes_only_given_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        crate::commands::add::execute(&path, "Alice", "E100", "Math", "555-1234567").unwrap();

        let options = EditOptions {
            name: Some("Alice B".into()),
            courses: Some("Math, Physics".into()),
            ..Default::default()
        };
        assert!(execute(&path, 1, &options).unwrap());

        let records = JsonFile::new(&path).load();
        assert_eq!(records[0].name, "Alice B");
        assert_eq!(records[0].enrollment, "E100");
        assert_eq!(records[0].courses, "Math, Physics");
    }

    #[test]
    fn test_edit_missing_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        assert!(!execute(&path, 0, &EditOptions::default()).unwrap());
        assert!(!execute(&path, 3, &EditOptions::default()).unwrap());
    }

    #[test]
    fn test_edit_rejects_invalid_phone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        crate::commands::add::execute(&path, "Alice", "E100", "Math", "555-1234567").unwrap();

        let options = EditOptions {
            phone: Some("12-34".into()),
            ..Default::default()
        };
        assert!(!execute(&path, 1, &options).unwrap());
        assert_eq!(JsonFile::new(&path).load()[0].phone, "555-1234567");
    }
}
