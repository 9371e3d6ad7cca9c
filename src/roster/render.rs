//! Terminal rendering of the roster

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use super::hit_test::ACTIONS_TEXT;
use super::record::Record;

/// Shown instead of a table when there are no records
pub const EMPTY_MESSAGE: &str = "No students yet. Add the first one above.";

/// Build the roster table
///
/// Rows are numbered from 1, the same numbering the commands accept.
pub fn render_table(records: &[Record]) -> String {
    if records.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#"),
            Cell::new("Student Name"),
            Cell::new("Enrollment No."),
            Cell::new("Courses"),
            Cell::new("Phone"),
            Cell::new("Actions"),
        ]);

    for (i, record) in records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&record.name),
            Cell::new(&record.enrollment),
            Cell::new(&record.courses),
            Cell::new(&record.phone),
            Cell::new(ACTIONS_TEXT),
        ]);
    }

    let noun = if records.len() == 1 { "student" } else { "students" };
    format!("{}\n\n{} {}", table, records.len(), noun)
}

/// One-line summary, e.g. `1. Alice | E100 | Math | 555-1234567`
pub fn row_summary(index: usize, record: &Record) -> String {
    format!(
        "{}. {} | {} | {} | {}",
        index + 1,
        record.name,
        record.enrollment,
        record.courses,
        record.phone
    )
}

/// Confirmation question asked before deleting
pub fn delete_prompt(record: &Record) -> String {
    let name = if record.name.is_empty() {
        "this record"
    } else {
        record.name.as_str()
    };
    format!("Delete {}? This cannot be undone.", name)
}
