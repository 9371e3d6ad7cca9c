//! Add command - Append a student to the roster

use anyhow::Result;
use std::path::Path;

use super::utils;
use roster::roster::Draft;

/// Execute the add command
pub fn execute(
    data: &Path,
    name: &str,
    enrollment: &str,
    courses: &str,
    phone: &str,
) -> Result<bool> {
    let mut session = utils::open_session(data);
    let result = session.create(Draft::new(name, enrollment, courses, phone));
    utils::report(result, "Student added", session.records().len())
}
