//! List command - Show all students

use anyhow::Result;
use std::path::Path;

use super::utils;
use roster::roster::render;

/// Execute the list command and return formatted output
pub fn execute(data: &Path) -> Result<String> {
    let session = utils::open_session(data);
    Ok(render::render_table(session.records()))
}
