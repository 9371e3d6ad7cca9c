//! Delete command - Remove one student

use anyhow::Result;
use std::path::Path;

use super::utils;
use roster::roster::{render, Outcome};

/// Execute the delete command for a 1-based `row`
pub fn execute(data: &Path, row: usize, yes: bool) -> Result<bool> {
    let mut session = utils::open_session(data);
    let index = utils::row_to_index(row);

    let Some(record) = session.store().get(index) else {
        return utils::report(Ok(Outcome::OutOfRange), "Deleted", row);
    };

    if !yes {
        println!("{}", render::row_summary(row - 1, record));
        if !utils::confirm(&render::delete_prompt(record))? {
            println!("Aborted.");
            return Ok(false);
        }
    }

    let result = session.delete(index);
    utils::report(result, "Deleted", row)
}
