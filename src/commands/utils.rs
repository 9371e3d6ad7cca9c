//! Shared helpers for commands

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

use roster::roster::{JsonFile, Outcome, RecordStore, Session, StorageError};

/// Load the roster at `data` into a fresh session
pub fn open_session(data: &Path) -> Session {
    Session::new(RecordStore::open(JsonFile::new(data)))
}

/// Convert a 1-based display row into a store index
///
/// Row 0 maps to -1 so the store rejects it as out of range.
pub fn row_to_index(row: usize) -> i64 {
    i64::try_from(row).map(|r| r - 1).unwrap_or(i64::MAX)
}

/// Ask a yes/no question on stdin (default no)
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} (y/N) ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read confirmation")?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Print the outcome of a mutation; returns whether it was applied
///
/// Storage failures are returned as errors, separate from warnings.
pub fn report(
    result: Result<Outcome, StorageError>,
    success: &str,
    row: usize,
) -> Result<bool> {
    let outcome = result.context("Failed to save data")?;
    match outcome {
        Outcome::Applied => {
            println!("{}", success.green());
            Ok(true)
        }
        Outcome::Rejected(reason) => {
            eprintln!("{} {}", "Invalid input:".yellow(), reason);
            Ok(false)
        }
        Outcome::OutOfRange => {
            eprintln!("{} {}", "No student at row".yellow(), row);
            Ok(false)
        }
    }
}
