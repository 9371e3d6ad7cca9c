//! Storage location and front-end defaults

use anyhow::{Context, Result};
use std::path::PathBuf;

/// File name of the roster, kept next to the executable
pub const DATA_FILE: &str = "storage.json";

/// Environment variable that overrides the roster location
pub const DATA_ENV: &str = "ROSTER_DATA";

/// Default font size for hit-testing: 10pt at 96 dpi
pub const DEFAULT_FONT_PX: f32 = 13.3;

/// Default character cell width when no font file is given
pub const DEFAULT_CELL_WIDTH: f32 = 8.0;

/// Get the default roster path
/// - `storage.json` beside the running executable
/// - otherwise `<data dir>/roster/storage.json`
///   (e.g. `~/.local/share/roster/storage.json` on Linux)
pub fn default_data_file() -> Result<PathBuf> {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DATA_FILE)));
    if let Some(path) = beside_exe {
        return Ok(path);
    }

    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join("roster").join(DATA_FILE))
}

/// Use the explicit path if one was given, else the default
pub fn resolve_data_file(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_data_file(),
    }
}
