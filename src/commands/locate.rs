//! Locate command - Resolve a pointer position in the rendered table
//!
//! Uses the desktop table geometry ([`TableLayout::default`]) and either a
//! real font file or fixed-width cells to find which row's Edit or Delete
//! label sits under the pointer.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use super::{delete, utils};
use roster::roster::hit_test::{resolve_click, Action, TableLayout, TextMeasure};
use roster::roster::metrics::{CellMetrics, FontMetrics};
use roster::roster::render;

/// Options for the locate command
pub struct LocateOptions {
    /// Font the rows are drawn with; fixed-width cells when absent
    pub font: Option<PathBuf>,
    /// Font size in pixels
    pub font_size: f32,
    /// Cell width used without a font
    pub cell_width: f32,
    /// Extra pixels around each label
    pub tolerance: f32,
    /// Carry out the located action
    pub apply: bool,
    /// Skip the delete confirmation
    pub yes: bool,
}

/// Build the text measure the rows are drawn with
pub fn text_measure(options: &LocateOptions) -> Result<Box<dyn TextMeasure>> {
    match &options.font {
        Some(path) => {
            let metrics = FontMetrics::from_file(path, options.font_size)
                .with_context(|| format!("Failed to prepare font: {}", path.display()))?;
            Ok(Box::new(metrics))
        }
        None => Ok(Box::new(CellMetrics::new(options.cell_width))),
    }
}

/// Find the action under `(x, y)`; returns the 1-based row and action
pub fn locate(
    data: &Path,
    x: f32,
    y: f32,
    options: &LocateOptions,
) -> Result<Option<(usize, Action)>> {
    let measure = text_measure(options)?;
    let session = utils::open_session(data);
    let hit = resolve_click(
        &TableLayout::default(),
        session.records().len(),
        x,
        y,
        measure.as_ref(),
        options.tolerance,
    );
    Ok(hit.map(|(index, action)| (index + 1, action)))
}

/// Summary of the record at 1-based `row`, if it exists
pub fn edit_preview(data: &Path, row: usize) -> Option<String> {
    let session = utils::open_session(data);
    let record = session.store().get(utils::row_to_index(row))?;
    Some(render::row_summary(row - 1, record))
}

/// Execute the locate command
pub fn execute(data: &Path, x: f32, y: f32, options: &LocateOptions) -> Result<bool> {
    let Some((row, action)) = locate(data, x, y, options)? else {
        println!("none");
        return Ok(true);
    };

    match action {
        Action::Edit => {
            println!("edit {}", row);
            if options.apply {
                // Editing needs field values, so only preview the row here
                if let Some(preview) = edit_preview(data, row) {
                    println!("{}", preview.dimmed());
                    println!("Change it with: roster edit {} --name ... --phone ...", row);
                }
            }
            Ok(true)
        }
        Action::Delete => {
            println!("delete {}", row);
            if options.apply {
                return delete::execute(data, row, options.yes);
            }
            Ok(true)
        }
    }
}
