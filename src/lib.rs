//! roster library
//!
//! Record-management core for a single-user student roster: validation,
//! an index-addressed store persisted to a JSON file, and hit-testing for
//! the text-only Edit/Delete actions cell.

pub mod config;
pub mod roster;
