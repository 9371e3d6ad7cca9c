//! Core record-management engine
//!
//! Everything here is front-end agnostic: the terminal commands and any
//! windowed front-end call the same store, validation and hit-testing code.

pub mod metrics;
pub mod persist;
pub mod record;
pub mod render;
pub mod session;
pub mod store;
pub mod validate;

pub use hit_test::{locate_action, resolve_click, Action, Rect, TableLayout, TextMeasure};
pub use persist::{JsonFile, StorageError};
pub use record::{Draft, Record};
pub use session::Session;
pub use store::{Outcome, RecordStore};
pub use validate::{validate, ValidationError};
