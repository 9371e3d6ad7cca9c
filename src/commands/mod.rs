//! CLI commands

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod locate;
pub mod utils;
