//! Student record types
//!
//! A record has no synthetic key: its position in the collection is its
//! only identity.

use serde::{Deserialize, Serialize};

/// One student entry as stored on disk
///
/// Every field defaults to an empty string when absent from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub enrollment: String,

    /// Free-form course list, kept as a single string
    #[serde(default)]
    pub courses: String,

    /// Phone number with the user's original formatting
    #[serde(default)]
    pub phone: String,
}

/// Untrimmed candidate input for a create or update
#[derive(Debug, Clone, Copy)]
pub struct Draft<'a> {
    pub name: &'a str,
    pub enrollment: &'a str,
    pub courses: &'a str,
    pub phone: &'a str,
}

impl<'a> Draft<'a> {
    pub fn new(name: &'a str, enrollment: &'a str, courses: &'a str, phone: &'a str) -> Self {
        Self {
            name,
            enrollment,
            courses,
            phone,
        }
    }

    /// Build the stored record, trimming all four fields
    pub fn trimmed(&self) -> Record {
        Record {
            name: self.name.trim().to_string(),
            enrollment: self.enrollment.trim().to_string(),
            courses: self.courses.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}
