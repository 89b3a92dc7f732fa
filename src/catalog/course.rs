//! Course records and course identities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel stored in `prerequisites` when a course has none.
pub const NO_PREREQUISITES: &str = "None";

/// One immutable catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Course {
    pub title: &'static str,
    /// Unique catalog identifier, e.g. `SECT-3113`.
    pub code: &'static str,
    pub credit_hours: u8,
    pub description: &'static str,
    pub prerequisites: &'static str,
}

impl Course {
    /// Card heading: `"{title} ({code})"`.
    pub fn heading(&self) -> String {
        format!("{} ({})", self.title, self.code)
    }

    pub fn has_prerequisites(&self) -> bool {
        self.prerequisites != NO_PREREQUISITES
    }
}

/// Position of a course in catalog display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub(crate) usize);

impl CourseId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
