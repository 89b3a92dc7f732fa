//! Snapshot error types.

use thiserror::Error;

/// A single reason a snapshot could not be restored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RestoreViolation {
    #[error("unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("course {code} is not in the catalog")]
    UnknownCourse { code: String },

    #[error("course {code} is listed as expanded more than once")]
    DuplicateCourse { code: String },

    #[error("history ends on {history} but the snapshot says {recorded}")]
    HistoryMismatch { history: String, recorded: String },

    #[error("history has {count} transitions, at most {max} allowed")]
    TooManyTransitions { count: usize, max: usize },

    #[error("history leaves {from}, which is final")]
    LeavesFinalState { from: String },
}

/// Errors that can occur while taking, encoding or restoring a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("serialization failed: {0}")]
    SerializationFailed(String),

    #[error("deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("snapshot rejected: {}", join(.0))]
    Invalid(Vec<RestoreViolation>),

    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

fn join(violations: &[RestoreViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
