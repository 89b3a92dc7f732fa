//! Snapshot and restore of a session's view state.
//!
//! The controller's state is small: the onboarding flag, the set of expanded
//! cards and the screen history. A host that wants it to survive a suspend,
//! a restart or a configuration change takes a [`Snapshot`], stores it
//! however it likes, and hands it back to [`ScreenController::restore`].
//!
//! Expanded cards are stored by course code rather than position, so a
//! snapshot stays meaningful to anyone reading the JSON.

use crate::catalog::{Catalog, CourseId};
use crate::core::{Screen, State, StateHistory};
use crate::screen::ScreenController;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};
use uuid::Uuid;

pub mod error;

pub use error::{RestoreViolation, SnapshotError};

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Onboarding is left at most once, so a valid history has at most one entry.
const MAX_TRANSITIONS: usize = 1;

type Check = Validation<(), NonEmptyVec<RestoreViolation>>;

/// Serializable copy of a controller's state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    pub taken_at: DateTime<Utc>,

    pub onboarding_dismissed: bool,

    /// Codes of expanded courses, in catalog order
    pub expanded: Vec<String>,

    pub history: StateHistory<Screen>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Write as JSON, replacing `path` atomically.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let json = self.to_json()?;
        let mut temp = path.as_os_str().to_owned();
        temp.push(".tmp");
        fs::write(&temp, json)?;
        fs::rename(&temp, path)?;
        debug!(path = %path.display(), id = %self.id, "snapshot saved");
        Ok(())
    }

    /// Read a snapshot written by [`save`](Self::save).
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, SnapshotError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot = Self::from_json(&json)?;
        debug!(path = %path.display(), id = %snapshot.id, "snapshot loaded");
        Ok(Some(snapshot))
    }

    fn recorded_screen(&self) -> Screen {
        if self.onboarding_dismissed {
            Screen::CourseList
        } else {
            Screen::Onboarding
        }
    }

    /// Check the snapshot against `catalog`, collecting every violation.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), Vec<RestoreViolation>> {
        let mut checks: Vec<Check> = vec![self.check_version()];
        checks.extend(self.check_history());

        let mut seen = HashSet::new();
        for code in &self.expanded {
            checks.push(if catalog.find(code).is_none() {
                Validation::fail(RestoreViolation::UnknownCourse { code: code.clone() })
            } else if !seen.insert(code.as_str()) {
                Validation::fail(RestoreViolation::DuplicateCourse { code: code.clone() })
            } else {
                Validation::success(())
            });
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }

    fn check_version(&self) -> Check {
        if self.version == SNAPSHOT_VERSION {
            Validation::success(())
        } else {
            Validation::fail(RestoreViolation::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            })
        }
    }

    fn check_history(&self) -> Vec<Check> {
        let transitions = self.history.transitions();
        let mut checks = Vec::new();

        if transitions.len() > MAX_TRANSITIONS {
            checks.push(Validation::fail(RestoreViolation::TooManyTransitions {
                count: transitions.len(),
                max: MAX_TRANSITIONS,
            }));
        }

        checks.extend(
            transitions
                .iter()
                .filter(|t| t.from.is_final())
                .map(|t| {
                    Validation::fail(RestoreViolation::LeavesFinalState {
                        from: t.from.name().to_string(),
                    })
                }),
        );

        let recorded = self.recorded_screen();
        if let Some(last) = self.history.last().filter(|last| last.to != recorded) {
            checks.push(Validation::fail(RestoreViolation::HistoryMismatch {
                history: last.to.name().to_string(),
                recorded: recorded.name().to_string(),
            }));
        }
        checks
    }
}

impl ScreenController {
    /// Capture the current state.
    pub fn snapshot(&self) -> Snapshot {
        let catalog = self.catalog();
        Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            onboarding_dismissed: self.onboarding_dismissed(),
            expanded: self
                .expanded_ids()
                .into_iter()
                .filter_map(|id| catalog.get(id).map(|c| c.code.to_string()))
                .collect(),
            history: self.history().clone(),
        }
    }

    /// Rebuild a controller from a snapshot taken against `catalog`.
    ///
    /// Nothing is applied unless the whole snapshot is valid.
    pub fn restore(catalog: Catalog, snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        if let Err(violations) = snapshot.validate(&catalog) {
            warn!(id = %snapshot.id, count = violations.len(), "snapshot rejected");
            return Err(SnapshotError::Invalid(violations));
        }

        let expanded: Vec<CourseId> = snapshot
            .expanded
            .iter()
            .filter_map(|code| catalog.find(code))
            .collect();
        debug!(
            id = %snapshot.id,
            screen = snapshot.recorded_screen().name(),
            expanded = expanded.len(),
            "snapshot restored"
        );
        Ok(Self::from_parts(
            catalog,
            snapshot.recorded_screen(),
            &expanded,
            snapshot.history.clone(),
        ))
    }
}
