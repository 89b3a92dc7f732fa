//! Session lifecycle for the front end: restore a controller from the state
//! file, apply one-shot `--print` commands, save it again on exit.
//!
//! A state file that cannot be used is never fatal. Corrupt or rejected
//! snapshots are logged and replaced by a fresh session; only real I/O
//! failures are reported.

use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::screen::{view, ScreenController};
use crate::snapshot::{Snapshot, SnapshotError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown course code {code}")]
    UnknownCourse { code: String },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("failed to write view: {0}")]
    Io(#[from] std::io::Error),
}

/// Restore the session kept in `state_file`, or start a fresh one.
///
/// No file, unparseable JSON and snapshots that fail validation all give a
/// fresh controller over `catalog`.
pub fn load(catalog: Catalog, state_file: Option<&Path>) -> Result<ScreenController, SessionError> {
    let Some(path) = state_file else {
        return Ok(ScreenController::new(catalog));
    };

    let snapshot = match Snapshot::load(path) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            debug!(path = %path.display(), "no saved session");
            return Ok(ScreenController::new(catalog));
        }
        Err(e @ SnapshotError::DeserializationFailed(_)) => {
            warn!(path = %path.display(), error = %e, "discarding unreadable session");
            return Ok(ScreenController::new(catalog));
        }
        Err(e) => return Err(e.into()),
    };

    match ScreenController::restore(catalog.clone(), &snapshot) {
        Ok(controller) => Ok(controller),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "discarding saved session");
            Ok(ScreenController::new(catalog))
        }
    }
}

/// Write the session to `state_file`, if one is configured.
pub fn save(controller: &ScreenController, state_file: Option<&Path>) -> Result<(), SessionError> {
    if let Some(path) = state_file {
        controller.snapshot().save(path)?;
    }
    Ok(())
}

/// Dismiss onboarding if asked and expand every course in `expand`.
///
/// Every code is checked before anything changes, so an unknown code leaves
/// the controller untouched. Codes already expanded stay expanded.
pub fn apply_print_flags(
    controller: &mut ScreenController,
    dismiss: bool,
    expand: &[String],
) -> Result<(), SessionError> {
    if let Some(code) = expand
        .iter()
        .find(|code| controller.catalog().find(code.as_str()).is_none())
    {
        return Err(SessionError::UnknownCourse { code: code.clone() });
    }

    if dismiss {
        controller.dismiss_onboarding();
    }
    for code in expand {
        if !controller.is_expanded(code.as_str()) {
            controller.toggle_expanded(code.as_str());
        }
    }
    Ok(())
}

/// Apply the `--print` flags and write the plain-text view to `out`.
pub fn print_view<W: Write>(
    mut controller: ScreenController,
    dismiss: bool,
    expand: &[String],
    out: &mut W,
) -> Result<ScreenController, SessionError> {
    apply_print_flags(&mut controller, dismiss, expand)?;
    out.write_all(view(&controller).to_plain_text().as_bytes())?;
    out.flush()?;
    Ok(controller)
}
