//! Stable exit codes for driftgen CLI commands.

use crate::error::{ErrorKind, HistoryError};

/// Command succeeded.
pub const OK: i32 = 0;
/// Any failure not listed below (I/O, config, git, symbol order, category).
pub const FAILED: i32 = 1;
/// A step's marker was not found in its target file.
pub const MISSING_MARKER: i32 = 2;
/// The plan's entry counts differ from its declared counts.
pub const PLAN_SIZE: i32 = 3;
/// Staging or committing a step failed.
pub const COMMIT: i32 = 4;

/// Map an error to its exit code using the first [`HistoryError`] in its chain.
pub fn for_error(err: &anyhow::Error) -> i32 {
    let kind = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<HistoryError>())
        .map(HistoryError::kind);
    match kind {
        Some(ErrorKind::MissingMarker) => MISSING_MARKER,
        Some(ErrorKind::PlanSize) => PLAN_SIZE,
        Some(ErrorKind::Commit) => COMMIT,
        Some(ErrorKind::Other) | None => FAILED,
    }
}
