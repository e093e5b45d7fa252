//! File-level substitution engine.
//!
//! A patch is computed fully in memory before anything is written, so a
//! missing marker never leaves a half-rewritten file behind. The write goes
//! through the existing file, keeping its mode and any symlink in place.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::core::substitute::apply_to_content;
use crate::core::types::{ReplaceMode, Substitution};
use crate::error::HistoryError;

/// A computed, not yet written, rewrite of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPatch {
    path: PathBuf,
    before: String,
    after: String,
}

impl PreparedPatch {
    pub fn before(&self) -> &str {
        &self.before
    }

    pub fn after(&self) -> &str {
        &self.after
    }

    /// Replace the file content with the rewritten text.
    pub fn write(&self) -> Result<(), HistoryError> {
        write_text(&self.path, &self.after)
    }
}

/// Read `path` and compute the result of `substitutions` without writing.
#[instrument(skip_all, fields(path = %path.display(), count = substitutions.len(), ?mode))]
pub fn prepare_patch(
    path: &Path,
    substitutions: &[Substitution],
    mode: ReplaceMode,
) -> Result<PreparedPatch, HistoryError> {
    let before = read_text(path)?;
    let after = apply_to_content(path, &before, substitutions, mode)?;
    debug!(
        before_bytes = before.len(),
        after_bytes = after.len(),
        "patch prepared"
    );
    Ok(PreparedPatch {
        path: path.to_path_buf(),
        before,
        after,
    })
}

/// Apply `substitutions` to the file at `path`.
///
/// Fails with [`HistoryError::MissingMarker`] before anything is written when
/// any marker is absent.
pub fn apply_substitutions(
    path: &Path,
    substitutions: &[Substitution],
    mode: ReplaceMode,
) -> Result<(), HistoryError> {
    prepare_patch(path, substitutions, mode)?.write()
}

pub fn read_text(path: &Path) -> Result<String, HistoryError> {
    fs::read_to_string(path).map_err(|source| HistoryError::io("read", path, source))
}

/// Overwrite a file's contents in place.
pub fn write_text(path: &Path, contents: &str) -> Result<(), HistoryError> {
    fs::write(path, contents).map_err(|source| HistoryError::io("write", path, source))
}
