//! In-memory half of the substitution engine.

use std::path::Path;

use crate::core::types::{ReplaceMode, Substitution};
use crate::error::HistoryError;

/// Apply `substitutions` in order to `content` and return the rewritten text.
///
/// Each pair sees the output of the pairs before it. The first absent marker
/// aborts the whole call, so callers never observe a partially rewritten
/// string. Empty search or replacement texts are rejected. `path` only
/// labels errors.
pub fn apply_to_content(
    path: &Path,
    content: &str,
    substitutions: &[Substitution],
    mode: ReplaceMode,
) -> Result<String, HistoryError> {
    let mut text = content.to_string();
    for (position, sub) in substitutions.iter().enumerate() {
        if sub.search.is_empty() || sub.replace.is_empty() {
            return Err(HistoryError::EmptyMarker {
                path: path.to_path_buf(),
                position: position + 1,
            });
        }
        if !text.contains(&sub.search) {
            return Err(HistoryError::MissingMarker {
                path: path.to_path_buf(),
                marker: sub.search.clone(),
            });
        }
        text = match mode {
            ReplaceMode::First => text.replacen(&sub.search, &sub.replace, 1),
            ReplaceMode::All => text.replace(&sub.search, &sub.replace),
        };
    }
    Ok(text)
}
