//! Error taxonomy for history generation.
//!
//! Every failure is fatal: the driver stops at the first error and reports it
//! wrapped in [`HistoryError::Step`] when it happened while executing an entry.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::{Category, PlanEntry};

/// Markers longer than this are shortened in error messages.
const MARKER_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum HistoryError {
    /// A substitution's search text is absent from the target file.
    #[error("marker not found in {}: '{}'", path.display(), preview(marker))]
    MissingMarker { path: PathBuf, marker: String },

    /// A substitution with an empty search or replacement text.
    #[error("substitution {position} for {} has an empty marker", path.display())]
    EmptyMarker { path: PathBuf, position: usize },

    /// A plan whose entry count differs from its declared count.
    #[error("plan '{plan}' declares {expected} {category} entries but holds {actual}")]
    PlanSize {
        plan: String,
        category: Category,
        expected: usize,
        actual: usize,
    },

    /// Staging or committing through the version-control collaborator failed.
    #[error("commit \"{message}\" failed")]
    Commit {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// An entry was written against a symbol name that is no longer current.
    #[error("symbol '{symbol}' is currently named '{actual}' but the step expects '{expected}'")]
    SymbolOrder {
        symbol: String,
        expected: String,
        actual: String,
    },

    #[error("unknown symbol '{symbol}'")]
    UnknownSymbol { symbol: String },

    #[error("symbol '{symbol}' declared twice")]
    DuplicateSymbol { symbol: String },

    #[error("'{name}' is not a valid identifier")]
    InvalidIdentifier { name: String },

    /// A step touched text outside of its declared category.
    #[error("{category} step in {} {detail}", path.display())]
    CategoryViolation {
        path: PathBuf,
        category: Category,
        detail: &'static str,
    },

    #[error("{action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failure raised while executing (or validating) plan entry `index` (1-based).
    #[error("step {index} [{}] \"{message}\" failed", file.display())]
    Step {
        index: usize,
        file: PathBuf,
        message: String,
        #[source]
        source: Box<HistoryError>,
    },
}

/// Coarse classification used to pick a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingMarker,
    PlanSize,
    Commit,
    Other,
}

impl HistoryError {
    /// Wrap `source` with the identity of the plan entry that raised it.
    pub fn at_step(index: usize, entry: &PlanEntry, source: HistoryError) -> Self {
        HistoryError::Step {
            index,
            file: entry.step.file.clone(),
            message: entry.message.clone(),
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through [`HistoryError::Step`] wrappers.
    pub fn root(&self) -> &HistoryError {
        match self {
            HistoryError::Step { source, .. } => source.root(),
            other => other,
        }
    }

    /// 1-based index of the failing entry, if the error is tied to one.
    pub fn step_index(&self) -> Option<usize> {
        match self {
            HistoryError::Step { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            HistoryError::MissingMarker { .. } => ErrorKind::MissingMarker,
            HistoryError::PlanSize { .. } => ErrorKind::PlanSize,
            HistoryError::Commit { .. } => ErrorKind::Commit,
            _ => ErrorKind::Other,
        }
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        HistoryError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

fn preview(marker: &str) -> String {
    if marker.chars().count() <= MARKER_PREVIEW_CHARS {
        return marker.to_string();
    }
    let mut short: String = marker.chars().take(MARKER_PREVIEW_CHARS).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_marker_message_truncates_long_markers() {
        let marker = "x".repeat(80);
        let err = HistoryError::MissingMarker {
            path: Path::new("A.java").to_path_buf(),
            marker,
        };
        let msg = err.to_string();
        assert!(msg.contains(&format!("'{}…'", "x".repeat(50))), "{msg}");
    }

    #[test]
    fn step_wrapper_reports_root_kind() {
        let err = HistoryError::Step {
            index: 7,
            file: "A.java".into(),
            message: "REFACTOR: rename".to_string(),
            source: Box::new(HistoryError::MissingMarker {
                path: "A.java".into(),
                marker: "int add(".to_string(),
            }),
        };
        assert_eq!(err.kind(), ErrorKind::MissingMarker);
        assert_eq!(err.step_index(), Some(7));
        assert!(matches!(err.root(), HistoryError::MissingMarker { .. }));
        assert_eq!(
            err.to_string(),
            "step 7 [A.java] \"REFACTOR: rename\" failed"
        );
    }
}
