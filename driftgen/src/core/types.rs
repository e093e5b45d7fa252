//! Shared deterministic types for plans and the substitution engine.
//!
//! A generation run is described completely by these values; none of them
//! touch the filesystem or version control.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::symbols::SymbolTable;

/// One literal `(search, replace)` marker pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub search: String,
    pub replace: String,
}

impl Substitution {
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
        }
    }
}

/// How many occurrences of a marker a substitution rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    /// Only the first occurrence in the current content.
    First,
    /// Every occurrence in the current content.
    All,
}

/// What kind of change an entry is allowed to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Identifier or parameter renames in executable code; comments untouched.
    Code,
    /// Edits confined to comment text; executable code untouched.
    Documentation,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Code, Category::Documentation];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Code => f.write_str("code"),
            Category::Documentation => f.write_str("documentation"),
        }
    }
}

/// An all-or-nothing rewrite of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchStep {
    /// Target file, relative to the repository root.
    pub file: PathBuf,
    pub substitutions: Vec<Substitution>,
    pub mode: ReplaceMode,
}

/// How an entry relates to a tracked symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolBinding {
    /// The entry's markers were written against `name`.
    Refers { symbol: String, name: String },
    /// The entry renames the symbol from `from` to `to`.
    Renames {
        symbol: String,
        from: String,
        to: String,
    },
}

/// A commit message paired with the patch step it records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub message: String,
    pub category: Category,
    pub step: PatchStep,
    pub bindings: Vec<SymbolBinding>,
}

impl PlanEntry {
    /// Entry without symbol bindings.
    pub fn new(
        message: impl Into<String>,
        category: Category,
        file: impl Into<PathBuf>,
        substitutions: Vec<Substitution>,
        mode: ReplaceMode,
    ) -> Self {
        Self {
            message: message.into(),
            category,
            step: PatchStep {
                file: file.into(),
                substitutions,
                mode,
            },
            bindings: Vec::new(),
        }
    }

    pub fn with_mode(&mut self, mode: ReplaceMode) -> &mut Self {
        self.step.mode = mode;
        self
    }
}

/// Entry counts a plan declares per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedCounts {
    pub code: usize,
    pub documentation: usize,
}

impl ExpectedCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Code => self.code,
            Category::Documentation => self.documentation,
        }
    }

    pub fn total(&self) -> usize {
        self.code + self.documentation
    }
}

/// The full ordered list of entries for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub name: String,
    pub expected: ExpectedCounts,
    /// Symbol names as they are at the baseline, before entry 1.
    pub symbols: SymbolTable,
    pub entries: Vec<PlanEntry>,
}

impl Plan {
    pub fn new(name: impl Into<String>, expected: ExpectedCounts, entries: Vec<PlanEntry>) -> Self {
        Self {
            name: name.into(),
            expected,
            symbols: SymbolTable::default(),
            entries,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .count()
    }
}

/// Identifier of a commit produced by the version-control collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(pub String);

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
