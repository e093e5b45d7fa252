//! Deterministic generator of Git histories with labelled documentation drift.
//!
//! Starting from an aligned Java baseline (code and Javadoc agree), a fixed
//! plan of literal text substitutions is applied one entry at a time, each
//! entry becoming one commit. Code entries rename identifiers and leave
//! comments alone; documentation entries edit Javadoc and leave code alone.
//! The resulting history is ground truth for drift detectors.
//!
//! - **[`core`]**: Pure logic (substitution, symbol table, comment projection,
//!   plan validation). No I/O.
//! - **[`io`]**: Filesystem, git, configuration, baseline corpus, manifests.
//! - **[`plan`]**: The built-in `short` and `full` plans.
//! - **[`driver`]**: Executes a plan against a repository, or simulates it.
//!
//! [`generate`] wires these together for the CLI commands.

pub mod core;
pub mod driver;
pub mod error;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
pub mod plan;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
