//! I/O helpers: files, git, configuration, manifests.

pub mod config;
pub mod corpus;
pub mod git;
pub mod manifest;
pub mod patch;
