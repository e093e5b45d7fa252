//! Deterministic, pure logic shared by the generator.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod comments;
pub mod partition;
pub mod plan_rules;
pub mod substitute;
pub mod symbols;
pub mod types;
