//! The two generation plans and the files they target.
//!
//! - `short`: 17 code + 10 documentation entries, first-occurrence replacement.
//! - `full`: 50 code + 25 documentation entries, all-occurrence replacement with
//!   per-entry overrides.

pub mod builder;
mod full;
mod short;

use std::fmt;

use clap::ValueEnum;

use crate::core::types::{ExpectedCounts, Plan};
use crate::error::HistoryError;

pub const CALCULATOR: &str = "src/main/java/com/cdse/core/Calculator.java";
pub const TEXT_TOOLKIT: &str = "src/main/java/com/cdse/text/TextToolkit.java";
pub const DATE_UTILS: &str = "src/main/java/com/cdse/date/DateUtils.java";
pub const COLLECTION_UTILS: &str = "src/main/java/com/cdse/collection/CollectionUtils.java";

/// Selects one of the built-in plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanKind {
    Short,
    Full,
}

impl PlanKind {
    pub fn expected(self) -> ExpectedCounts {
        match self {
            PlanKind::Short => ExpectedCounts {
                code: 17,
                documentation: 10,
            },
            PlanKind::Full => ExpectedCounts {
                code: 50,
                documentation: 25,
            },
        }
    }

    /// Construct the plan. Fails only if the plan literal itself is inconsistent.
    pub fn build(self) -> Result<Plan, HistoryError> {
        match self {
            PlanKind::Short => short::plan(self.expected()),
            PlanKind::Full => full::plan(self.expected()),
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanKind::Short => f.write_str("short"),
            PlanKind::Full => f.write_str("full"),
        }
    }
}
