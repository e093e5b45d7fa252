//! Plan validation performed before any file is touched.

use crate::core::types::{Category, Plan};
use crate::error::HistoryError;

/// Check a plan's static shape:
/// - entry count per category equals the declared count
/// - every entry has at least one substitution with non-empty texts
/// - symbol bindings replay cleanly in plan order
///
/// Returns the first violation found.
pub fn validate_plan(plan: &Plan) -> Result<(), HistoryError> {
    for category in Category::ALL {
        let expected = plan.expected.get(category);
        let actual = plan.count(category);
        if actual != expected {
            return Err(HistoryError::PlanSize {
                plan: plan.name.clone(),
                category,
                expected,
                actual,
            });
        }
    }

    let mut symbols = plan.symbols.clone();
    for (offset, entry) in plan.entries.iter().enumerate() {
        let index = offset + 1;
        let step = &entry.step;
        let empty = if step.substitutions.is_empty() {
            Some(0)
        } else {
            step.substitutions
                .iter()
                .position(|sub| sub.search.is_empty() || sub.replace.is_empty())
                .map(|position| position + 1)
        };
        if let Some(position) = empty {
            let source = HistoryError::EmptyMarker {
                path: step.file.clone(),
                position,
            };
            return Err(HistoryError::at_step(index, entry, source));
        }
        symbols
            .bind_all(&entry.bindings)
            .map_err(|source| HistoryError::at_step(index, entry, source))?;
    }
    Ok(())
}
