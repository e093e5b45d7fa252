//! Code/documentation partition check for a single patch step.

use std::path::Path;

use crate::core::comments::project;
use crate::core::types::Category;
use crate::error::HistoryError;

/// Verify that rewriting `before` into `after` stays inside `category`.
///
/// - `Code`: the code projection changes, the comment projection does not.
/// - `Documentation`: the comment projection changes, the code projection does not.
pub fn verify_partition(
    path: &Path,
    category: Category,
    before: &str,
    after: &str,
) -> Result<(), HistoryError> {
    let before = project(before);
    let after = project(after);
    let code_changed = before.code != after.code;
    let comments_changed = before.comments != after.comments;

    let detail = match category {
        Category::Code if comments_changed => Some("changes comment text"),
        Category::Code if !code_changed => Some("leaves executable code unchanged"),
        Category::Documentation if code_changed => Some("changes executable code"),
        Category::Documentation if !comments_changed => Some("leaves comment text unchanged"),
        _ => None,
    };

    match detail {
        Some(detail) => Err(HistoryError::CategoryViolation {
            path: path.to_path_buf(),
            category,
            detail,
        }),
        None => Ok(()),
    }
}
