//! JSON manifest of a generation run.
//!
//! The manifest labels every generated commit with its category, which is the
//! ground truth a downstream drift detector is scored against.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::types::{Category, CommitId};
use crate::driver::RunOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub plan: String,
    pub commits: Vec<ManifestCommit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestCommit {
    /// 1-based plan index.
    pub index: usize,
    pub category: Category,
    pub file: String,
    pub message: String,
    pub commit: CommitId,
}

impl From<&RunOutcome> for Manifest {
    fn from(outcome: &RunOutcome) -> Self {
        Self {
            plan: outcome.plan.clone(),
            commits: outcome
                .commits
                .iter()
                .map(|generated| ManifestCommit {
                    index: generated.index,
                    category: generated.category,
                    file: generated.file.to_string_lossy().replace('\\', "/"),
                    message: generated.message.clone(),
                    commit: generated.commit.clone(),
                })
                .collect(),
        }
    }
}

/// Write the manifest as pretty-printed JSON with trailing newline.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut buf = serde_json::to_string_pretty(manifest).context("serialize manifest")?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::GeneratedCommit;

    #[test]
    fn manifest_lists_commits_with_categories() {
        let outcome = RunOutcome {
            plan: "short".to_string(),
            commits: vec![GeneratedCommit {
                index: 1,
                category: Category::Documentation,
                file: "src/A.java".into(),
                message: "JAVADOC: drift add".to_string(),
                commit: CommitId("abc123".to_string()),
            }],
        };
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out").join("manifest.json");
        write_manifest(&path, &Manifest::from(&outcome)).expect("write");

        let contents = fs::read_to_string(&path).expect("read");
        let expected = "{\n  \"plan\": \"short\",\n  \"commits\": [\n    {\n      \"index\": 1,\n      \"category\": \"documentation\",\n      \"file\": \"src/A.java\",\n      \"message\": \"JAVADOC: drift add\",\n      \"commit\": \"abc123\"\n    }\n  ]\n}\n";
        assert_eq!(contents, expected);
    }
}
