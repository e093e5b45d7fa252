//! Embedded baseline corpus and workspace seeding.
//!
//! The baseline is the aligned starting state every plan is written against:
//! code and Javadoc agree, and every marker of every plan is present exactly
//! where the plan expects it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, instrument};

use crate::io::config::IdentityConfig;
use crate::io::git::Git;
use crate::plan::{CALCULATOR, COLLECTION_UTILS, DATE_UTILS, TEXT_TOOLKIT};

/// Commit message of the baseline commit created by [`seed_workspace`].
pub const BASELINE_MESSAGE: &str = "chore: aligned documentation baseline";

/// One embedded baseline file.
#[derive(Debug, Clone, Copy)]
pub struct CorpusFile {
    /// Path relative to the repository root.
    pub path: &'static str,
    pub contents: &'static str,
}

pub const BASELINE: [CorpusFile; 4] = [
    CorpusFile {
        path: CALCULATOR,
        contents: include_str!("../../corpus/src/main/java/com/cdse/core/Calculator.java"),
    },
    CorpusFile {
        path: TEXT_TOOLKIT,
        contents: include_str!("../../corpus/src/main/java/com/cdse/text/TextToolkit.java"),
    },
    CorpusFile {
        path: DATE_UTILS,
        contents: include_str!("../../corpus/src/main/java/com/cdse/date/DateUtils.java"),
    },
    CorpusFile {
        path: COLLECTION_UTILS,
        contents: include_str!(
            "../../corpus/src/main/java/com/cdse/collection/CollectionUtils.java"
        ),
    },
];

/// Write every baseline file under `root`, creating parent directories.
pub fn write_baseline(root: &Path) -> Result<()> {
    for file in &BASELINE {
        let path = root.join(file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, file.contents).with_context(|| format!("write {}", path.display()))?;
        debug!(path = file.path, "baseline file written");
    }
    Ok(())
}

/// Create a git repository at `root` holding the committed baseline.
///
/// Refuses a non-empty directory unless `force` is set; with `force` the
/// baseline files are overwritten and committed on top of existing history.
#[instrument(skip_all, fields(root = %root.display(), force))]
pub fn seed_workspace(root: &Path, identity: &IdentityConfig, force: bool) -> Result<Git> {
    if !force && root.exists() && !is_empty_dir(root)? {
        bail!(
            "{} is not empty (use --force to seed anyway)",
            root.display()
        );
    }
    fs::create_dir_all(root).with_context(|| format!("create {}", root.display()))?;

    let git = Git::new(root);
    git.init()?;
    git.set_config("user.name", &identity.name)?;
    git.set_config("user.email", &identity.email)?;

    write_baseline(root)?;
    git.add_all()?;
    let committed = git.commit_staged(BASELINE_MESSAGE)?;
    git.ensure_clean()
        .context("workspace has uncommitted changes after seeding")?;

    info!(committed, "workspace seeded");
    Ok(git)
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(path).with_context(|| format!("read {}", path.display()))?;
    Ok(entries.next().is_none())
}
