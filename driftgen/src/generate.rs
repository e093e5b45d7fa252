//! Orchestration for the `seed`, `run` and `check` commands.
//!
//! These functions combine repository configuration, git policy and the
//! history driver. Errors from the driver are [`HistoryError`]s carried inside
//! `anyhow::Error`, so callers can still classify them.
//!
//! [`HistoryError`]: crate::error::HistoryError

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::driver::{RunOutcome, SimulationReport, run_plan, simulate_plan};
use crate::io::config::{CONFIG_FILE, load_config};
use crate::io::corpus::seed_workspace;
use crate::io::git::Git;
use crate::plan::PlanKind;

/// Create a repository at `dir` holding the committed aligned baseline.
pub fn seed(dir: &Path, force: bool) -> Result<Git> {
    let config = load_config(&dir.join(CONFIG_FILE))?;
    seed_workspace(dir, &config.identity, force)
}

/// Generate the commit history of plan `kind` in the repository at `root`.
///
/// The working tree must be clean so that every commit records exactly the
/// one file its entry rewrites.
pub fn generate_history(root: &Path, kind: PlanKind) -> Result<RunOutcome> {
    let git = Git::new(root);
    git.ensure_clean()
        .context("refusing to generate history on a dirty working tree")?;

    let plan = kind.build()?;
    info!(plan = %kind, "generating history");
    let outcome = run_plan(root, &plan, &git)?;
    Ok(outcome)
}

/// Validate plan `kind` and simulate it against the files under `root`.
pub fn check_plan(root: &Path, kind: PlanKind) -> Result<SimulationReport> {
    let plan = kind.build()?;
    let report = simulate_plan(root, &plan)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::error::{ErrorKind, HistoryError};
    use crate::plan::CALCULATOR;
    use crate::test_support::TestRepo;

    fn history_kind(err: &anyhow::Error) -> Option<ErrorKind> {
        err.downcast_ref::<HistoryError>().map(HistoryError::kind)
    }

    #[test]
    fn dirty_worktree_is_refused_before_any_step() {
        let repo = TestRepo::seeded().expect("repo");
        fs::write(repo.path().join("notes.txt"), "scratch\n").expect("write");

        let err = generate_history(repo.path(), PlanKind::Short).expect_err("dirty");

        assert!(format!("{err:#}").contains("working tree not clean"), "{err:#}");
        assert_eq!(repo.git().commit_count().expect("count"), 1);
    }

    #[test]
    fn untracked_config_counts_as_dirty() {
        let repo = TestRepo::seeded().expect("repo");
        repo.write(CONFIG_FILE, "require_clean_worktree = false\n")
            .expect("write config");
        repo.write("notes.txt", "scratch\n").expect("write notes");

        let err = generate_history(repo.path(), PlanKind::Short).expect_err("dirty");

        assert!(format!("{err:#}").contains(CONFIG_FILE), "{err:#}");
        assert_eq!(repo.git().commit_count().expect("count"), 1);
    }

    #[test]
    fn each_commit_records_only_its_target_file() {
        let repo = TestRepo::seeded().expect("repo");
        repo.write(CONFIG_FILE, "[identity]\nname = \"Corpus Bot\"\n")
            .expect("write config");
        assert!(repo.commit_all("chore: add generator config").expect("commit"));

        let outcome = generate_history(repo.path(), PlanKind::Short).expect("run");

        for generated in &outcome.commits {
            let paths = repo.git().commit_paths(&generated.commit.0).expect("paths");
            assert_eq!(
                paths,
                vec![generated.file.to_string_lossy().replace('\\', "/")],
                "step {}",
                generated.index
            );
        }
    }

    #[test]
    fn check_reports_missing_marker_after_history_exists() {
        let repo = TestRepo::seeded().expect("repo");
        check_plan(repo.path(), PlanKind::Full).expect("baseline passes");

        generate_history(repo.path(), PlanKind::Short).expect("run");
        let err = check_plan(repo.path(), PlanKind::Short).expect_err("stale markers");

        assert_eq!(history_kind(&err), Some(ErrorKind::MissingMarker));
    }

    #[test]
    fn seed_uses_identity_from_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("repo");
        fs::create_dir_all(&dir).expect("mkdir");
        fs::write(
            dir.join(CONFIG_FILE),
            "[identity]\nname = \"Doc Drift\"\nemail = \"drift@example.invalid\"\n",
        )
        .expect("write config");

        let git = seed(&dir, true).expect("seed");

        let author = git.log_authors().expect("authors");
        assert_eq!(author, vec!["Doc Drift <drift@example.invalid>"]);
        assert!(dir.join(CALCULATOR).exists());
    }

    #[test]
    fn seed_reports_invalid_config_once() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("repo");
        fs::create_dir_all(&dir).expect("mkdir");
        fs::write(dir.join(CONFIG_FILE), "[identity]\nname = \"\"\n").expect("write config");

        let err = seed(&dir, true).expect_err("blank name");

        let chain = format!("{err:#}");
        assert_eq!(chain.matches("invalid config").count(), 1, "{chain}");
        assert!(chain.contains("identity.name"), "{chain}");
        assert!(!dir.join(CALCULATOR).exists());
    }
}
