//! Git adapter for history generation.
//!
//! The driver only needs two primitives, staging and committing, so they sit
//! behind [`VersionControl`]. [`Git`] implements them with `git` subprocess
//! calls; tests inject scripted doubles instead.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, instrument, warn};

use crate::core::types::CommitId;

/// Narrow capability the history driver needs from version control.
pub trait VersionControl {
    /// Stage every working-tree change.
    fn stage_all(&self) -> Result<()>;
    /// Commit staged changes with `message` and return the new commit id.
    fn commit(&self, message: &str) -> Result<CommitId>;
}

/// Parsed `git status --porcelain` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// 2-letter XY code, or "??" for untracked.
    pub code: String,
    /// Path for the changed file.
    pub path: String,
}

/// Wrapper for executing git commands in a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Initialise a repository in the working directory (safe to repeat).
    pub fn init(&self) -> Result<()> {
        self.run_checked(&["init", "--quiet"])?;
        Ok(())
    }

    /// Set a repository-local config value.
    pub fn set_config(&self, key: &str, value: &str) -> Result<()> {
        self.run_checked(&["config", key, value])?;
        Ok(())
    }

    /// Return the full SHA of HEAD.
    pub fn head_sha(&self) -> Result<String> {
        let out = self.run_capture(&["rev-parse", "HEAD"])?;
        Ok(out.trim().to_string())
    }

    /// Number of commits reachable from HEAD.
    pub fn commit_count(&self) -> Result<usize> {
        let out = self.run_capture(&["rev-list", "--count", "HEAD"])?;
        out.trim()
            .parse()
            .with_context(|| format!("parse commit count '{}'", out.trim()))
    }

    /// Commit subjects reachable from HEAD, oldest first.
    pub fn log_subjects(&self) -> Result<Vec<String>> {
        self.log_lines("--format=%s")
    }

    /// Commit authors as `name <email>`, oldest first.
    pub fn log_authors(&self) -> Result<Vec<String>> {
        self.log_lines("--format=%an <%ae>")
    }

    fn log_lines(&self, format: &str) -> Result<Vec<String>> {
        let out = self.run_capture(&["log", "--reverse", format])?;
        Ok(out.lines().map(str::to_string).collect())
    }

    /// Paths touched by commit `rev`, relative to the repository root.
    pub fn commit_paths(&self, rev: &str) -> Result<Vec<String>> {
        let out = self.run_capture(&["diff-tree", "--no-commit-id", "--name-only", "-r", rev])?;
        Ok(out.lines().map(str::to_string).collect())
    }

    /// Get status entries (including untracked) in porcelain format.
    pub fn status_porcelain(&self) -> Result<Vec<StatusEntry>> {
        let out = self.run_capture(&["status", "--porcelain=v1", "-uall"])?;
        let mut entries = Vec::new();
        for line in out.lines() {
            if line.trim().is_empty() {
                continue;
            }
            entries.push(parse_status_line(line)?);
        }
        Ok(entries)
    }

    /// Ensure the worktree is fully clean (including untracked files).
    #[instrument(skip_all)]
    pub fn ensure_clean(&self) -> Result<()> {
        let entries = self.status_porcelain()?;
        if entries.is_empty() {
            debug!("worktree is clean");
            return Ok(());
        }
        warn!(changed = entries.len(), "worktree not clean");
        let mut msg = String::from("working tree not clean:\n");
        for entry in entries {
            msg.push_str(&format!("{} {}\n", entry.code, entry.path));
        }
        Err(anyhow!(msg.trim_end().to_string()))
    }

    /// Stage all changes (respects .gitignore).
    pub fn add_all(&self) -> Result<()> {
        self.run_checked(&["add", "-A"])?;
        Ok(())
    }

    /// True if there is anything staged for commit.
    pub fn has_staged_changes(&self) -> Result<bool> {
        let out = self.run(&["diff", "--cached", "--name-only"])?;
        Ok(!String::from_utf8_lossy(&out.stdout).trim().is_empty())
    }

    /// Commit staged changes with a message.
    ///
    /// If there are no staged changes, this returns Ok(false) and does nothing.
    #[instrument(skip_all)]
    pub fn commit_staged(&self, message: &str) -> Result<bool> {
        if !self.has_staged_changes()? {
            debug!("no staged changes, skipping commit");
            return Ok(false);
        }
        debug!("committing staged changes");
        self.run_checked(&["commit", "--quiet", "-m", message])?;
        Ok(true)
    }

    fn run_capture(&self, args: &[&str]) -> Result<String> {
        let output = self.run_checked(args)?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn run_checked(&self, args: &[&str]) -> Result<Output> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("git {} failed: {}", args.join(" "), stderr.trim()));
        }
        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("spawn git {}", args.join(" ")))
    }
}

impl VersionControl for Git {
    fn stage_all(&self) -> Result<()> {
        self.add_all()
    }

    /// Every plan entry must record a change, so an empty index is an error
    /// here rather than the silent skip of [`Git::commit_staged`].
    fn commit(&self, message: &str) -> Result<CommitId> {
        if !self.commit_staged(message)? {
            bail!("nothing staged to commit");
        }
        Ok(CommitId(self.head_sha()?))
    }
}

fn parse_status_line(line: &str) -> Result<StatusEntry> {
    if let Some(path) = line.strip_prefix("?? ") {
        return Ok(StatusEntry {
            code: "??".to_string(),
            path: path.trim().to_string(),
        });
    }
    if line.len() < 4 {
        return Err(anyhow!("unexpected porcelain line: '{line}'"));
    }
    let code = line[..2].to_string();
    let mut path = line[3..].trim().to_string();
    if let Some((_, new)) = path.split_once("->") {
        path = new.trim().to_string();
    }
    Ok(StatusEntry { code, path })
}
