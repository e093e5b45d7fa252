//! Test helpers: temporary git repositories and a scripted version-control double.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tempfile::TempDir;

use crate::core::types::CommitId;
use crate::io::config::IdentityConfig;
use crate::io::corpus::{BASELINE_MESSAGE, write_baseline};
use crate::io::git::{Git, VersionControl};

/// A git repository in a temporary directory, removed on drop.
pub struct TestRepo {
    dir: TempDir,
    git: Git,
}

impl TestRepo {
    /// Empty repository with a local identity and signing disabled.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let git = Git::new(dir.path());
        git.init()?;
        configure(&git)?;
        Ok(Self { dir, git })
    }

    /// Repository holding the committed aligned baseline.
    pub fn seeded() -> Result<Self> {
        let repo = Self::new()?;
        write_baseline(repo.path())?;
        if !repo.commit_all(BASELINE_MESSAGE)? {
            bail!("baseline commit recorded nothing");
        }
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn read(&self, rel: &str) -> Result<String> {
        let path = self.path().join(rel);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> Result<()> {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }

    /// Stage everything and commit; returns false if nothing changed.
    pub fn commit_all(&self, message: &str) -> Result<bool> {
        self.git.add_all()?;
        self.git.commit_staged(message)
    }
}

fn configure(git: &Git) -> Result<()> {
    let identity = IdentityConfig::default();
    git.set_config("user.name", &identity.name)?;
    git.set_config("user.email", &identity.email)?;
    git.set_config("commit.gpgsign", "false")?;
    Ok(())
}

/// In-memory [`VersionControl`] that records commit messages.
///
/// `failing_at(n)` makes the n-th commit call (1-based) fail.
#[derive(Debug, Default)]
pub struct FakeVcs {
    messages: RefCell<Vec<String>>,
    stages: Cell<usize>,
    calls: Cell<usize>,
    fail_at: Option<usize>,
}

impl FakeVcs {
    pub fn failing_at(call: usize) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::default()
        }
    }

    /// Messages of successful commits, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn stage_count(&self) -> usize {
        self.stages.get()
    }
}

impl VersionControl for FakeVcs {
    fn stage_all(&self) -> Result<()> {
        self.stages.set(self.stages.get() + 1);
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<CommitId> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if self.fail_at == Some(call) {
            bail!("scripted commit failure at call {call}");
        }
        self.messages.borrow_mut().push(message.to_string());
        Ok(CommitId(format!("fake{call:04}")))
    }
}
