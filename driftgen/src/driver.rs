//! History driver: executes a plan entry by entry, one commit per entry.
//!
//! Every entry is applied, verified and committed before the next one starts.
//! The first failure stops the run; commits already made stay in history and
//! no commit is made for the failing entry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::core::partition::verify_partition;
use crate::core::plan_rules::validate_plan;
use crate::core::substitute::apply_to_content;
use crate::core::symbols::SymbolTable;
use crate::core::types::{Category, CommitId, Plan, PlanEntry};
use crate::error::HistoryError;
use crate::io::git::VersionControl;
use crate::io::patch::{prepare_patch, read_text};

/// One commit produced by [`run_plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCommit {
    /// 1-based plan index.
    pub index: usize,
    pub category: Category,
    pub file: PathBuf,
    pub message: String,
    pub commit: CommitId,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub plan: String,
    pub commits: Vec<GeneratedCommit>,
}

impl RunOutcome {
    pub fn count(&self, category: Category) -> usize {
        self.commits
            .iter()
            .filter(|commit| commit.category == category)
            .count()
    }

    /// `generated N commits (C code + D documentation)`
    pub fn summary(&self) -> String {
        summary_line(
            "generated",
            self.commits.len(),
            self.count(Category::Code),
            self.count(Category::Documentation),
        )
    }
}

/// Execute `plan` against the repository at `root`.
///
/// The plan is validated before any file is touched. For each entry, in order:
/// symbol bindings are replayed, the patch is computed and checked against the
/// entry's category, the file is rewritten, and the change is staged and
/// committed with the entry's message.
#[instrument(skip_all, fields(plan = %plan.name, root = %root.display()))]
pub fn run_plan<V: VersionControl>(
    root: &Path,
    plan: &Plan,
    vcs: &V,
) -> Result<RunOutcome, HistoryError> {
    validate_plan(plan)?;
    info!(entries = plan.entries.len(), "running plan");

    let mut symbols = plan.symbols.clone();
    let mut commits = Vec::with_capacity(plan.entries.len());
    for (offset, entry) in plan.entries.iter().enumerate() {
        let index = offset + 1;
        let commit = execute_entry(root, entry, &mut symbols, vcs).map_err(|source| {
            warn!(index, message = %entry.message, "step failed");
            HistoryError::at_step(index, entry, source)
        })?;
        debug!(index, commit = %commit, message = %entry.message, "step committed");
        commits.push(GeneratedCommit {
            index,
            category: entry.category,
            file: entry.step.file.clone(),
            message: entry.message.clone(),
            commit,
        });
    }

    let outcome = RunOutcome {
        plan: plan.name.clone(),
        commits,
    };
    info!(
        code = outcome.count(Category::Code),
        documentation = outcome.count(Category::Documentation),
        "plan complete"
    );
    Ok(outcome)
}

fn execute_entry<V: VersionControl>(
    root: &Path,
    entry: &PlanEntry,
    symbols: &mut SymbolTable,
    vcs: &V,
) -> Result<CommitId, HistoryError> {
    symbols.bind_all(&entry.bindings)?;
    let step = &entry.step;
    let patch = prepare_patch(&root.join(&step.file), &step.substitutions, step.mode)?;
    verify_partition(&step.file, entry.category, patch.before(), patch.after())?;
    patch.write()?;
    vcs.stage_all()
        .and_then(|()| vcs.commit(&entry.message))
        .map_err(|source| HistoryError::Commit {
            message: entry.message.clone(),
            source,
        })
}

/// Result of [`simulate_plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub plan: String,
    pub code: usize,
    pub documentation: usize,
    /// Final contents of every file the plan touches, keyed by relative path.
    pub files: BTreeMap<PathBuf, String>,
}

impl SimulationReport {
    pub fn summary(&self) -> String {
        summary_line(
            "plan ok:",
            self.code + self.documentation,
            self.code,
            self.documentation,
        )
    }
}

/// Dry run: apply every entry to in-memory copies of the files under `root`.
///
/// Performs the same checks as [`run_plan`] but never writes a file or commits.
#[instrument(skip_all, fields(plan = %plan.name, root = %root.display()))]
pub fn simulate_plan(root: &Path, plan: &Plan) -> Result<SimulationReport, HistoryError> {
    validate_plan(plan)?;

    let mut symbols = plan.symbols.clone();
    let mut files: BTreeMap<PathBuf, String> = BTreeMap::new();
    for (offset, entry) in plan.entries.iter().enumerate() {
        let index = offset + 1;
        simulate_entry(root, entry, &mut symbols, &mut files)
            .map_err(|source| HistoryError::at_step(index, entry, source))?;
    }

    debug!(files = files.len(), "simulation complete");
    Ok(SimulationReport {
        plan: plan.name.clone(),
        code: plan.count(Category::Code),
        documentation: plan.count(Category::Documentation),
        files,
    })
}

fn simulate_entry(
    root: &Path,
    entry: &PlanEntry,
    symbols: &mut SymbolTable,
    files: &mut BTreeMap<PathBuf, String>,
) -> Result<(), HistoryError> {
    symbols.bind_all(&entry.bindings)?;
    let step = &entry.step;
    let before = match files.get(&step.file) {
        Some(contents) => contents.clone(),
        None => read_text(&root.join(&step.file))?,
    };
    let after = apply_to_content(&step.file, &before, &step.substitutions, step.mode)?;
    verify_partition(&step.file, entry.category, &before, &after)?;
    files.insert(step.file.clone(), after);
    Ok(())
}

fn summary_line(lead: &str, total: usize, code: usize, documentation: usize) -> String {
    format!("{lead} {total} commits ({code} code + {documentation} documentation)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::core::types::{ExpectedCounts, ReplaceMode, Substitution};
    use crate::error::ErrorKind;
    use crate::test_support::FakeVcs;

    const SOURCE: &str = "\
/** Adds two integers. */
public int add(int a, int b) { return a + b; }
";

    fn entry(message: &str, category: Category, pairs: &[(&str, &str)]) -> PlanEntry {
        PlanEntry::new(
            message,
            category,
            "Calculator.java",
            pairs
                .iter()
                .map(|(search, replace)| Substitution::new(*search, *replace))
                .collect(),
            ReplaceMode::First,
        )
    }

    fn plan(entries: Vec<PlanEntry>) -> Plan {
        let expected = ExpectedCounts {
            code: entries.iter().filter(|e| e.category == Category::Code).count(),
            documentation: entries
                .iter()
                .filter(|e| e.category == Category::Documentation)
                .count(),
        };
        Plan::new("test", expected, entries)
    }

    fn workspace() -> tempfile::TempDir {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("Calculator.java"), SOURCE).expect("write");
        temp
    }

    fn read(temp: &tempfile::TempDir) -> String {
        fs::read_to_string(temp.path().join("Calculator.java")).expect("read")
    }

    #[test]
    fn commits_each_entry_in_order() {
        let temp = workspace();
        let vcs = FakeVcs::default();
        let plan = plan(vec![
            entry(
                "REFACTOR: rename add to addNumbers",
                Category::Code,
                &[("int add(", "int addNumbers(")],
            ),
            entry(
                "JAVADOC: drift addNumbers",
                Category::Documentation,
                &[("Adds two integers.", "Adds three integers.")],
            ),
        ]);

        let outcome = run_plan(temp.path(), &plan, &vcs).expect("run");

        assert_eq!(
            vcs.messages(),
            vec!["REFACTOR: rename add to addNumbers", "JAVADOC: drift addNumbers"]
        );
        assert_eq!(vcs.stage_count(), 2);
        assert_eq!(outcome.commits[1].index, 2);
        assert_eq!(outcome.summary(), "generated 2 commits (1 code + 1 documentation)");
        assert_eq!(
            read(&temp),
            "/** Adds three integers. */\npublic int addNumbers(int a, int b) { return a + b; }\n"
        );
    }

    #[test]
    fn stops_at_first_missing_marker_without_committing_it() {
        let temp = workspace();
        let vcs = FakeVcs::default();
        let plan = plan(vec![
            entry("first", Category::Code, &[("int add(", "int addNumbers(")]),
            entry("second", Category::Code, &[("int add(", "int plus(")]),
            entry("third", Category::Code, &[("return a + b;", "return b + a;")]),
        ]);

        let err = run_plan(temp.path(), &plan, &vcs).expect_err("missing marker");

        assert_eq!(err.kind(), ErrorKind::MissingMarker);
        assert_eq!(err.step_index(), Some(2));
        assert_eq!(vcs.messages(), vec!["first"]);
        assert!(read(&temp).contains("return a + b;"));
    }

    #[test]
    fn commit_failure_is_reported_for_its_step() {
        let temp = workspace();
        let vcs = FakeVcs::failing_at(1);
        let plan = plan(vec![entry(
            "REFACTOR: rename add to addNumbers",
            Category::Code,
            &[("int add(", "int addNumbers(")],
        )]);

        let err = run_plan(temp.path(), &plan, &vcs).expect_err("commit failure");

        assert_eq!(err.kind(), ErrorKind::Commit);
        assert_eq!(err.step_index(), Some(1));
        assert!(vcs.messages().is_empty());
    }

    #[test]
    fn plan_size_mismatch_touches_nothing() {
        let temp = workspace();
        let vcs = FakeVcs::default();
        let mut plan = plan(vec![entry(
            "first",
            Category::Code,
            &[("int add(", "int addNumbers(")],
        )]);
        plan.expected.documentation = 1;

        let err = run_plan(temp.path(), &plan, &vcs).expect_err("plan size");

        assert_eq!(err.kind(), ErrorKind::PlanSize);
        assert_eq!(err.step_index(), None);
        assert_eq!(vcs.stage_count(), 0);
        assert_eq!(read(&temp), SOURCE);
    }

    #[test]
    fn documentation_step_that_edits_code_is_rejected_before_writing() {
        let temp = workspace();
        let vcs = FakeVcs::default();
        let plan = plan(vec![entry(
            "JAVADOC: drift add",
            Category::Documentation,
            &[("return a + b;", "return a - b;")],
        )]);

        let err = run_plan(temp.path(), &plan, &vcs).expect_err("category violation");

        assert!(matches!(
            err.root(),
            HistoryError::CategoryViolation {
                category: Category::Documentation,
                ..
            }
        ));
        assert_eq!(read(&temp), SOURCE);
        assert!(vcs.messages().is_empty());
    }

    #[test]
    fn simulation_reports_final_contents_without_writing() {
        let temp = workspace();
        let plan = plan(vec![
            entry("rename", Category::Code, &[("int add(", "int addNumbers(")]),
            entry(
                "params",
                Category::Code,
                &[
                    ("addNumbers(int a, int b)", "addNumbers(int x, int y)"),
                    ("return a + b;", "return x + y;"),
                ],
            ),
        ]);

        let report = simulate_plan(temp.path(), &plan).expect("simulate");

        assert_eq!(report.summary(), "plan ok: 2 commits (2 code + 0 documentation)");
        let contents = &report.files[Path::new("Calculator.java")];
        assert!(contents.contains("public int addNumbers(int x, int y) { return x + y; }"));
        assert_eq!(read(&temp), SOURCE);
    }

    #[test]
    fn simulation_fails_where_a_run_would() {
        let temp = workspace();
        let plan = plan(vec![
            entry("rename", Category::Code, &[("int add(", "int addNumbers(")]),
            entry("again", Category::Code, &[("int add(", "int addNumbers(")]),
        ]);

        let err = simulate_plan(temp.path(), &plan).expect_err("stale marker");

        assert_eq!(err.kind(), ErrorKind::MissingMarker);
        assert_eq!(err.step_index(), Some(2));
    }
}
