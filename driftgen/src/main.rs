//! Documentation-drift history generator.
//!
//! Seeds a repository with an aligned Java baseline and replays a fixed plan
//! of code refactors and Javadoc edits on top of it, one commit per entry.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use driftgen::exit_codes;
use driftgen::generate::{check_plan, generate_history, seed};
use driftgen::io::manifest::{Manifest, write_manifest};
use driftgen::logging;
use driftgen::plan::PlanKind;

#[derive(Parser)]
#[command(
    name = "driftgen",
    version,
    about = "Generate Git histories with labelled documentation drift"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a repository holding the committed aligned baseline.
    Seed {
        /// Directory to create (must be empty unless --force).
        dir: PathBuf,
        /// Seed a non-empty directory, overwriting the baseline files.
        #[arg(short, long)]
        force: bool,
    },
    /// Apply a plan, one commit per entry.
    Run {
        /// Repository root.
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        #[arg(long, value_enum, default_value_t = PlanKind::Full)]
        plan: PlanKind,
        /// Write a JSON manifest of the generated commits.
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Validate a plan and simulate it against the repository without writing.
    Check {
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        #[arg(long, value_enum, default_value_t = PlanKind::Full)]
        plan: PlanKind,
    },
    /// List the entries of a plan.
    Plan {
        #[arg(long, value_enum, default_value_t = PlanKind::Full)]
        plan: PlanKind,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Seed { dir, force } => cmd_seed(&dir, force),
        Command::Run {
            repo,
            plan,
            manifest,
        } => cmd_run(&repo, plan, manifest.as_deref()),
        Command::Check { repo, plan } => cmd_check(&repo, plan),
        Command::Plan { plan } => cmd_plan(plan),
    }
}

fn cmd_seed(dir: &Path, force: bool) -> Result<()> {
    let git = seed(dir, force)?;
    println!("seeded {} at {}", dir.display(), git.head_sha()?);
    Ok(())
}

fn cmd_run(repo: &Path, plan: PlanKind, manifest: Option<&Path>) -> Result<()> {
    let outcome = generate_history(repo, plan)?;
    if let Some(path) = manifest {
        write_manifest(path, &Manifest::from(&outcome))
            .with_context(|| format!("write manifest {}", path.display()))?;
    }
    println!("{}", outcome.summary());
    Ok(())
}

fn cmd_check(repo: &Path, plan: PlanKind) -> Result<()> {
    let report = check_plan(repo, plan)?;
    println!("{}", report.summary());
    Ok(())
}

fn cmd_plan(kind: PlanKind) -> Result<()> {
    let plan = kind.build()?;
    for (offset, entry) in plan.entries.iter().enumerate() {
        println!(
            "{:>2}\t{}\t{}\t{}",
            offset + 1,
            entry.category,
            entry.step.file.display(),
            entry.message
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults_to_full_plan_in_current_directory() {
        let cli = Cli::parse_from(["driftgen", "run"]);
        match cli.command {
            Command::Run {
                repo,
                plan,
                manifest,
            } => {
                assert_eq!(repo, PathBuf::from("."));
                assert_eq!(plan, PlanKind::Full);
                assert!(manifest.is_none());
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn parse_run_short_with_manifest() {
        let cli = Cli::parse_from([
            "driftgen",
            "run",
            "--repo",
            "work",
            "--plan",
            "short",
            "--manifest",
            "out.json",
        ]);
        match cli.command {
            Command::Run {
                repo,
                plan,
                manifest,
            } => {
                assert_eq!(repo, PathBuf::from("work"));
                assert_eq!(plan, PlanKind::Short);
                assert_eq!(manifest, Some(PathBuf::from("out.json")));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn parse_seed_force() {
        let cli = Cli::parse_from(["driftgen", "seed", "repo", "--force"]);
        assert!(matches!(cli.command, Command::Seed { force: true, .. }));
    }

    #[test]
    fn unknown_plan_is_rejected() {
        assert!(Cli::try_parse_from(["driftgen", "check", "--plan", "medium"]).is_err());
    }
}
