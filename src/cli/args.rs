//! CLI argument definitions using clap.
//!
//! Running `burndown` without a subcommand scans the source root, inspects
//! open reviews and writes the burndown reports. `burndown init` writes a
//! default `.burndownrc.json`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub report: ReportArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        self.report.verbose
    }
}

/// Overrides for the burndown run.
#[derive(Debug, Clone, Default, Args)]
pub struct ReportArgs {
    /// Directory of config option modules to scan (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory receiving data.csv, data.json and data.txt (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Maximum concurrent patch downloads (overrides config file)
    #[arg(short, long, value_parser = parse_jobs)]
    pub jobs: Option<usize>,

    /// Skip the review service and report local markers only
    #[arg(long)]
    pub no_reviews: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

fn parse_jobs(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(jobs) => Ok(jobs),
        Err(err) => Err(err.to_string()),
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .burndownrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_arguments_are_consistent() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let args = Arguments::try_parse_from([
            "burndown",
            "--source-root",
            "conf",
            "--jobs",
            "3",
            "--no-reviews",
            "-v",
        ])
        .unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.report.source_root, Some(PathBuf::from("conf")));
        assert_eq!(args.report.jobs, Some(3));
        assert!(args.report.no_reviews);
        assert!(args.verbose());
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let err = Arguments::try_parse_from(["burndown", "--jobs", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(Arguments::try_parse_from(["burndown", "-j", "many"]).is_err());
    }

    #[test]
    fn test_parse_init() {
        let args = Arguments::try_parse_from(["burndown", "init"]).unwrap();
        assert!(matches!(args.command, Some(Command::Init)));
    }
}
