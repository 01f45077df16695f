//! Command-line layer: arguments, command dispatch, summary output.

pub mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command, ReportArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(args)?;
    report::print(&result);
    Ok(ExitStatus::Success)
}
