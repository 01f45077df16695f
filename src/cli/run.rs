use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, burndown::burndown, init::init},
};

/// Dispatch to the command named by `args`; no subcommand runs the burndown.
pub fn run(Arguments { command, report }: Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    match command {
        Some(Command::Init) => Ok(CommandResult::Init(init(&cwd)?)),
        None => Ok(CommandResult::Burndown(burndown(&report, &cwd)?)),
    }
}
