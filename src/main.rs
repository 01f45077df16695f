use std::process::ExitCode;

use clap::Parser;
use conf_burndown::{
    cli::{Arguments, ExitStatus},
    logging::init_tracing,
};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match conf_burndown::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
