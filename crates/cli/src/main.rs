use std::process::ExitCode;

use clap::Parser;

mod config;
mod scan;

use config::Cli;
use tally_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    scan::run(&cli)
}
