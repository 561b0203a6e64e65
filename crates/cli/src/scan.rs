use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{error, info};
use tally_fs::{CsvSink, ScanSummary, scan_into};
use tally_runtime::{StatusWriter, StderrWriter};

use crate::config::{Cli, ScanConfig};

pub fn run(args: &Cli) -> ExitCode {
    let config = ScanConfig::from_args(args);
    match execute(&config, &mut StderrWriter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[scan] {e:#}");
            ExitCode::from(2)
        }
    }
}

pub fn execute<S: StatusWriter + ?Sized>(
    config: &ScanConfig,
    status: &mut S,
) -> Result<ScanSummary> {
    let mut sink = CsvSink::create(&config.output, config.append)
        .with_context(|| format!("Failed to open {}", config.output.display()))?;

    let summary = scan_into(&config.root, &mut sink, status)
        .with_context(|| format!("Failed to scan {}", config.root.display()))?;

    sink.finish()
        .with_context(|| format!("Failed to flush {}", config.output.display()))?;

    info!(
        "[scan] {} rows written to {}",
        summary.files,
        config.output.display()
    );

    Ok(summary)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
