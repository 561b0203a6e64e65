use std::{io::Write, path::Path};

use log::info;
use tally_runtime::StatusWriter;

use crate::{
    error::ScanError,
    extract::extract,
    sink::CsvSink,
    walker::{ScanSummary, walk},
};

/// Walk `root` and write one row per regular file into `sink`.
pub fn scan_into<W, S>(
    root: &Path,
    sink: &mut CsvSink<W>,
    status: &mut S,
) -> Result<ScanSummary, ScanError>
where
    W: Write,
    S: StatusWriter + ?Sized,
{
    info!("[scan] scanning {}", root.display());

    let summary = walk(root, status, |path, stat| {
        let record = extract(path, stat)?;
        sink.write(&record)
    })?;

    info!(
        "[scan] wrote {} rows ({} directories, {} skipped)",
        summary.files, summary.directories, summary.skipped
    );

    Ok(summary)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
