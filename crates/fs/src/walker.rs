use std::{
    fs::{self, ReadDir},
    path::{Path, PathBuf},
};

use log::{debug, trace};
use tally_runtime::{Diagnostic, StatusWriter};

use crate::{
    error::ScanError,
    record::{FileKind, RawStat},
};

/// Counts of what a walk visited. `directories` excludes the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: usize,
    pub directories: usize,
    pub skipped: usize,
}

/// Depth-first walk of `root`, calling `on_file` for every regular file.
///
/// Children are visited in directory listing order and are stat'ed without
/// following symlinks. Directories are descended into; anything that is
/// neither a file nor a directory is reported as `Skipping <path>` on
/// `status`. After `on_file` succeeds, `Read <path>` is reported. A failing
/// `status` is logged, never fatal.
///
/// The first listing, stat or callback error aborts the walk.
///
/// Pending directories live on an explicit stack of open listings rather
/// than the call stack, so tree depth is bounded only by open descriptors.
pub fn walk<S, F>(root: &Path, status: &mut S, mut on_file: F) -> Result<ScanSummary, ScanError>
where
    S: StatusWriter + ?Sized,
    F: FnMut(&Path, &RawStat) -> Result<(), ScanError>,
{
    // The root may itself be a symlink to a directory.
    let root_meta = fs::metadata(root).map_err(|e| ScanError::stat(root, e))?;
    if !root_meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    debug!("[walk] starting at {}", root.display());

    let mut summary = ScanSummary::default();
    let mut stack: Vec<(PathBuf, ReadDir)> = vec![open_dir(root)?];

    loop {
        let next = match stack.last_mut() {
            Some((dir, entries)) => entries
                .next()
                .map(|res| res.map_err(|e| ScanError::read_dir(dir.as_path(), e))),
            None => break,
        };

        let entry = match next {
            Some(entry) => entry?,
            None => {
                if let Some((dir, _)) = stack.pop() {
                    trace!("[walk] finished {}", dir.display());
                }
                continue;
            }
        };

        let path = entry.path();
        let meta = fs::symlink_metadata(&path).map_err(|e| ScanError::stat(&path, e))?;
        let stat = RawStat::from_metadata(&meta);

        match stat.kind {
            FileKind::Directory => {
                summary.directories += 1;
                stack.push(open_dir(&path)?);
            }
            FileKind::File => {
                on_file(&path, &stat)?;
                summary.files += 1;
                status.report(Diagnostic::Read(&path));
            }
            FileKind::Unknown => {
                summary.skipped += 1;
                status.report(Diagnostic::Skipping(&path));
            }
        }
    }

    debug!(
        "[walk] done: {} files, {} directories, {} skipped",
        summary.files, summary.directories, summary.skipped
    );

    Ok(summary)
}

fn open_dir(dir: &Path) -> Result<(PathBuf, ReadDir), ScanError> {
    let rd = fs::read_dir(dir).map_err(|e| ScanError::read_dir(dir, e))?;
    Ok((dir.to_path_buf(), rd))
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
