use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::{
    config::{DATE_FORMAT, SIZE_UNITS, TIME_FORMAT},
    error::ScanError,
    record::{DisplayTime, OutputRecord, RawStat, Timestamp},
};

/// Build the output row for `path` from its raw stat.
///
/// `Full_Path` is made absolute against the current directory and
/// normalized lexically; symlinks in the path are not resolved.
pub fn extract(path: &Path, stat: &RawStat) -> Result<OutputRecord, ScanError> {
    let absolute = std::path::absolute(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let full_path = normalize_lexically(&absolute);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(OutputRecord {
        file_name,
        full_path,
        modified: display(stat.modified),
        accessed: display(stat.accessed),
        created: display(stat.changed),
        size: human_size(stat.size),
        kind: stat.kind,
        stat: stat.clone(),
    })
}

/// Drop `.` and fold `..` into its parent without touching the filesystem.
/// `..` at the root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn display(t: Option<Timestamp>) -> Option<DisplayTime> {
    t.and_then(|t| format_timestamp(t.secs))
}

/// Render epoch seconds as a UTC date and time.
///
/// Host timezone never matters. Returns `None` when `secs` is outside the
/// range chrono can represent.
pub fn format_timestamp(secs: i64) -> Option<DisplayTime> {
    let dt: DateTime<Utc> = DateTime::from_timestamp(secs, 0)?;
    Some(DisplayTime {
        date: dt.format(DATE_FORMAT).to_string(),
        time: dt.format(TIME_FORMAT).to_string(),
    })
}

/// Human-readable size using base-1024 units, e.g. `1.5KB`.
pub fn human_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_owned();
    }

    // floor(log_1024(bytes)), without float rounding at the boundaries.
    let mut scale = 0;
    let mut rest = bytes;
    while rest >= 1024 && scale < SIZE_UNITS.len() - 1 {
        rest /= 1024;
        scale += 1;
    }

    let value = bytes as f64 / 1024f64.powi(scale as i32);
    format!("{}{}", two_decimals(value), SIZE_UNITS[scale])
}

/// Round to two places, keep at least one fractional digit: `1.0`, `1.5`, `1.23`.
fn two_decimals(value: f64) -> String {
    let mut s = format!("{value:.2}");
    if s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
