//! Populating [`RawStat`] from `std::fs::Metadata`.
//!
//! Each optional attribute is filled by a `cfg`-selected helper; helpers for
//! other platforms compile to no-ops so the attribute stays `None`.

use std::{
    fs::Metadata,
    time::{SystemTime, UNIX_EPOCH},
};

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

#[cfg(target_os = "freebsd")]
use std::os::freebsd::fs::MetadataExt as BsdMetadataExt;
#[cfg(target_os = "ios")]
use std::os::ios::fs::MetadataExt as BsdMetadataExt;
#[cfg(target_os = "macos")]
use std::os::macos::fs::MetadataExt as BsdMetadataExt;

#[cfg(windows)]
use std::os::windows::fs::MetadataExt as WindowsMetadataExt;

use crate::record::{FileKind, RawStat, Timestamp};

impl From<SystemTime> for Timestamp {
    fn from(t: SystemTime) -> Self {
        match t.duration_since(UNIX_EPOCH) {
            Ok(d) => Timestamp::from_nanos(d.as_nanos() as i128),
            Err(e) => Timestamp::from_nanos(-(e.duration().as_nanos() as i128)),
        }
    }
}

impl RawStat {
    /// Project metadata onto the fixed attribute set.
    ///
    /// `meta` should come from a non-following stat (`symlink_metadata`)
    /// so that links classify as [`FileKind::Unknown`].
    pub fn from_metadata(meta: &Metadata) -> Self {
        let mut stat = RawStat {
            kind: FileKind::from_file_type(meta.file_type()),
            size: meta.len(),
            accessed: meta.accessed().ok().map(Timestamp::from),
            modified: meta.modified().ok().map(Timestamp::from),
            birthtime: meta.created().ok().map(Timestamp::from),
            ..RawStat::default()
        };

        fill_unix(&mut stat, meta);
        fill_bsd(&mut stat, meta);
        fill_windows(&mut stat, meta);

        stat
    }
}

#[cfg(unix)]
fn fill_unix(stat: &mut RawStat, meta: &Metadata) {
    let mode = meta.mode();
    stat.kind = FileKind::from_mode(mode);
    stat.mode = Some(mode);
    stat.ino = Some(meta.ino());
    stat.dev = Some(meta.dev());
    stat.nlink = Some(meta.nlink());
    stat.uid = Some(meta.uid());
    stat.gid = Some(meta.gid());
    stat.size = meta.size();
    stat.accessed = Some(Timestamp::from_parts(meta.atime(), meta.atime_nsec()));
    stat.modified = Some(Timestamp::from_parts(meta.mtime(), meta.mtime_nsec()));
    stat.changed = Some(Timestamp::from_parts(meta.ctime(), meta.ctime_nsec()));
    stat.blocks = Some(meta.blocks());
    stat.blksize = Some(meta.blksize());
    stat.rdev = Some(meta.rdev());
}

#[cfg(not(unix))]
fn fill_unix(_stat: &mut RawStat, _meta: &Metadata) {}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
fn fill_bsd(stat: &mut RawStat, meta: &Metadata) {
    stat.flags = Some(meta.st_flags());
    stat.generation = Some(meta.st_gen());
    stat.birthtime = Some(Timestamp::from_parts(
        meta.st_birthtime(),
        meta.st_birthtime_nsec(),
    ));
}

#[cfg(not(any(target_os = "macos", target_os = "ios", target_os = "freebsd")))]
fn fill_bsd(_stat: &mut RawStat, _meta: &Metadata) {}

/// 100ns intervals between 1601-01-01 and 1970-01-01.
#[cfg(windows)]
const FILETIME_UNIX_OFFSET: i128 = 116_444_736_000_000_000;

#[cfg(windows)]
fn from_filetime(ticks: u64) -> Timestamp {
    Timestamp::from_nanos((i128::from(ticks) - FILETIME_UNIX_OFFSET) * 100)
}

#[cfg(windows)]
fn fill_windows(stat: &mut RawStat, meta: &Metadata) {
    stat.file_attributes = Some(meta.file_attributes());
    stat.accessed = Some(from_filetime(meta.last_access_time()));
    stat.modified = Some(from_filetime(meta.last_write_time()));
    // st_ctime is the creation time on Windows.
    stat.changed = Some(from_filetime(meta.creation_time()));
}

#[cfg(not(windows))]
fn fill_windows(_stat: &mut RawStat, _meta: &Metadata) {}

#[cfg(test)]
#[path = "stat_tests.rs"]
mod tests;
