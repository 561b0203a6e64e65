use std::path::PathBuf;

use serde::{Serialize, Serializer, ser::SerializeStruct};

/// CSV header, in column order. Every row has exactly these fields.
pub const COLUMNS: [&str; 35] = [
    // Derived
    "File_Name",
    "Full_Path",
    "Date_Modified",
    "Date_Accessed",
    "Date_Created",
    "Modified",
    "Size",
    "Type",
    // Attributes
    "st_mode",
    "st_ino",
    "st_dev",
    "st_nlink",
    "st_uid",
    "st_gid",
    "st_size",
    // Timestamps
    "st_atime",
    "st_mtime",
    "st_ctime",
    "st_atime_ns",
    "st_mtime_ns",
    "st_ctime_ns",
    // Platform-specific
    "st_blocks",
    "st_blksize",
    "st_rdev",
    "st_flags",
    "st_gen",
    "st_birthtime",
    "st_fstype",
    "st_ftype",
    "st_attrs",
    "st_obtype",
    "st_rsize",
    "st_creator",
    "st_type",
    "st_file_attributes",
];

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Coarse classification of a filesystem object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    /// Symlinks, sockets, FIFOs, devices.
    #[default]
    Unknown,
}

impl FileKind {
    const S_IFMT: u32 = 0o170_000;
    const S_IFREG: u32 = 0o100_000;
    const S_IFDIR: u32 = 0o040_000;

    /// Classify from the `S_IFMT` bits of a raw `st_mode`.
    pub fn from_mode(mode: u32) -> Self {
        match mode & Self::S_IFMT {
            Self::S_IFREG => FileKind::File,
            Self::S_IFDIR => FileKind::Directory,
            _ => FileKind::Unknown,
        }
    }

    /// Classify from a non-following `FileType`, for hosts without mode bits.
    pub fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_symlink() {
            FileKind::Unknown
        } else if ft.is_file() {
            FileKind::File
        } else if ft.is_dir() {
            FileKind::Directory
        } else {
            FileKind::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::File => "file",
            FileKind::Directory => "directory",
            FileKind::Unknown => "unknown",
        }
    }
}

/// A point in time relative to the Unix epoch, with nanosecond precision.
///
/// `nanos` is always in `0..1_000_000_000`; instants before the epoch have a
/// negative `secs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub secs: i64,
    pub nanos: u32,
}

impl Timestamp {
    pub fn from_nanos(total: i128) -> Self {
        Self {
            secs: total.div_euclid(NANOS_PER_SEC) as i64,
            nanos: total.rem_euclid(NANOS_PER_SEC) as u32,
        }
    }

    /// Build from a `(seconds, nanoseconds)` pair as reported by `stat(2)`.
    pub fn from_parts(secs: i64, nsec: i64) -> Self {
        Self::from_nanos(i128::from(secs) * NANOS_PER_SEC + i128::from(nsec))
    }

    pub fn as_nanos(&self) -> i128 {
        i128::from(self.secs) * NANOS_PER_SEC + i128::from(self.nanos)
    }
}

/// Fields that only legacy platforms (Solaris, RISC OS, classic Mac OS)
/// ever reported. No std target exposes them, so they stay `None`, but the
/// columns are kept so the schema does not depend on the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyAttrs {
    pub fstype: Option<String>,
    pub ftype: Option<u64>,
    pub attrs: Option<u64>,
    pub obtype: Option<u64>,
    pub rsize: Option<u64>,
    pub creator: Option<u64>,
    pub file_type: Option<u64>,
}

/// Raw metadata for one path, as the host platform reports it.
///
/// Anything the host cannot provide is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStat {
    pub kind: FileKind,
    pub mode: Option<u32>,
    pub ino: Option<u64>,
    pub dev: Option<u64>,
    pub nlink: Option<u64>,
    pub uid: Option<u32>,
    pub gid: Option<u32>,
    pub size: u64,
    pub accessed: Option<Timestamp>,
    pub modified: Option<Timestamp>,
    /// Inode change time on Unix, creation time on Windows.
    pub changed: Option<Timestamp>,
    pub blocks: Option<u64>,
    pub blksize: Option<u64>,
    pub rdev: Option<u64>,
    /// BSD user/system flags.
    pub flags: Option<u32>,
    /// BSD file generation number.
    pub generation: Option<u32>,
    pub birthtime: Option<Timestamp>,
    pub legacy: LegacyAttrs,
    /// Windows `FILE_ATTRIBUTE_*` bits.
    pub file_attributes: Option<u32>,
}

/// A UTC timestamp split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTime {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM:SS`
    pub time: String,
}

impl DisplayTime {
    /// `YYYY-MM-DD HH:MM:SS`
    pub fn combined(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

/// One output row, describing a regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub file_name: String,
    pub full_path: PathBuf,
    pub modified: Option<DisplayTime>,
    pub accessed: Option<DisplayTime>,
    /// Derived from the change family (`st_ctime`).
    pub created: Option<DisplayTime>,
    pub size: String,
    pub kind: FileKind,
    pub stat: RawStat,
}

fn date_of(t: &Option<DisplayTime>) -> Option<&str> {
    t.as_ref().map(|t| t.date.as_str())
}

fn secs_of(t: Option<Timestamp>) -> Option<i64> {
    t.map(|t| t.secs)
}

// Rendered as text: the csv serializer has no 128-bit integer support.
fn nanos_of(t: Option<Timestamp>) -> Option<String> {
    t.map(|t| t.as_nanos().to_string())
}

impl Serialize for OutputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let stat = &self.stat;
        let legacy = &stat.legacy;
        let mut row = serializer.serialize_struct("OutputRecord", COLUMNS.len())?;

        row.serialize_field("File_Name", &self.file_name)?;
        row.serialize_field("Full_Path", &self.full_path.to_string_lossy())?;
        row.serialize_field("Date_Modified", &date_of(&self.modified))?;
        row.serialize_field("Date_Accessed", &date_of(&self.accessed))?;
        row.serialize_field("Date_Created", &date_of(&self.created))?;
        row.serialize_field(
            "Modified",
            &self.modified.as_ref().map(DisplayTime::combined),
        )?;
        row.serialize_field("Size", &self.size)?;
        row.serialize_field("Type", self.kind.as_str())?;

        row.serialize_field("st_mode", &stat.mode)?;
        row.serialize_field("st_ino", &stat.ino)?;
        row.serialize_field("st_dev", &stat.dev)?;
        row.serialize_field("st_nlink", &stat.nlink)?;
        row.serialize_field("st_uid", &stat.uid)?;
        row.serialize_field("st_gid", &stat.gid)?;
        row.serialize_field("st_size", &stat.size)?;

        row.serialize_field("st_atime", &secs_of(stat.accessed))?;
        row.serialize_field("st_mtime", &secs_of(stat.modified))?;
        row.serialize_field("st_ctime", &secs_of(stat.changed))?;
        row.serialize_field("st_atime_ns", &nanos_of(stat.accessed))?;
        row.serialize_field("st_mtime_ns", &nanos_of(stat.modified))?;
        row.serialize_field("st_ctime_ns", &nanos_of(stat.changed))?;

        row.serialize_field("st_blocks", &stat.blocks)?;
        row.serialize_field("st_blksize", &stat.blksize)?;
        row.serialize_field("st_rdev", &stat.rdev)?;
        row.serialize_field("st_flags", &stat.flags)?;
        row.serialize_field("st_gen", &stat.generation)?;
        row.serialize_field("st_birthtime", &secs_of(stat.birthtime))?;
        row.serialize_field("st_fstype", &legacy.fstype)?;
        row.serialize_field("st_ftype", &legacy.ftype)?;
        row.serialize_field("st_attrs", &legacy.attrs)?;
        row.serialize_field("st_obtype", &legacy.obtype)?;
        row.serialize_field("st_rsize", &legacy.rsize)?;
        row.serialize_field("st_creator", &legacy.creator)?;
        row.serialize_field("st_type", &legacy.file_type)?;
        row.serialize_field("st_file_attributes", &stat.file_attributes)?;

        row.end()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
