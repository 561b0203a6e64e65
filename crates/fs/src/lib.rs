mod config;
mod error;
mod extract;
mod record;
mod scan;
mod sink;
mod stat;
mod walker;

pub use config::{DATE_FORMAT, SIZE_UNITS, TIME_FORMAT};
pub use error::ScanError;
pub use extract::{extract, format_timestamp, human_size};
pub use record::{COLUMNS, DisplayTime, FileKind, LegacyAttrs, OutputRecord, RawStat, Timestamp};
pub use scan::scan_into;
pub use sink::CsvSink;
pub use walker::{ScanSummary, walk};
