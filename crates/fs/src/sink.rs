use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use csv::WriterBuilder;
use log::debug;

use crate::{
    error::ScanError,
    record::{COLUMNS, OutputRecord},
};

/// CSV writer for [`OutputRecord`] rows.
///
/// The sink is the single owner of the destination; rows are appended in
/// the order they are written.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CsvSink<File> {
    /// Open `path` for a scan.
    ///
    /// Without `append`, any existing file is removed and a header is
    /// written. With `append`, rows go to the end of the existing file
    /// (created if missing) and no header is written.
    pub fn create(path: &Path, append: bool) -> Result<Self, ScanError> {
        let open_err = |source: io::Error| ScanError::OutputOpen {
            path: path.to_path_buf(),
            source,
        };

        if !append {
            match fs::remove_file(path) {
                Ok(()) => debug!("[sink] removed previous output {}", path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(open_err(e)),
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(open_err)?;

        Self::from_writer(file, !append)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(writer: W, write_header: bool) -> Result<Self, ScanError> {
        // The header comes from COLUMNS, not from the first serialized row,
        // so that a scan with no files still gets one.
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        if write_header {
            writer.write_record(COLUMNS)?;
        }
        Ok(Self { writer, rows: 0 })
    }

    pub fn write(&mut self, record: &OutputRecord) -> Result<(), ScanError> {
        self.writer.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written through this sink (header excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W, ScanError> {
        self.writer
            .into_inner()
            .map_err(|e| ScanError::Output(csv::Error::from(e.into_error())))
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
