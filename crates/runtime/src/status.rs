use std::{
    fmt,
    io::{self, Write},
    path::Path,
};

use log::warn;

/// Per-entry diagnostic emitted while walking a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic<'a> {
    /// A regular file was turned into a row.
    Read(&'a Path),
    /// An entry that is neither a file nor a directory was passed over.
    Skipping(&'a Path),
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Read(path) => write!(f, "Read {}", path.display()),
            Diagnostic::Skipping(path) => write!(f, "Skipping {}", path.display()),
        }
    }
}

/// Destination for diagnostics. These are always shown, independent of the
/// log level.
pub trait StatusWriter {
    fn write_status(&mut self, msg: &str) -> io::Result<()>;

    /// Write one diagnostic line. A broken status channel never aborts a
    /// scan; the failure is logged instead.
    fn report(&mut self, diagnostic: Diagnostic<'_>) {
        if let Err(e) = self.write_status(&diagnostic.to_string()) {
            warn!("[status] could not report `{diagnostic}`: {e}");
        }
    }
}

/// Writes diagnostics to stderr.
pub struct StderrWriter;

impl StatusWriter for StderrWriter {
    fn write_status(&mut self, msg: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{msg}")
    }
}

/// Keeps diagnostics in memory, in order.
#[derive(Default)]
pub struct BufferedWriter {
    buf: Vec<String>,
}

impl BufferedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.buf
    }
}

impl StatusWriter for BufferedWriter {
    fn write_status(&mut self, msg: &str) -> io::Result<()> {
        self.buf.push(msg.to_owned());
        Ok(())
    }
}

impl<T: StatusWriter + ?Sized> StatusWriter for &mut T {
    fn write_status(&mut self, msg: &str) -> io::Result<()> {
        (**self).write_status(msg)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
