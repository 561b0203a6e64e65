use std::path::PathBuf;

use clap::Parser;
use tally_runtime::{DEFAULT_OUTPUT_FILE, PROGRAM_NAME};

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Creates a CSV record of the files in a folder."
)]
pub struct Cli {
    /// Base folder to scan.
    pub folder: PathBuf,

    /// Output filename.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Append to the output file instead of replacing it (no header row).
    #[arg(short, long)]
    pub append: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Traversal root.
    pub root: PathBuf,
    /// CSV destination.
    pub output: PathBuf,
    pub append: bool,
}

impl ScanConfig {
    pub fn from_args(args: &Cli) -> Self {
        Self {
            root: args.folder.clone(),
            output: args.output.clone(),
            append: args.append,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
