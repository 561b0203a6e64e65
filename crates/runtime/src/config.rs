pub const PROGRAM_NAME: &str = "tally";
pub const PROGRAM_LOG_LEVEL: &str = "TALLY_LOG_LEVEL";

/// Output file used when no `--output` is given.
pub const DEFAULT_OUTPUT_FILE: &str = "Files.csv";
