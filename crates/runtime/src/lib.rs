mod config;
pub mod logging;
pub mod status;

pub use config::{DEFAULT_OUTPUT_FILE, PROGRAM_LOG_LEVEL, PROGRAM_NAME};

pub use logging::init;
pub use status::{BufferedWriter, Diagnostic, StatusWriter, StderrWriter};
