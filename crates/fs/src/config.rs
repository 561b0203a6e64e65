/// Unit suffixes for human-readable sizes, one per power of 1024.
pub const SIZE_UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// chrono format for the date half of a display timestamp.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono format for the time half of a display timestamp.
pub const TIME_FORMAT: &str = "%H:%M:%S";
