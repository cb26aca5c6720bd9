//! Logging for tty-clock
//!
//! The terminal is owned by the clock face, so log output goes to a file.
//! Without a log directory no subscriber is installed and `tracing` calls
//! are no-ops.

mod file_writer;

pub use file_writer::{create_log_file_path, init_file_logging, LogFileInfo, LoggingGuard};
