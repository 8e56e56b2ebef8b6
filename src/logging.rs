//! Logging configuration using tracing with a non-blocking writer.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter level when none is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize tracing.
///
/// With `log_path`, events are appended to that file without ANSI colors.
/// Otherwise they go to stderr so stdout stays clean for report output.
///
/// Returns a guard that must be held for the duration of the program to ensure
/// logs are flushed. Dropping the guard flushes remaining logs.
pub fn init_logging(log_path: Option<&Path>, level: Option<&str>) -> WorkerGuard {
    let level = level.unwrap_or(DEFAULT_LEVEL);

    let filter = EnvFilter::try_new(format!("contrast_audit={level}"))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let (writer, guard, to_file) = match log_path {
        Some(path) => {
            let parent = path.parent().unwrap_or(Path::new("."));
            let filename = path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("contrast-audit.log"));
            let file_appender = tracing_appender::rolling::never(parent, filename);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            (writer, guard, true)
        }
        None => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            (writer, guard, false)
        }
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(!to_file)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();

    guard
}
