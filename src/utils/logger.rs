//! Logging Infrastructure
//!
//! Structured logging setup. Level comes from `RUST_LOG` (default `info`);
//! an optional log directory switches output to a daily-rolling file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with stdout output.
pub fn init_logger() {
    init_logger_with_file(None);
}

/// Initialize the logger, writing to a daily-rolling file when `log_dir`
/// points at an existing directory.
pub fn init_logger_with_file(log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && Path::new(dir).exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "allmart-server");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}
