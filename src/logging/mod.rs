// Logging module - tracing subscriber setup
//
// Log output goes to stderr so that verbose artifact previews on stdout stay
// clean enough to pipe. Optional JSON file logging uses a rolling appender.
//
// Precedence for the filter: RUST_LOG env var > config file > default "warn"

use crate::config::{LogRotation, LoggingConfig};
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the env filter for this crate at the configured level
fn filter(config: &LoggingConfig) -> EnvFilter {
    let default_filter = format!("themegen={}", config.level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

/// Split a log file path into the appender's directory and file name prefix.
/// A bare file name logs into the working directory.
fn appender_parts(path: &Path) -> Option<(&Path, &OsStr)> {
    let name = path.file_name()?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some((dir, name))
}

/// Install the global subscriber.
///
/// The returned guard flushes file logs when dropped; keep it alive for the
/// whole run.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let parts = config.file.as_deref().and_then(|path| {
        let parts = appender_parts(path);
        if parts.is_none() {
            eprintln!("Warning: Log file {:?} has no file name, logging to stderr only", path);
        }
        parts
    });

    let Some((dir, name)) = parts else {
        tracing_subscriber::registry()
            .with(filter(config))
            .with(stderr_layer)
            .init();
        return None;
    };

    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Warning: Could not create log directory {:?}: {}", dir, e);
        tracing_subscriber::registry()
            .with(filter(config))
            .with(stderr_layer)
            .init();
        return None;
    }

    let file_appender = match config.rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(dir, name),
        LogRotation::Daily => tracing_appender::rolling::daily(dir, name),
        LogRotation::Never => tracing_appender::rolling::never(dir, name),
    };

    // Writes happen on a background thread
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter(config))
        .with(stderr_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appender_parts_splits_directory_and_name() {
        let (dir, name) = appender_parts(Path::new("logs/run/themegen.log")).unwrap();
        assert_eq!(dir, Path::new("logs/run"));
        assert_eq!(name, "themegen.log");
    }

    #[test]
    fn test_bare_file_name_logs_to_working_directory() {
        let (dir, name) = appender_parts(Path::new("themegen.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "themegen.log");
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        assert!(appender_parts(Path::new("/")).is_none());
        assert!(appender_parts(Path::new("logs/..")).is_none());
    }
}
