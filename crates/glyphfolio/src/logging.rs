//! File logging.
//!
//! The terminal is owned by the page, so log lines go to a file in the
//! platform data directory instead of stderr.

use std::fs;
use std::path::PathBuf;

use glyphfolio_config::Config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "GLYPHFOLIO_LOG";

/// Filter used when the environment does not set one.
const DEFAULT_LEVEL: &str = "warn";

const LOG_FILE: &str = "glyphfolio.log";

/// Directory the log file is written to.
pub fn log_dir() -> Option<PathBuf> {
    Config::project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
}

fn env_filter() -> EnvFilter {
    // Fall back to the default level if the variable is unset or invalid.
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the file subscriber.
///
/// Returns the writer guard, which must live until exit so buffered lines
/// are flushed. Returns `None` (logging disabled) when no log directory
/// is available.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if fs::create_dir_all(&dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    tracing::debug!(dir = %dir.display(), "logging initialized");
    Some(guard)
}
