// Logging
// tracing subscriber setup; output goes to a file since the terminal belongs to the UI

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter (e.g. `debug`, `tab_components=trace`)
pub const LOG_FILTER_ENV: &str = "TAB_STRIP_LOG";

/// Environment variable overriding the log file location
pub const LOG_FILE_ENV: &str = "TAB_STRIP_LOG_FILE";

const DEFAULT_LOG_FILE: &str = "tab-strip.log";

/// Log file location: `TAB_STRIP_LOG_FILE`, or tab-strip.log in the temp directory
pub fn log_file_path() -> PathBuf {
    std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging to the given file
pub fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
