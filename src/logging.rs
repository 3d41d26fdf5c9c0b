//! Tracing setup.
//!
//! The TUI owns the terminal, so diagnostics go to a file instead of stderr.
//! Filtering follows `RUST_LOG` with an `info` default.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Default log location: `{data_dir}/cinescout/cinescout.log`.
pub fn default_log_path() -> PathBuf {
    let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("cinescout").join("cinescout.log")
}

/// Install the global tracing subscriber, writing to `path` (or the default).
pub fn init(path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory '{}'", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Arc::new(file))
        .init();

    Ok(())
}
