//! Tracing setup for the `gradinvite` binary.
//!
//! Events go to `gradinvite.log` in the XDG state dir. When that file cannot be
//! opened the binary calls [`init_logging_stderr`] instead.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,gradinvite=debug";
const LOG_FILE_NAME: &str = "gradinvite.log";

/// Where [`init_logging`] writes: `~/.local/state/gradinvite/gradinvite.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gradinvite")?;
    Ok(xdg_dirs.get_state_home().join("gradinvite").join(LOG_FILE_NAME))
}

/// Opens `path` for appending, creating it and its parent dirs.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log dir {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// `RUST_LOG` when set and valid, else [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to [`log_file_path`].
///
/// Errors if the file cannot be opened or a subscriber is already set.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    // `Mutex<File>` is a `MakeWriter`, so each event locks and appends.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

/// Stderr-only subscriber. A subscriber that is already installed is left in place.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
