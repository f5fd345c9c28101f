//! File logging.
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `<data dir>/soulstream.log`. Filtering follows `RUST_LOG`, falling back to
//! [`DEFAULT_FILTER`].

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

pub const LOG_FILE_NAME: &str = "soulstream.log";
pub const DEFAULT_FILTER: &str = "soulstream=info";

pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE_NAME)
}

fn open_log(data_dir: &Path) -> Result<File> {
    fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(data_dir))?;
    Ok(file)
}

/// Install the global subscriber. Returns the log path on success.
///
/// Failures are reported on stderr and leave logging disabled.
pub fn init(data_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = data_dir?;
    let file = match open_log(dir) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("soulstream: logging disabled: {}", e);
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    installed.then(|| log_path(dir))
}
