//! Diagnostic logging: stderr plus an append-only file
//!
//! stdout stays reserved for the single result line, so both layers write
//! elsewhere. Every event carries the subscriber's timestamp.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// When the log file cannot be opened, logging degrades to stderr only;
/// a broken log destination must not block receipt generation.
pub fn init(log_file: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(io::stderr);

    match open_log_file(log_file) {
        Ok(file) => {
            let file_layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
        }
        Err(err) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            warn!("cannot open log file {}: {err}", log_file.display());
        }
    }
}

/// Open the log file for appending, creating parent directories on demand
fn open_log_file(log_file: &Path) -> io::Result<File> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(log_file)
}
