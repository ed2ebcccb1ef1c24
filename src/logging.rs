//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so the interactive binary logs to a file.
//! The headless simulator logs to stderr.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

fn level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Sends log output to `path`, truncating any previous log.
pub fn init_file_logging(path: &Path, verbose: bool) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_max_level(level(verbose))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Sends log output to stderr. Repeated calls are ignored.
pub fn init_stderr_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level(verbose))
        .with_writer(io::stderr)
        .try_init();
}
