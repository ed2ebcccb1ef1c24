//! Error types for loading static game data.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading one of the three static data files.
///
/// Once data is loaded the simulation itself cannot fail, so this is the
/// only error type the library exposes.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid game data: {0}")]
    Invalid(String),
}

impl DataError {
    /// Message shown to the player when the game cannot start.
    pub fn user_message(&self) -> String {
        format!(
            "{}\n\nFailed to load game data. Check that the data directory contains \
             scenarios.json, events.json and game-config.json.",
            self
        )
    }
}

pub type DataResult<T> = Result<T, DataError>;
