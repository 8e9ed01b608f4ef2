use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while saving or loading a frequency table.
///
/// None of these leave the in-memory store in a partial state on open
/// failure; a read error mid-file keeps whatever records were already merged.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not open {} for reading: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("could not read from {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not write model to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
