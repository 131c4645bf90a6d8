use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for file reads and history log persistence.
#[derive(Debug, Error)]
pub enum WordFreqError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("results file '{}' is not a valid history log: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize history log: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, WordFreqError>;
