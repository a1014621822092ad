//! Core error types for pomodoro-core.
//!
//! Only failures the program cannot recover from are represented here.
//! Missing or corrupt end-time and watcher-pid files degrade to "no value"
//! inside the store and never reach these types.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pomodoro-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persisted state could not be read or written safely
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The watcher process could not be launched
    #[error("Failed to spawn watcher: {0}")]
    WatcherSpawn(#[source] std::io::Error),
}

/// Fatal store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A state file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a state file
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The completed-count file holds something other than a count
    #[error("Corrupt completed count in {path}: {content:?}")]
    CorruptCount { path: PathBuf, content: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
