//! Storage error types.
//!
//! Used by store implementations and callers of storage APIs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving the collection.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed collection in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}
