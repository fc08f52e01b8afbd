//! Persistence error types.

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot storage error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("failed to {operation} snapshot file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory document could not be serialized.
    #[error("failed to serialize itinerary snapshot")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
