//! Snapshot storage backends.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// One slot of durable storage for the serialized itinerary.
///
/// The store reads the slot once at startup and overwrites it wholesale on
/// every accepted edit. Implementations do not interpret the snapshot text.
pub trait SnapshotStorage {
    /// Read the stored snapshot, `None` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored snapshot.
    fn write(&mut self, snapshot: &str) -> Result<()>;
}

/// File-backed snapshot storage: one JSON file at a fixed path.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io {
                operation: "read",
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// Write via temp file + rename so a crash mid-write cannot leave a
    /// truncated snapshot behind.
    fn write(&mut self, snapshot: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(snapshot.as_bytes())
            .map_err(|e| StoreError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Io {
            operation: "rename",
            path: self.path.clone(),
            source: e,
        })
    }
}

/// In-memory snapshot storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    snapshot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-existing snapshot, as if a prior session had saved.
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            snapshot: Some(snapshot.into()),
        }
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.snapshot.clone())
    }

    fn write(&mut self, snapshot: &str) -> Result<()> {
        self.snapshot = Some(snapshot.to_string());
        Ok(())
    }
}
