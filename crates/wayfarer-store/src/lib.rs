//! Local snapshot persistence for Wayfarer Studio.
//!
//! One [`DocumentStore`] owns the in-memory [`Itinerary`] for the session.
//! Every accepted edit replaces the document and rewrites the full snapshot
//! through an injected [`SnapshotStorage`]: a single JSON blob, overwritten
//! wholesale, with no versioning or migration. A snapshot that no longer
//! deserializes is discarded in favor of the built-in seed document.
//!
//! [`Itinerary`]: wayfarer_model::Itinerary

mod error;
mod storage;
mod store;

pub use error::{Result, StoreError};
pub use storage::{FileStorage, MemoryStorage, SnapshotStorage};
pub use store::DocumentStore;
