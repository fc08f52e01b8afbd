//! The document store: the single mutation entry point for the itinerary.

use wayfarer_model::{Itinerary, seed_itinerary};

use crate::storage::SnapshotStorage;

type Subscriber = Box<dyn FnMut(&Itinerary)>;

/// Owner of the in-memory itinerary and its persisted snapshot.
///
/// Exactly one writer exists per session: the shell owns the store and all
/// edits flow through [`update`](DocumentStore::update). The store itself is
/// not thread-safe; a multi-threaded host must serialize access behind a
/// mutex to keep document replacements atomic.
pub struct DocumentStore<S: SnapshotStorage> {
    storage: S,
    document: Itinerary,
    subscribers: Vec<Subscriber>,
}

impl<S: SnapshotStorage> DocumentStore<S> {
    /// Open the store, loading the persisted snapshot if one exists.
    ///
    /// A missing, unreadable or structurally stale snapshot falls back to
    /// the built-in seed document. Construction never fails.
    pub fn open(storage: S) -> Self {
        let document = load_or_seed(&storage);
        Self {
            storage,
            document,
            subscribers: Vec::new(),
        }
    }

    /// The current in-memory document.
    pub fn document(&self) -> &Itinerary {
        &self.document
    }

    /// Replace the document and persist the new snapshot.
    ///
    /// Persistence is best-effort: a failed write is logged and the
    /// in-memory document stays authoritative. Subscribers observe every
    /// accepted replacement, persisted or not.
    pub fn update(&mut self, document: Itinerary) {
        self.document = document;
        if let Err(e) = self.save() {
            tracing::error!("failed to persist itinerary snapshot: {e}");
        }
        for subscriber in &mut self.subscribers {
            subscriber(&self.document);
        }
    }

    /// Register a callback observing every accepted document replacement.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Itinerary) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Access the underlying storage (used by tests to inspect snapshots).
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn save(&mut self) -> crate::Result<()> {
        let snapshot =
            serde_json::to_string(&self.document).map_err(crate::StoreError::Serialize)?;
        self.storage.write(&snapshot)?;
        tracing::debug!("persisted itinerary snapshot");
        Ok(())
    }
}

fn load_or_seed<S: SnapshotStorage>(storage: &S) -> Itinerary {
    match storage.read() {
        Ok(Some(snapshot)) => match serde_json::from_str(&snapshot) {
            Ok(document) => {
                tracing::info!("loaded itinerary snapshot");
                document
            }
            Err(e) => {
                tracing::warn!("stored snapshot no longer matches the document shape: {e}");
                seed_itinerary()
            }
        },
        Ok(None) => {
            tracing::info!("no stored snapshot, starting from the seed itinerary");
            seed_itinerary()
        }
        Err(e) => {
            tracing::warn!("failed to read stored snapshot: {e}");
            seed_itinerary()
        }
    }
}
