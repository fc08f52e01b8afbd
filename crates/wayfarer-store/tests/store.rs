//! Tests for the document store and snapshot storage backends.

use std::cell::RefCell;
use std::rc::Rc;

use tempfile::tempdir;
use wayfarer_model::seed_itinerary;
use wayfarer_store::{DocumentStore, FileStorage, MemoryStorage, SnapshotStorage};

#[test]
fn file_storage_round_trips_the_document() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("itinerary.json");

    let mut store = DocumentStore::open(FileStorage::new(&path));
    let edited = store.document().toggle_checklist_item("c2");
    store.update(edited.clone());

    // A fresh store over the same file sees the saved document.
    let reloaded = DocumentStore::open(FileStorage::new(&path));
    assert_eq!(reloaded.document(), &edited);
}

#[test]
fn file_storage_creates_parent_directories() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("nested/data/itinerary.json");

    let mut storage = FileStorage::new(&path);
    storage.write("{}").expect("write snapshot");
    assert_eq!(storage.read().expect("read snapshot").as_deref(), Some("{}"));
}

#[test]
fn missing_snapshot_falls_back_to_seed() {
    let dir = tempdir().expect("temp dir");
    let store = DocumentStore::open(FileStorage::new(dir.path().join("absent.json")));
    assert_eq!(store.document(), &seed_itinerary());
}

#[test]
fn malformed_snapshot_falls_back_to_seed() {
    let store = DocumentStore::open(MemoryStorage::with_snapshot("not json at all"));
    assert_eq!(store.document(), &seed_itinerary());
}

#[test]
fn structurally_stale_snapshot_falls_back_to_seed() {
    // Valid JSON, wrong shape: discarded, never migrated.
    let store = DocumentStore::open(MemoryStorage::with_snapshot(r#"{"version": 3}"#));
    assert_eq!(store.document(), &seed_itinerary());
}

#[test]
fn update_overwrites_the_whole_snapshot() {
    let mut store = DocumentStore::open(MemoryStorage::new());

    let first = store.document().remove_traveler("6");
    store.update(first);
    let snapshot_after_first = store
        .storage()
        .snapshot()
        .expect("snapshot written")
        .to_string();

    let second = store.document().remove_expense("e1");
    store.update(second.clone());
    let snapshot = store.storage().snapshot().expect("snapshot written");

    assert_ne!(snapshot, snapshot_after_first);
    let parsed: wayfarer_model::Itinerary =
        serde_json::from_str(snapshot).expect("snapshot parses");
    assert_eq!(parsed, second);
}

#[test]
fn snapshot_keeps_historical_field_names() {
    let mut store = DocumentStore::open(MemoryStorage::new());
    store.update(seed_itinerary());

    let snapshot = store.storage().snapshot().expect("snapshot written");
    assert!(snapshot.contains("\"startDate\":\"2025-02-13\""));
    assert!(snapshot.contains("\"isCompleted\""));
    assert!(snapshot.contains("\"splitBetween\""));
    assert!(snapshot.contains("\"visaStatus\":\"Not Required\""));
}

#[test]
fn subscribers_observe_every_replacement() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = DocumentStore::open(MemoryStorage::new());

    let sink = Rc::clone(&seen);
    store.subscribe(move |doc| sink.borrow_mut().push(doc.travelers.len()));

    store.update(store.document().remove_traveler("6"));
    store.update(store.document().remove_traveler("5"));

    assert_eq!(*seen.borrow(), vec![5, 4]);
}
