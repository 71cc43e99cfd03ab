//! Tests for the unordered array store
//!
//! Deleting a non-last record moves the last live record into its slot,
//! so enumeration order after a delete is not append order.

use recordstore::{ArrayStorage, ErrorKind, Storage};

use crate::{keys, rec, seed};

fn setup() -> ArrayStorage<String> {
    ArrayStorage::with_capacity(10)
}

// =============================================================================
// Insert Order Tests
// =============================================================================

#[test]
fn test_save_keeps_append_order() {
    let mut store = setup();

    seed(&mut store, &["uuid3", "uuid1", "uuid2"]);

    assert_eq!(keys(&store), vec!["uuid3", "uuid1", "uuid2"]);
}

// =============================================================================
// Swap Delete Tests
// =============================================================================

#[test]
fn test_delete_first_swaps_last_into_slot() {
    let mut store = setup();
    seed(&mut store, &["uuid1", "uuid2", "uuid3"]);

    store.delete("uuid1").unwrap();

    assert_eq!(store.get("uuid1").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(keys(&store), vec!["uuid3", "uuid2"]);
    assert_eq!(store.size(), 2);
}

#[test]
fn test_delete_middle_swaps_last_into_slot() {
    let mut store = setup();
    seed(&mut store, &["uuid1", "uuid2", "uuid3"]);

    store.delete("uuid2").unwrap();

    assert_eq!(store.get("uuid2").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(keys(&store), vec!["uuid1", "uuid3"]);
    assert_eq!(store.size(), 2);
}

#[test]
fn test_delete_last_keeps_prefix_order() {
    let mut store = setup();
    seed(&mut store, &["uuid1", "uuid2", "uuid3"]);

    store.delete("uuid3").unwrap();

    assert_eq!(store.get("uuid3").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(keys(&store), vec!["uuid1", "uuid2"]);
}

#[test]
fn test_delete_only_record_empties_store() {
    let mut store = setup();
    seed(&mut store, &["uuid1"]);

    store.delete("uuid1").unwrap();

    assert!(store.get_all().is_empty());
    assert_eq!(store.size(), 0);
}

#[test]
fn test_save_after_delete_appends_at_end() {
    let mut store = setup();
    seed(&mut store, &["uuid1", "uuid2", "uuid3"]);

    store.delete("uuid1").unwrap();
    store.save(rec("uuid0")).unwrap();

    assert_eq!(keys(&store), vec!["uuid3", "uuid2", "uuid0"]);
}

#[test]
fn test_update_keeps_position() {
    let mut store = setup();
    seed(&mut store, &["uuid2", "uuid1"]);

    store
        .update(recordstore::Record::new("uuid2", "fresh".to_string()))
        .unwrap();

    assert_eq!(keys(&store), vec!["uuid2", "uuid1"]);
    assert_eq!(store.as_slice()[0].payload(), "fresh");
}

// =============================================================================
// Borrowing Iteration Tests
// =============================================================================

#[test]
fn test_iter_matches_get_all() {
    let mut store = setup();
    seed(&mut store, &["b", "a", "c"]);

    let borrowed: Vec<&str> = store.iter().map(|r| r.key()).collect();
    let by_ref: Vec<&str> = (&store).into_iter().map(|r| r.key()).collect();

    assert_eq!(borrowed, keys(&store));
    assert_eq!(by_ref, borrowed);
}
