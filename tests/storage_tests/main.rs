//! Storage Tests
//!
//! - `contract_tests`: behaviour shared by every strategy, run against both
//! - `unordered_tests`: append and swap-with-last delete ordering
//! - `sorted_tests`: insertion points and shift-delete ordering
//! - `strategy_tests`: `locate` results straight from the strategies

mod unordered_tests;

use recordstore::{Record, Storage};

// =============================================================================
// Shared Helpers
// =============================================================================

pub(crate) fn rec(key: &str) -> Record<String> {
    Record::new(key, format!("payload-{}", key))
}

pub(crate) fn seed<S: Storage<String>>(store: &mut S, keys: &[&str]) {
    for key in keys {
        store.save(rec(key)).unwrap();
    }
}

pub(crate) fn keys<S: Storage<String>>(store: &S) -> Vec<String> {
    store
        .get_all()
        .into_iter()
        .map(|r| r.key().to_string())
        .collect()
}
