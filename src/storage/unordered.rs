//! Unordered strategy
//!
//! Linear search, O(1) append and O(1) swap-with-last delete.
//! Enumeration order is append order until the first delete of a
//! non-last record.

use crate::record::Record;

use super::{SearchStrategy, Slot};

/// Linear-scan strategy with swap delete
#[derive(Debug, Clone, Copy, Default)]
pub struct Unordered;

impl SearchStrategy for Unordered {
    fn locate<P>(&self, records: &[Record<P>], key: &str) -> Slot {
        match records.iter().position(|record| record.key() == key) {
            Some(index) => Slot::Found(index),
            None => Slot::Vacant(records.len()),
        }
    }

    fn place_at<P>(&self, records: &mut Vec<Record<P>>, record: Record<P>, at: usize) {
        // New records always go at the end of the live window
        debug_assert_eq!(at, records.len());
        records.push(record);
    }

    fn remove_at<P>(&self, records: &mut Vec<Record<P>>, index: usize) -> Record<P> {
        // Last live record moves into the vacated slot; the old last slot is released
        records.swap_remove(index)
    }
}
