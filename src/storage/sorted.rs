//! Sorted strategy
//!
//! Keeps the live window strictly ordered by key.
//!
//! - Lookup: O(log n) binary search
//! - Insert: O(n) shift right from the insertion point
//! - Delete: O(n) shift left over the removed slot

use crate::record::Record;

use super::{SearchStrategy, Slot};

/// Binary-search strategy with shifting insert/delete
#[derive(Debug, Clone, Copy, Default)]
pub struct Sorted;

impl SearchStrategy for Sorted {
    fn locate<P>(&self, records: &[Record<P>], key: &str) -> Slot {
        match records.binary_search_by(|record| record.key().cmp(key)) {
            Ok(index) => Slot::Found(index),
            Err(insert_at) => Slot::Vacant(insert_at),
        }
    }

    fn place_at<P>(&self, records: &mut Vec<Record<P>>, record: Record<P>, at: usize) {
        debug_assert!(at <= records.len());
        debug_assert!(at == 0 || records[at - 1].key() < record.key());
        debug_assert!(at == records.len() || record.key() < records[at].key());

        // Shifts [at, len) one slot right, then fills `at`
        records.insert(at, record);
    }

    fn remove_at<P>(&self, records: &mut Vec<Record<P>>, index: usize) -> Record<P> {
        // Shifts (index, len) one slot left; relative order is untouched
        records.remove(index)
    }
}
