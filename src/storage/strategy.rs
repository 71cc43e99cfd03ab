//! Search strategy contract
//!
//! A strategy knows how to find a key in the live window and how to
//! insert or remove a record without leaving gaps. It never checks
//! capacity or duplicates; `ArrayStore` does that before calling in.

use crate::record::Record;

/// Outcome of locating a key in the live window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The key lives at this index
    Found(usize),

    /// The key is absent; a new record for it belongs at this index
    Vacant(usize),
}

impl Slot {
    /// Index of the live record, if found
    pub fn found(self) -> Option<usize> {
        match self {
            Slot::Found(index) => Some(index),
            Slot::Vacant(_) => None,
        }
    }
}

/// Slot search and structural mutation over the live window
pub trait SearchStrategy: Default {
    /// Find `key` among `records`
    fn locate<P>(&self, records: &[Record<P>], key: &str) -> Slot;

    /// Insert `record` at the index reported by a `Slot::Vacant`
    ///
    /// Caller guarantees `at <= records.len()` and spare capacity.
    fn place_at<P>(&self, records: &mut Vec<Record<P>>, record: Record<P>, at: usize);

    /// Remove the live record at `index`, closing the gap
    ///
    /// Caller guarantees `index < records.len()`.
    fn remove_at<P>(&self, records: &mut Vec<Record<P>>, index: usize) -> Record<P>;
}
