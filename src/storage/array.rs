//! Array Store
//!
//! Generic fixed-capacity store that owns all guard logic and delegates
//! slot search and structural mutation to a `SearchStrategy`.
//!
//! ## Guard Order
//! - save:   key present → not full → key absent → `place_at`
//! - get:    key present → key found
//! - update: key present → key found → replace in place
//! - delete: key present → key found → `remove_at`
//!
//! No check mutates state, so every rejected call leaves the store as it was.

use std::fmt;
use std::slice;

use crate::config::DEFAULT_CAPACITY;
use crate::error::{Result, StoreError};
use crate::record::Record;

use super::{SearchStrategy, Slot, Sorted, Storage, Unordered};

/// Slots reserved up front; the buffer grows on demand up to `capacity`
const INITIAL_SLOTS: usize = 1024;

/// Unordered array store: linear search, swap delete
pub type ArrayStorage<P> = ArrayStore<Unordered, P>;

/// Sorted array store: binary search, shifting insert/delete
pub type SortedArrayStorage<P> = ArrayStore<Sorted, P>;

/// Fixed-capacity record store parameterised by search strategy
pub struct ArrayStore<S, P> {
    /// Live window; `records.len()` is the live count
    records: Vec<Record<P>>,

    /// Maximum live count
    capacity: usize,

    strategy: S,
}

impl<S: SearchStrategy, P> ArrayStore<S, P> {
    /// Create an empty store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store holding at most `capacity` records
    ///
    /// `capacity` is a bound enforced on save, not an allocation size.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity.min(INITIAL_SLOTS)),
            capacity,
            strategy: S::default(),
        }
    }

    /// Iterate over the live records without copying
    pub fn iter(&self) -> slice::Iter<'_, Record<P>> {
        self.records.iter()
    }

    /// The live window as a slice
    pub fn as_slice(&self) -> &[Record<P>] {
        &self.records
    }

    fn locate(&self, key: &str) -> Slot {
        let slot = self.strategy.locate(&self.records, key);
        tracing::trace!(key, ?slot, "located");
        slot
    }

    /// Where a new record for `key` belongs, or why it cannot be saved
    fn insertion_point(&self, key: &str) -> Result<usize> {
        require_key(key)?;

        if self.records.len() >= self.capacity {
            return Err(StoreError::Overflow {
                capacity: self.capacity,
            });
        }

        match self.locate(key) {
            Slot::Found(_) => Err(StoreError::AlreadyExists(key.to_string())),
            Slot::Vacant(at) => Ok(at),
        }
    }

    /// Index of the live record for `key`, or `NotFound`
    fn existing_index(&self, key: &str) -> Result<usize> {
        self.locate(key)
            .found()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }
}

impl<S: SearchStrategy, P> Default for ArrayStore<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchStrategy, P> Storage<P> for ArrayStore<S, P> {
    fn save(&mut self, record: Record<P>) -> Result<()> {
        let at = rejected("save", record.key(), self.insertion_point(record.key()))?;
        tracing::debug!(key = record.key(), at, size = self.records.len() + 1, "saved");
        self.strategy.place_at(&mut self.records, record, at);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<&Record<P>> {
        let index = rejected(
            "get",
            key,
            require_key(key).and_then(|_| self.existing_index(key)),
        )?;
        Ok(&self.records[index])
    }

    fn update(&mut self, record: Record<P>) -> Result<()> {
        let index = rejected(
            "update",
            record.key(),
            require_key(record.key()).and_then(|_| self.existing_index(record.key())),
        )?;

        tracing::debug!(key = record.key(), index, "updated");
        self.records[index] = record;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<Record<P>> {
        let index = rejected(
            "delete",
            key,
            require_key(key).and_then(|_| self.existing_index(key)),
        )?;

        let removed = self.strategy.remove_at(&mut self.records, index);
        tracing::debug!(key, index, size = self.records.len(), "deleted");
        Ok(removed)
    }

    fn size(&self) -> usize {
        self.records.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn get_all(&self) -> Vec<Record<P>>
    where
        P: Clone,
    {
        self.records.clone()
    }

    fn clear(&mut self) {
        tracing::debug!(dropped = self.records.len(), "cleared");
        self.records.clear();
    }

    fn contains(&self, key: &str) -> bool {
        !key.is_empty() && self.locate(key).found().is_some()
    }
}

impl<'a, S, P> IntoIterator for &'a ArrayStore<S, P> {
    type Item = &'a Record<P>;
    type IntoIter = slice::Iter<'a, Record<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<S, P: fmt::Debug> fmt::Debug for ArrayStore<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStore")
            .field("strategy", &std::any::type_name::<S>())
            .field("capacity", &self.capacity)
            .field("records", &self.records)
            .finish()
    }
}

// =============================================================================
// Guards
// =============================================================================

fn require_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StoreError::InvalidArgument("key must not be empty".to_string()));
    }
    Ok(())
}

/// Log a rejected call, passing the result through
fn rejected<T>(op: &'static str, key: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        tracing::debug!(op, key, kind = ?e.kind(), "rejected: {}", e);
    }
    result
}
