//! Storage Module
//!
//! Fixed-capacity array-backed record storage.
//!
//! ## Responsibilities
//! - Enforce capacity, key presence and key uniqueness in one place
//! - Delegate slot search and structural mutation to a strategy
//! - Keep the live window `[0, size)` free of gaps
//!
//! ## Layout
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ ArrayStore<S, P>          (guard logic)       │
//! │ ┌─────────┬─────────┬─────┬───────────────┐   │
//! │ │ rec 0   │ rec 1   │ ... │ rec size-1    │   │  live window
//! │ └─────────┴─────────┴─────┴───────────────┘   │
//! │ ┌───────────────────────────────────────────┐ │
//! │ │ unused up to capacity (never read)        │ │
//! │ └───────────────────────────────────────────┘ │
//! └──────────────────────┬────────────────────────┘
//!                        │ locate / place_at / remove_at
//!          ┌─────────────┴─────────────┐
//!          ▼                           ▼
//!   ┌─────────────┐             ┌─────────────┐
//!   │  Unordered  │             │   Sorted    │
//!   │ linear scan │             │ binary srch │
//!   │ swap-delete │             │ shift-delete│
//!   └─────────────┘             └─────────────┘
//! ```

mod array;
mod sorted;
mod strategy;
mod unordered;

pub use array::{ArrayStorage, ArrayStore, SortedArrayStorage};
pub use sorted::Sorted;
pub use strategy::{SearchStrategy, Slot};
pub use unordered::Unordered;

use crate::config::{Config, Strategy};
use crate::error::Result;
use crate::record::Record;

/// CRUD contract shared by every store
///
/// Every failing call leaves the store unchanged.
pub trait Storage<P> {
    /// Insert a record whose key is not yet present
    ///
    /// Fails with `InvalidArgument` for an empty key, `Overflow` when the
    /// store is full, and `AlreadyExists` for a duplicate key.
    fn save(&mut self, record: Record<P>) -> Result<()>;

    /// Borrow the record stored under `key`
    fn get(&self, key: &str) -> Result<&Record<P>>;

    /// Replace the stored record that shares the argument's key
    fn update(&mut self, record: Record<P>) -> Result<()>;

    /// Remove the record stored under `key`, handing it back
    fn delete(&mut self, key: &str) -> Result<Record<P>>;

    /// Number of live records
    fn size(&self) -> usize;

    /// Maximum number of live records
    fn capacity(&self) -> usize;

    /// Fresh snapshot of the live records
    ///
    /// Insertion order (modulo swap-deletes) for the unordered store,
    /// key order for the sorted store.
    fn get_all(&self) -> Vec<Record<P>>
    where
        P: Clone;

    /// Drop every record
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }
}

/// Create an empty store for the configured strategy and capacity
pub fn open<P: 'static>(config: &Config) -> Box<dyn Storage<P>> {
    tracing::debug!(
        strategy = %config.strategy,
        capacity = config.capacity,
        "opening store"
    );

    match config.strategy {
        Strategy::Unordered => Box::new(ArrayStorage::<P>::with_capacity(config.capacity)),
        Strategy::Sorted => Box::new(SortedArrayStorage::<P>::with_capacity(config.capacity)),
    }
}
