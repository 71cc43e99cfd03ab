//! # RecordStore
//!
//! A fixed-capacity in-memory record store with:
//! - Create/read/update/delete over records keyed by a unique string
//! - Unordered strategy: linear search, append, swap-with-last delete
//! - Sorted strategy: binary search, shifting insert/delete
//! - One guard layer shared by both strategies
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Storage<P> trait                         │
//! │   save / get / update / delete / size / get_all / clear      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  ArrayStore<S, P>                            │
//! │     (empty key, overflow, exists / not-found guards)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ SearchStrategy
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Unordered  │          │   Sorted    │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use recordstore::{Record, SortedArrayStorage, Storage};
//!
//! let mut store = SortedArrayStorage::with_capacity(8);
//! store.save(Record::new("uuid2", "second")).unwrap();
//! store.save(Record::new("uuid1", "first")).unwrap();
//!
//! let keys: Vec<_> = store.iter().map(|r| r.key()).collect();
//! assert_eq!(keys, ["uuid1", "uuid2"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, Result, StoreError};
pub use config::{Config, Strategy};
pub use record::Record;
pub use storage::{ArrayStorage, ArrayStore, SortedArrayStorage, Storage};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RecordStore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
