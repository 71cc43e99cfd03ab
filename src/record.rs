//! Record type
//!
//! A record is identified by its key alone: equality and ordering
//! never look at the payload.

use std::cmp::Ordering;
use std::fmt;

/// A keyed value held by a store
#[derive(Debug, Clone)]
pub struct Record<P> {
    key: String,
    payload: P,
}

impl<P> Record<P> {
    /// Create a record from a key and payload
    pub fn new(key: impl Into<String>, payload: P) -> Self {
        Self {
            key: key.into(),
            payload,
        }
    }

    /// The unique key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The payload
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Split into key and payload
    pub fn into_parts(self) -> (String, P) {
        (self.key, self.payload)
    }
}

impl<P: Default> Record<P> {
    /// Create a record carrying only a key
    pub fn with_key(key: impl Into<String>) -> Self {
        Self::new(key, P::default())
    }
}

impl<P> PartialEq for Record<P> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<P> Eq for Record<P> {}

impl<P> PartialOrd for Record<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Record<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<P> fmt::Display for Record<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
