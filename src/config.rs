//! Configuration for RecordStore
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// Default maximum number of live records
pub const DEFAULT_CAPACITY: usize = 100_000;

/// Main configuration for a store instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of live records; fixed for the lifetime of the store
    pub capacity: usize,

    /// Slot search strategy
    pub strategy: Strategy,
}

/// Slot search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Linear search, append on insert, swap-with-last on delete
    #[default]
    Unordered,

    /// Binary search, shifting insert/delete, records kept in key order
    Sorted,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            strategy: Strategy::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum number of live records
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the search strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Unordered => f.write_str("unordered"),
            Strategy::Sorted => f.write_str("sorted"),
        }
    }
}

impl FromStr for Strategy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unordered" => Ok(Strategy::Unordered),
            "sorted" => Ok(Strategy::Sorted),
            other => Err(StoreError::InvalidArgument(format!(
                "unknown strategy '{}' (expected 'unordered' or 'sorted')",
                other
            ))),
        }
    }
}
