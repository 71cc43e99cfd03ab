//! Error types for RecordStore
//!
//! Provides a unified error type for all storage operations.
//! Every error leaves the store exactly as it was before the call.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for RecordStore operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Argument Errors
    // -------------------------------------------------------------------------
    /// A required key was missing (empty)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Capacity Errors
    // -------------------------------------------------------------------------
    #[error("Storage overflow")]
    Overflow { capacity: usize },

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Payload-free discriminant of a [`StoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Overflow,
    AlreadyExists,
    NotFound,
}

impl StoreError {
    /// Get the abstract error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            StoreError::Overflow { .. } => ErrorKind::Overflow,
            StoreError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            StoreError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
