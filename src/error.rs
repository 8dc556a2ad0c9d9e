//! Error types for recordtable
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using TableError
pub type Result<T> = std::result::Result<T, TableError>;

/// Unified error type for recordtable operations
#[derive(Debug, Error)]
pub enum TableError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Table is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Record {index} not found (table holds {len})")]
    NotFound { index: usize, len: usize },

    #[error("Allocation failed: {0}")]
    AllocationFailure(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Malformed store: {0}")]
    MalformedStore(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A table invariant was broken. Always a bug, never an operational error.
    #[error("Corrupt table state: {0}")]
    CorruptState(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
