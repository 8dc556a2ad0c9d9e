//! Configuration for recordtable
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default number of record slots in a table
pub const DEFAULT_CAPACITY: usize = 1024;

/// Main configuration for a Table instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing store file. `None` keeps the table purely in memory.
    pub store_path: Option<PathBuf>,

    /// How to treat a store whose size is not a whole number of records
    pub store_validation: StoreValidation,

    /// Sync strategy: whether flush fsyncs the store
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Table Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of records the table can hold
    pub capacity: usize,
}

/// Validation applied to a store's size when it is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreValidation {
    /// Ignore a trailing partial record (it is overwritten by the next flush)
    #[default]
    Lenient,

    /// Reject a store with a trailing partial record
    Strict,
}

/// Store sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStrategy {
    /// fsync at the end of every flush that wrote records (safest)
    #[default]
    EveryFlush,

    /// Leave durability to the OS
    Never,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            store_validation: StoreValidation::Lenient,
            sync_strategy: SyncStrategy::EveryFlush,
            capacity: DEFAULT_CAPACITY,
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
    /// Set the backing store file
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = Some(path.into());
        self
    }

    /// Set the store size validation mode
    pub fn store_validation(mut self, validation: StoreValidation) -> Self {
        self.config.store_validation = validation;
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the table capacity (in records)
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
