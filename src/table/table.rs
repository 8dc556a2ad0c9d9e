//! Table implementation
//!
//! Slot vector plus persisted-count cursor over an optional RecordStore.

use std::path::Path;

use crate::config::{Config, StoreValidation, SyncStrategy};
use crate::error::{Result, TableError};
use crate::record::Record;
use crate::storage::RecordStore;

use super::{FlushStats, Slot};

/// Fixed-capacity record table
///
/// ## Invariants
/// - `slots.len() <= capacity`
/// - Slots at or above `persisted_count` are always `Resident`
/// - Without a store, every slot is `Resident`
/// - Records below `persisted_count` are never rewritten
pub struct Table {
    /// Maximum number of records
    capacity: usize,

    /// One slot per logically valid record (allocated for `capacity` up front)
    slots: Vec<Slot>,

    /// Number of leading records already in the store
    persisted_count: usize,

    /// Backing store, if bound
    store: Option<RecordStore>,

    /// Validation used when (re)binding a store
    store_validation: StoreValidation,

    /// Whether flush fsyncs
    sync_strategy: SyncStrategy,

    /// Blocks were written to the store since the last successful sync
    needs_sync: bool,
}

impl Table {
    /// Create a table from config
    ///
    /// With `config.store_path` set, the store is opened (created if absent)
    /// and its records are counted into the table without being read.
    pub fn open(config: Config) -> Result<Self> {
        if config.capacity == 0 {
            return Err(TableError::Config("capacity must be at least 1".to_string()));
        }

        let mut table = Self::with_config(&config);
        if let Some(path) = config.store_path.as_deref() {
            table.bind(Some(path))?;
        }

        Ok(table)
    }

    /// Open with a store path (convenience method)
    ///
    /// Uses default config with the specified store
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().store_path(path).build())
    }

    /// Create an in-memory table with the default capacity
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Empty, unbound table sized from `config`
    fn with_config(config: &Config) -> Self {
        Self {
            capacity: config.capacity,
            slots: Vec::with_capacity(config.capacity),
            persisted_count: 0,
            store: None,
            store_validation: config.store_validation,
            sync_strategy: config.sync_strategy,
            needs_sync: false,
        }
    }

    /// Add a record, returning its index
    ///
    /// Never touches the store. A full table is left unchanged.
    pub fn add(&mut self, record: Record) -> Result<usize> {
        if self.slots.len() >= self.capacity {
            return Err(TableError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let index = self.slots.len();
        self.slots.push(Slot::Resident(record));
        Ok(index)
    }

    /// Get the record at `index`, faulting it in from the store if needed
    pub fn get(&mut self, index: usize) -> Result<&Record> {
        let len = self.slots.len();
        if index >= len {
            return Err(TableError::NotFound { index, len });
        }

        if !self.slots[index].is_resident() {
            let store = match self.store.as_mut() {
                Some(store) => store,
                None => {
                    return Err(corrupt_state(format!(
                        "slot {} is not resident and no store is bound",
                        index
                    )))
                }
            };

            let record = store.read_at(index)?;
            tracing::trace!(index, "faulted record in from store");
            self.slots[index] = Slot::Resident(record);
        }

        match &self.slots[index] {
            Slot::Resident(record) => Ok(record),
            Slot::Stored => Err(corrupt_state(format!("slot {} did not become resident", index))),
        }
    }

    /// Append every record added since the last bind to the store
    ///
    /// `persisted_count` advances after each confirmed block, so a flush
    /// that fails part way can be retried without duplicating records.
    pub fn flush(&mut self) -> Result<FlushStats> {
        let store = match self.store.as_mut() {
            Some(store) => store,
            None => return Ok(FlushStats::default()),
        };

        let start = self.persisted_count;
        for index in start..self.slots.len() {
            let record = match &self.slots[index] {
                Slot::Resident(record) => record,
                Slot::Stored => {
                    return Err(corrupt_state(format!(
                        "unflushed slot {} is not resident",
                        index
                    )))
                }
            };

            store.write_at(index, record)?;
            self.persisted_count = index + 1;
            self.needs_sync = true;
        }

        // A failed sync is retried by the next flush even if it writes nothing
        if self.needs_sync && self.sync_strategy == SyncStrategy::EveryFlush {
            store.sync()?;
            self.needs_sync = false;
        }

        let written = self.persisted_count - start;

        tracing::debug!(
            path = %store.path().display(),
            written,
            persisted = self.persisted_count,
            "flushed table"
        );

        Ok(FlushStats {
            written,
            persisted: self.persisted_count,
        })
    }

    /// Rebind the table to another store, returning the new length
    ///
    /// `None` is a no-op. Otherwise the table is reset to the new store's
    /// contents (all non-resident); records added since the last bind and
    /// not flushed are discarded. On error the table is unchanged.
    pub fn bind(&mut self, path: Option<&Path>) -> Result<usize> {
        let path = match path {
            Some(path) => path,
            None => return Ok(self.slots.len()),
        };

        let (store, count) = RecordStore::open(path, self.store_validation)?;
        if count > self.capacity {
            return Err(TableError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let discarded = self.slots.len() - self.persisted_count;
        if discarded > 0 {
            tracing::warn!(discarded, "bind discarded unflushed records");
        }

        // Old handle is closed here
        self.store = Some(store);
        self.slots.clear();
        self.slots.resize_with(count, || Slot::Stored);
        self.persisted_count = count;
        self.needs_sync = false;

        tracing::debug!(path = %path.display(), records = count, "bound table to store");

        Ok(count)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of logically valid records
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of records
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of leading records known to be in the store
    pub fn persisted_count(&self) -> usize {
        self.persisted_count
    }

    /// Whether slot `index` holds a record in memory (false beyond `len`)
    pub fn is_resident(&self, index: usize) -> bool {
        self.slots.get(index).map_or(false, Slot::is_resident)
    }

    /// Path of the bound store
    pub fn store_path(&self) -> Option<&Path> {
        self.store.as_ref().map(RecordStore::path)
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// Report a broken invariant: fatal in debug builds, logged in release
fn corrupt_state(message: String) -> TableError {
    tracing::error!("corrupt table state: {}", message);
    debug_assert!(false, "corrupt table state: {}", message);
    TableError::CorruptState(message)
}
