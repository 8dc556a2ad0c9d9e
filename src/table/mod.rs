//! Table Module
//!
//! Fixed-capacity record table with lazy loading from an optional store.
//!
//! ## Responsibilities
//! - Hold up to `capacity` records
//! - Track which records are resident in memory
//! - Fault non-resident records in from the store on first access
//! - Append records added since the last bind on flush
//!
//! ## Slot Layout
//! ```text
//!   0 ........ persisted_count ........ len ........ capacity
//!   │ Stored or Resident │ Resident (unflushed) │ (absent) │
//! ```
//! Residency and persistence are tracked separately: a slot below
//! `persisted_count` may be either state, a slot above it is always
//! resident.

mod table;

pub use table::Table;

use crate::record::Record;

/// State of an occupied slot
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Slot {
    /// Known to exist in the store, not yet read
    Stored,

    /// Valid in memory
    Resident(Record),
}

impl Slot {
    pub(crate) fn is_resident(&self) -> bool {
        matches!(self, Slot::Resident(_))
    }
}

/// Result of a flush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlushStats {
    /// Records written by this flush
    pub written: usize,

    /// Records held by the store after this flush (0 without a store)
    pub persisted: usize,
}
