//! Storage Module
//!
//! Persistent storage for a single table.
//!
//! ## Responsibilities
//! - Open or create the store file
//! - Count the whole records it already holds
//! - Random-access reads of one record block
//! - Positional writes of one record block
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Record 0 (BLOCK_SIZE bytes)            │
//! ├────────────────────────────────────────┤
//! │ Record 1 (BLOCK_SIZE bytes)            │
//! ├────────────────────────────────────────┤
//! │ ... (no header, footer, or checksum)   │
//! └────────────────────────────────────────┘
//! ```
//! Record `i` lives at byte offset `i * BLOCK_SIZE`.

mod store;

pub use store::RecordStore;
