//! # recordtable
//!
//! A fixed-capacity record table with:
//! - Optional single-file persistence
//! - Lazy loading of stored records on first access
//! - Append-only flush of records added since the last bind
//! - A small command buffer, line parser, and interactive session
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 REPL (recordtable-repl)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ raw lines
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │        Session  ◀──  Command (parse / classify)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ add / get / flush / bind
//!                       ▼
//!               ┌───────────────┐
//!               │     Table     │
//!               │ (slots + cur) │
//!               └───────┬───────┘
//!                       │ read_at / write_at
//!                       ▼
//!               ┌───────────────┐
//!               │  RecordStore  │
//!               │ (flat blocks) │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod table;
pub mod command;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TableError, Result};
pub use config::Config;
pub use record::Record;
pub use table::{FlushStats, Table};
pub use command::{Command, CommandKind};
pub use session::{Outcome, Session};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of recordtable
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
