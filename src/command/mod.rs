//! Command Module
//!
//! Argument buffer plus kind tag for one line of user input.
//!
//! ## Lifecycle
//! ```text
//!   new() ──▶ Unrecognized ──parse_line──▶ Builtin | Query | Unrecognized
//!                                             │
//!                              classify_as_insert / classify_as_select
//!                                             ▼
//!                                       Insert | Select
//! ```
//! Reclassification only retags the command; the argument storage is
//! reused as-is.

mod buffer;
mod fields;
mod parser;

pub use buffer::{Command, ARG_GROWTH};
pub use fields::record_from_insert;
pub use parser::parse_line;

/// Command kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandKind {
    /// Not understood
    #[default]
    Unrecognized,

    /// Meta command starting with `.` (e.g. `.exit`)
    Builtin,

    /// Query keyword seen, not yet validated
    Query,

    /// `insert <id> <name> <email> <age>`
    Insert,

    /// `select [index]`
    Select,
}
