//! Insert field validation
//!
//! Turns the raw arguments of an insert command into a Record.

use crate::error::{Result, TableError};
use crate::record::Record;

use super::{Command, CommandKind};

/// Build a record from `insert <id> <name> <email> <age>`
///
/// The command must already be classified as an insert.
pub fn record_from_insert(command: &Command) -> Result<Record> {
    if command.kind() != CommandKind::Insert {
        return Err(TableError::InvalidArgument(format!(
            "expected an insert command, got {:?}",
            command.kind()
        )));
    }

    match command.args() {
        [_, id, name, email, age] => {
            let id = id.parse::<u32>().map_err(|e| {
                TableError::InvalidArgument(format!("id '{}': {}", id, e))
            })?;
            let age = age.parse::<u8>().map_err(|e| {
                TableError::InvalidArgument(format!("age '{}': {}", age, e))
            })?;

            Record::new(id, name.as_str(), email.as_str(), age)
        }
        args => Err(TableError::InvalidArgument(format!(
            "insert takes 4 fields, got {}",
            args.len().saturating_sub(1)
        ))),
    }
}
