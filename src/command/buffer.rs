//! Command argument buffer

use crate::error::{Result, TableError};

use super::CommandKind;

/// Number of argument slots added each time the buffer grows
pub const ARG_GROWTH: usize = 5;

/// Number of arguments in a well-formed insert (keyword included)
const INSERT_ARG_COUNT: usize = 5;

/// Ordered arguments plus a command kind
///
/// Capacity grows in steps of `ARG_GROWTH` and never shrinks.
#[derive(Debug, Clone, Default)]
pub struct Command {
    kind: CommandKind,
    args: Vec<String>,
    /// Logical capacity; the backing Vec always has at least this much room
    capacity: usize,
}

impl Command {
    /// Create an empty, unrecognized command with no storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a command of a given kind from existing arguments
    pub fn with_args<I, S>(kind: CommandKind, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut command = Self::new();
        for arg in args {
            command.push_arg(arg.as_ref())?;
        }
        command.kind = kind;
        Ok(command)
    }

    /// Append a copy of `arg`
    ///
    /// All allocation happens before anything is mutated, so on
    /// `AllocationFailure` the command is exactly as it was.
    pub fn push_arg(&mut self, arg: &str) -> Result<()> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(arg.len())
            .map_err(|e| TableError::AllocationFailure(e.to_string()))?;
        owned.push_str(arg);

        if self.args.len() == self.capacity {
            self.args
                .try_reserve_exact(ARG_GROWTH)
                .map_err(|e| TableError::AllocationFailure(e.to_string()))?;
            self.capacity += ARG_GROWTH;
        }

        self.args.push(owned);
        Ok(())
    }

    /// Retag a query spelling out `insert <id> <name> <email> <age>`
    ///
    /// Field contents are not checked here; see `record_from_insert`.
    pub fn classify_as_insert(&mut self) -> Result<()> {
        if self.kind != CommandKind::Query {
            return Err(TableError::InvalidArgument(format!(
                "expected a query command, got {:?}",
                self.kind
            )));
        }

        if self.keyword() != Some("insert") || self.args.len() != INSERT_ARG_COUNT {
            return Err(TableError::InvalidArgument(
                "usage: insert <id> <name> <email> <age>".to_string(),
            ));
        }

        self.kind = CommandKind::Insert;
        Ok(())
    }

    /// Retag a query spelling out `select [index]`
    pub fn classify_as_select(&mut self) -> Result<()> {
        if self.kind != CommandKind::Query {
            return Err(TableError::InvalidArgument(format!(
                "expected a query command, got {:?}",
                self.kind
            )));
        }

        if self.keyword() != Some("select") || self.args.len() > 2 {
            return Err(TableError::InvalidArgument(
                "usage: select [index]".to_string(),
            ));
        }

        self.kind = CommandKind::Select;
        Ok(())
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub(crate) fn set_kind(&mut self, kind: CommandKind) {
        self.kind = kind;
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// First argument, if any
    pub fn keyword(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Argument slots available before the next growth
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
