//! Session Module
//!
//! Routes parsed input lines to a table and writes the results.
//!
//! ## Commands
//! - `.exit`                               flush and stop
//! - `.flush`                              flush unpersisted records
//! - `.load <path>`                        bind to another store
//! - `.help`                               list commands
//! - `insert <id> <name> <email> <age>`    add a record
//! - `select [index]`                      print one or every record

use std::io::Write;
use std::path::Path;

use crate::command::{parse_line, record_from_insert, Command, CommandKind};
use crate::error::{Result, TableError};
use crate::table::Table;

const HELP: &str = "\
.exit                              Flush and exit
.flush                             Write unflushed records to the store
.load <path>                       Bind to the store at <path>
.help                              Show this message
insert <id> <name> <email> <age>   Add a record
select [index]                     Print one record or all records";

/// What the caller should do after a line has been executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Interactive session over one table
pub struct Session {
    table: Table,
}

impl Session {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    /// Execute one input line, writing user-facing output to `out`
    ///
    /// Table errors are returned; the session stays usable afterwards.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Outcome> {
        let command = parse_line(line)?;

        match command.kind() {
            CommandKind::Builtin => self.builtin(&command, out),
            CommandKind::Query => {
                self.query(command, out)?;
                Ok(Outcome::Continue)
            }
            _ if command.is_empty() => Ok(Outcome::Continue),
            _ => {
                writeln!(out, "Unrecognized command: {}", line.trim())?;
                Ok(Outcome::Continue)
            }
        }
    }

    fn builtin<W: Write>(&mut self, command: &Command, out: &mut W) -> Result<Outcome> {
        match command.args() {
            [name] if name == ".exit" => {
                let stats = self.table.flush()?;
                tracing::info!(written = stats.written, "session exiting");
                Ok(Outcome::Exit)
            }
            [name] if name == ".flush" => {
                let stats = self.table.flush()?;
                writeln!(out, "Flushed {} record(s)", stats.written)?;
                Ok(Outcome::Continue)
            }
            [name, path] if name == ".load" => {
                let count = self.table.bind(Some(Path::new(path)))?;
                writeln!(out, "Loaded {} record(s) from {}", count, path)?;
                Ok(Outcome::Continue)
            }
            [name] if name == ".help" => {
                writeln!(out, "{}", HELP)?;
                Ok(Outcome::Continue)
            }
            args => {
                writeln!(out, "Unrecognized command: {}", args.join(" "))?;
                Ok(Outcome::Continue)
            }
        }
    }

    fn query<W: Write>(&mut self, mut command: Command, out: &mut W) -> Result<()> {
        let keyword = command.keyword().unwrap_or_default().to_string();
        match keyword.as_str() {
            "insert" => {
                command.classify_as_insert()?;
                let record = record_from_insert(&command)?;
                let index = self.table.add(record)?;
                tracing::debug!(index, "inserted record");
                Ok(())
            }
            "select" => {
                command.classify_as_select()?;
                match command.args() {
                    [_, index] => {
                        let index = index.parse::<usize>().map_err(|e| {
                            TableError::InvalidArgument(format!("index '{}': {}", index, e))
                        })?;
                        writeln!(out, "{}", self.table.get(index)?)?;
                    }
                    _ => {
                        for index in 0..self.table.len() {
                            writeln!(out, "{}", self.table.get(index)?)?;
                        }
                    }
                }
                Ok(())
            }
            other => Err(TableError::InvalidArgument(format!("unknown query: {}", other))),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Consume the session, returning its table
    pub fn into_table(self) -> Table {
        self.table
    }
}
