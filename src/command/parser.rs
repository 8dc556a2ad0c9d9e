//! Line parser
//!
//! Splits a raw input line into a classified Command.

use crate::error::Result;

use super::{Command, CommandKind};

const QUERY_KEYWORDS: &[&str] = &["insert", "select"];

/// Parse one line of input
///
/// Tokens are whitespace separated. A leading `.` token makes a builtin,
/// a query keyword makes a query, anything else stays unrecognized.
pub fn parse_line(line: &str) -> Result<Command> {
    let mut command = Command::new();
    for token in line.split_whitespace() {
        command.push_arg(token)?;
    }

    let kind = match command.keyword() {
        Some(word) if word.starts_with('.') => CommandKind::Builtin,
        Some(word) if QUERY_KEYWORDS.contains(&word) => CommandKind::Query,
        _ => CommandKind::Unrecognized,
    };
    command.set_kind(kind);

    Ok(command)
}
