//! Tests for Command
//!
//! These tests verify:
//! - Empty command state
//! - Argument buffer growth in fixed increments
//! - Insert/select classification
//! - Line parsing and insert field validation

use recordtable::command::{parse_line, record_from_insert, ARG_GROWTH};
use recordtable::{Command, CommandKind, Record, TableError};

// =============================================================================
// Buffer Tests
// =============================================================================

#[test]
fn test_new_command() {
    let command = Command::new();

    assert_eq!(command.kind(), CommandKind::Unrecognized);
    assert!(command.is_empty());
    assert_eq!(command.len(), 0);
    assert_eq!(command.capacity(), 0);
    assert_eq!(command.keyword(), None);
}

#[test]
fn test_push_arg_grows_by_fixed_increment() {
    let mut command = Command::new();
    let args = ["test1", "test2", "test3", "test4", "test5", "test6"];

    command.push_arg(args[0]).unwrap();
    assert_eq!(command.args()[0], "test1");
    assert_eq!(command.len(), 1);
    assert_eq!(command.capacity(), ARG_GROWTH);

    for arg in &args[1..] {
        command.push_arg(arg).unwrap();
    }

    assert_eq!(command.len(), 6);
    assert_eq!(command.capacity(), 2 * ARG_GROWTH);
    assert_eq!(command.args(), &args[..]);
}

#[test]
fn test_capacity_unchanged_until_full() {
    let mut command = Command::new();

    for idx in 0..ARG_GROWTH {
        command.push_arg(&format!("arg{}", idx)).unwrap();
        assert_eq!(command.capacity(), ARG_GROWTH);
    }
    command.push_arg("overflow").unwrap();

    assert_eq!(command.capacity(), 2 * ARG_GROWTH);
}

#[test]
fn test_push_arg_preserves_bytes() {
    let mut command = Command::new();

    command.push_arg("  spaced  ").unwrap();
    command.push_arg("ünïcödé").unwrap();
    command.push_arg("").unwrap();

    assert_eq!(command.args(), &["  spaced  ", "ünïcödé", ""]);
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test]
fn test_classify_insert() {
    let mut command = Command::with_args(
        CommandKind::Query,
        ["insert", "1", "user1", "user1@example.com", "21"],
    )
    .unwrap();

    command.classify_as_insert().unwrap();

    assert_eq!(command.kind(), CommandKind::Insert);
    assert_eq!(command.len(), 5);
}

#[test]
fn test_classify_insert_wrong_kind() {
    let mut command = Command::with_args(
        CommandKind::Unrecognized,
        ["insert", "1", "user1", "user1@example.com", "21"],
    )
    .unwrap();

    let result = command.classify_as_insert();

    assert!(matches!(result, Err(TableError::InvalidArgument(_))));
    assert_eq!(command.kind(), CommandKind::Unrecognized);
}

#[test]
fn test_classify_insert_wrong_arg_count() {
    let mut command =
        Command::with_args(CommandKind::Query, ["insert", "1", "user1"]).unwrap();

    let result = command.classify_as_insert();

    assert!(result.is_err());
    assert_eq!(command.kind(), CommandKind::Query);
}

#[test]
fn test_classify_insert_wrong_keyword() {
    let mut command =
        Command::with_args(CommandKind::Query, ["select", "1", "a", "b", "2"]).unwrap();

    assert!(command.classify_as_insert().is_err());
    assert_eq!(command.kind(), CommandKind::Query);
}

#[test]
fn test_classify_insert_does_not_parse_fields() {
    let mut command =
        Command::with_args(CommandKind::Query, ["insert", "one", "a", "b", "old"]).unwrap();

    command.classify_as_insert().unwrap();

    assert_eq!(command.kind(), CommandKind::Insert);
    assert!(record_from_insert(&command).is_err());
}

#[test]
fn test_classify_select() {
    let mut all = Command::with_args(CommandKind::Query, ["select"]).unwrap();
    let mut one = Command::with_args(CommandKind::Query, ["select", "3"]).unwrap();
    let mut bad = Command::with_args(CommandKind::Query, ["select", "1", "2"]).unwrap();

    all.classify_as_select().unwrap();
    one.classify_as_select().unwrap();

    assert_eq!(all.kind(), CommandKind::Select);
    assert_eq!(one.kind(), CommandKind::Select);
    assert!(bad.classify_as_select().is_err());
    assert_eq!(bad.kind(), CommandKind::Query);
}

// =============================================================================
// Parser Tests
// =============================================================================

#[test]
fn test_parse_builtin() {
    let command = parse_line(".load  ./data.db").unwrap();

    assert_eq!(command.kind(), CommandKind::Builtin);
    assert_eq!(command.args(), &[".load", "./data.db"]);
}

#[test]
fn test_parse_query() {
    let command = parse_line("insert 1 user1 user1@example.com 21\n").unwrap();

    assert_eq!(command.kind(), CommandKind::Query);
    assert_eq!(command.len(), 5);
    assert_eq!(command.keyword(), Some("insert"));
}

#[test]
fn test_parse_unrecognized() {
    assert_eq!(parse_line("delete 1").unwrap().kind(), CommandKind::Unrecognized);
    assert_eq!(parse_line("INSERT 1").unwrap().kind(), CommandKind::Unrecognized);

    let empty = parse_line("   ").unwrap();
    assert_eq!(empty.kind(), CommandKind::Unrecognized);
    assert!(empty.is_empty());
    assert_eq!(empty.capacity(), 0);
}

// =============================================================================
// Field Validation Tests
// =============================================================================

fn insert_command(line: &str) -> Command {
    let mut command = parse_line(line).unwrap();
    command.classify_as_insert().unwrap();
    command
}

#[test]
fn test_record_from_insert() {
    let command = insert_command("insert 1 user1 user1@example.com 21");

    let record = record_from_insert(&command).unwrap();

    assert_eq!(record, Record::new(1, "user1", "user1@example.com", 21).unwrap());
}

#[test]
fn test_record_from_insert_requires_insert_kind() {
    let command = parse_line("insert 1 user1 user1@example.com 21").unwrap();

    let result = record_from_insert(&command);

    assert!(matches!(result, Err(TableError::InvalidArgument(_))));
}

#[test]
fn test_record_from_insert_bad_numbers() {
    let negative_id = insert_command("insert -1 a a@b.c 20");
    let huge_age = insert_command("insert 1 a a@b.c 300");

    assert!(matches!(
        record_from_insert(&negative_id),
        Err(TableError::InvalidArgument(_))
    ));
    assert!(matches!(
        record_from_insert(&huge_age),
        Err(TableError::InvalidArgument(_))
    ));
}

#[test]
fn test_record_from_insert_name_too_long() {
    let line = format!("insert 1 {} a@b.c 20", "n".repeat(300));
    let command = insert_command(&line);

    assert!(matches!(
        record_from_insert(&command),
        Err(TableError::InvalidArgument(_))
    ));
}
