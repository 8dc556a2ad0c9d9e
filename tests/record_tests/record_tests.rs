//! Tests for Record
//!
//! These tests verify:
//! - Field bounds enforced at construction
//! - Fixed block size and layout
//! - Decoding of valid and damaged blocks

use recordtable::record::{Record, BLOCK_SIZE, EMAIL_MAX_LEN, NAME_MAX_LEN};
use recordtable::TableError;

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_record_fields() {
    let record = Record::new(7, "alice", "alice@example.com", 30).unwrap();

    assert_eq!(record.id(), 7);
    assert_eq!(record.name(), "alice");
    assert_eq!(record.email(), "alice@example.com");
    assert_eq!(record.age(), 30);
}

#[test]
fn test_name_at_max_length_accepted() {
    let name = "n".repeat(NAME_MAX_LEN);

    let record = Record::new(1, name.clone(), "a@b.c", 1).unwrap();

    assert_eq!(record.name(), name);
}

#[test]
fn test_name_too_long_rejected() {
    let result = Record::new(1, "n".repeat(NAME_MAX_LEN + 1), "a@b.c", 1);

    assert!(matches!(result, Err(TableError::InvalidArgument(_))));
}

#[test]
fn test_email_too_long_rejected() {
    let result = Record::new(1, "name", "e".repeat(EMAIL_MAX_LEN + 1), 1);

    assert!(matches!(result, Err(TableError::InvalidArgument(_))));
}

#[test]
fn test_nul_byte_rejected() {
    let result = Record::new(1, "na\0me", "a@b.c", 1);

    assert!(matches!(result, Err(TableError::InvalidArgument(_))));
}

#[test]
fn test_display_format() {
    let record = Record::new(1, "user1", "user1@example.com", 21).unwrap();

    assert_eq!(record.to_string(), "(1, user1, user1@example.com, 21)");
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_is_fixed_size() {
    let short = Record::new(1, "", "", 0).unwrap();
    let long = Record::new(
        u32::MAX,
        "n".repeat(NAME_MAX_LEN),
        "e".repeat(EMAIL_MAX_LEN),
        u8::MAX,
    )
    .unwrap();

    assert_eq!(BLOCK_SIZE, 517);
    assert_eq!(short.encode().len(), BLOCK_SIZE);
    assert_eq!(long.encode().len(), BLOCK_SIZE);
}

#[test]
fn test_encode_layout() {
    let record = Record::new(0x0102_0304, "ab", "cd", 9).unwrap();

    let block = record.encode();

    assert_eq!(&block[0..4], &[0x04u8, 0x03, 0x02, 0x01]);
    assert_eq!(&block[4..6], b"ab");
    assert!(block[6..260].iter().all(|&b| b == 0));
    assert_eq!(&block[260..262], b"cd");
    assert!(block[262..516].iter().all(|&b| b == 0));
    assert_eq!(block[516], 9);
}

#[test]
fn test_decode_encoded_record() {
    let record = Record::new(42, "José", "jose@example.com", 77).unwrap();

    let decoded = Record::decode(&record.encode()).unwrap();

    assert_eq!(decoded, record);
}

// =============================================================================
// Decoding Error Tests
// =============================================================================

#[test]
fn test_decode_wrong_length() {
    let block = vec![0u8; BLOCK_SIZE - 1];

    let result = Record::decode(&block);

    assert!(matches!(result, Err(TableError::Serialization(_))));
}

#[test]
fn test_decode_unterminated_name() {
    let mut block = Record::new(1, "", "", 1).unwrap().encode().to_vec();
    for byte in &mut block[4..260] {
        *byte = b'x';
    }

    let result = Record::decode(&block);

    assert!(matches!(result, Err(TableError::Serialization(_))));
}

#[test]
fn test_decode_invalid_utf8() {
    let mut block = Record::new(1, "ok", "ok", 1).unwrap().encode().to_vec();
    block[260] = 0xFF;

    let result = Record::decode(&block);

    assert!(matches!(result, Err(TableError::Serialization(_))));
}
