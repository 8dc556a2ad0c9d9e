//! Record codec
//!
//! Fixed-size block encoding for records.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Result, TableError};

use super::{Record, EMAIL_MAX_LEN, NAME_MAX_LEN};

/// On-disk width of the name field (max length + NUL terminator)
const NAME_FIELD_SIZE: usize = NAME_MAX_LEN + 1;

/// On-disk width of the email field (max length + NUL terminator)
const EMAIL_FIELD_SIZE: usize = EMAIL_MAX_LEN + 1;

/// Block size: Id (4) + Name (256) + Email (256) + Age (1) = 517 bytes
pub const BLOCK_SIZE: usize = 4 + NAME_FIELD_SIZE + EMAIL_FIELD_SIZE + 1;

impl Record {
    /// Encode to exactly `BLOCK_SIZE` bytes
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(BLOCK_SIZE);

        buf.put_u32_le(self.id);
        put_padded(&mut buf, &self.name, NAME_FIELD_SIZE);
        put_padded(&mut buf, &self.email, EMAIL_FIELD_SIZE);
        buf.put_u8(self.age);

        buf.freeze()
    }

    /// Decode one block produced by [`Record::encode`]
    pub fn decode(mut block: &[u8]) -> Result<Self> {
        if block.len() != BLOCK_SIZE {
            return Err(TableError::Serialization(format!(
                "record block is {} bytes, expected {}",
                block.len(),
                BLOCK_SIZE
            )));
        }

        let id = block.get_u32_le();
        let name = take_padded(&mut block, NAME_FIELD_SIZE, "name")?;
        let email = take_padded(&mut block, EMAIL_FIELD_SIZE, "email")?;
        let age = block.get_u8();

        Ok(Self {
            id,
            name,
            email,
            age,
        })
    }
}

fn put_padded(buf: &mut BytesMut, text: &str, width: usize) {
    buf.put_slice(text.as_bytes());
    buf.put_bytes(0, width - text.len());
}

fn take_padded(block: &mut &[u8], width: usize, field: &str) -> Result<String> {
    let data = *block;
    let (raw, rest) = data.split_at(width);
    *block = rest;

    // A full-width field with no NUL would exceed the max length
    let end = raw.iter().position(|&b| b == 0).ok_or_else(|| {
        TableError::Serialization(format!("{} field is not NUL terminated", field))
    })?;

    String::from_utf8(raw[..end].to_vec())
        .map_err(|e| TableError::Serialization(format!("{} field is not UTF-8: {}", field, e)))
}
