//! Record Module
//!
//! The fixed-layout row value stored in a table.
//!
//! ## Responsibilities
//! - Hold one row: id, name, email, age
//! - Enforce the name/email length bounds at construction
//! - Encode to / decode from the fixed-size on-disk block
//!
//! ## Block Format
//! ```text
//! ┌─────────┬──────────────────┬──────────────────┬─────────┐
//! │ Id (4)  │    Name (256)    │   Email (256)    │ Age (1) │
//! └─────────┴──────────────────┴──────────────────┴─────────┘
//! ```
//! Integers are little-endian; text fields are UTF-8, NUL padded.

mod codec;

use std::fmt;

use crate::error::{Result, TableError};

pub use codec::BLOCK_SIZE;

/// Longest name in bytes
pub const NAME_MAX_LEN: usize = 255;

/// Longest email in bytes
pub const EMAIL_MAX_LEN: usize = 255;

/// A single table row
///
/// Fields are private so every `Record` in circulation has passed the
/// bounds checks in [`Record::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    id: u32,
    name: String,
    email: String,
    age: u8,
}

impl Record {
    /// Create a record, rejecting over-long or NUL-containing text
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>, age: u8) -> Result<Self> {
        let name = name.into();
        let email = email.into();

        check_text("name", &name, NAME_MAX_LEN)?;
        check_text("email", &email, EMAIL_MAX_LEN)?;

        Ok(Self {
            id,
            name,
            email,
            age,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.id, self.name, self.email, self.age)
    }
}

fn check_text(field: &str, text: &str, max_len: usize) -> Result<()> {
    if text.len() > max_len {
        return Err(TableError::InvalidArgument(format!(
            "{} is {} bytes (max {})",
            field,
            text.len(),
            max_len
        )));
    }

    // NUL is the on-disk padding byte
    if text.as_bytes().contains(&0) {
        return Err(TableError::InvalidArgument(format!(
            "{} contains a NUL byte",
            field
        )));
    }

    Ok(())
}
