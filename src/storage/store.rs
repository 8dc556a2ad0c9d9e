//! Record Store
//!
//! The single backing file a table may be bound to.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::config::StoreValidation;
use crate::error::{Result, TableError};
use crate::record::{Record, BLOCK_SIZE};

/// Handle to an open store file
///
/// The file is closed when the store is dropped.
#[derive(Debug)]
pub struct RecordStore {
    /// Open read/write handle
    file: File,
    /// Path the store was opened from
    path: PathBuf,
}

impl RecordStore {
    /// Open or create a store, returning it with its whole-record count
    ///
    /// The count is `file_size / BLOCK_SIZE`. A trailing partial block is
    /// ignored under `StoreValidation::Lenient` and rejected under `Strict`.
    pub fn open(path: &Path, validation: StoreValidation) -> Result<(Self, usize)> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let file_size = file.metadata()?.len();
        let block_size = BLOCK_SIZE as u64;
        let trailing = file_size % block_size;

        if trailing != 0 {
            match validation {
                StoreValidation::Strict => {
                    return Err(TableError::MalformedStore(format!(
                        "{}: size {} is not a multiple of the {}-byte record block",
                        path.display(),
                        file_size,
                        BLOCK_SIZE
                    )));
                }
                StoreValidation::Lenient => {
                    tracing::warn!(
                        path = %path.display(),
                        trailing_bytes = trailing,
                        "ignoring partial record at end of store"
                    );
                }
            }
        }

        let count = usize::try_from(file_size / block_size).map_err(|_| {
            TableError::MalformedStore(format!(
                "{}: record count does not fit in memory",
                path.display()
            ))
        })?;

        tracing::debug!(path = %path.display(), records = count, "opened store");

        Ok((
            Self {
                file,
                path: path.to_path_buf(),
            },
            count,
        ))
    }

    /// Read the record at `index`
    ///
    /// A short read surfaces as an `UnexpectedEof` IO error.
    pub fn read_at(&mut self, index: usize) -> Result<Record> {
        self.file.seek(SeekFrom::Start(Self::offset(index)))?;

        let mut block = [0u8; BLOCK_SIZE];
        self.file.read_exact(&mut block)?;

        Record::decode(&block)
    }

    /// Write `record` as block `index`
    ///
    /// Writing at an explicit offset (rather than in append mode) means a
    /// retry after a partial write lands on the same block.
    pub fn write_at(&mut self, index: usize, record: &Record) -> Result<()> {
        self.file.seek(SeekFrom::Start(Self::offset(index)))?;
        self.file.write_all(&record.encode())?;
        Ok(())
    }

    /// Force written blocks to disk
    pub fn sync(&mut self) -> Result<()> {
        self.file.flush()?;
        self.file.sync_data()?;
        Ok(())
    }

    /// Path the store was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn offset(index: usize) -> u64 {
        index as u64 * BLOCK_SIZE as u64
    }
}
