//! redb store adapter: dataset table, key codec, and the engine error seam.
//!
//! The harness treats the storage engine as an external collaborator and only
//! relies on its transaction contract: create-or-open a single file, one
//! writer at a time, and MVCC read transactions whose view is fixed at start
//! and unaffected by anything committed later.

use redb::{Database, ReadableTableMetadata, TableDefinition};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// All records live in one named table.
pub const DATASET: TableDefinition<'static, &[u8], &[u8]> = TableDefinition::new("root");

/// Width of an encoded record key in bytes.
pub const KEY_LEN: usize = 8;

/// Encode a record index as a big-endian key.
///
/// Big-endian keeps the table's ascending byte order equal to ascending
/// numeric order, so range bounds translate directly to index bounds.
pub fn encode_key(index: u64) -> [u8; KEY_LEN] {
    index.to_be_bytes()
}

/// Errors surfaced from the storage engine or the export sink.
///
/// Every variant is fatal to the run: the harness does not retry or repair.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open store")]
    Open(#[from] redb::DatabaseError),
    #[error("failed to begin transaction")]
    Transaction(#[from] redb::TransactionError),
    #[error("failed to open dataset table")]
    Table(#[from] redb::TableError),
    #[error("storage operation failed")]
    Storage(#[from] redb::StorageError),
    #[error("failed to commit batch")]
    Commit(#[from] redb::CommitError),
    #[error("store I/O error")]
    Io(#[from] io::Error),
    #[error("invalid insert count: {actual} != {expected}")]
    CountMismatch { expected: u64, actual: u64 },
    #[error("scan count changed mid-run: {previous} then {current}")]
    ScanDrift { previous: u64, current: u64 },
    #[error("scan worker panicked")]
    WorkerPanic,
}

/// Handle to the store file, shared read-only across worker threads.
pub struct Store {
    db: Database,
    path: PathBuf,
}

impl Store {
    /// Create the store file if absent, open it otherwise.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = Database::create(path)?;
        Ok(Self {
            db,
            path: path.to_path_buf(),
        })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records currently in the dataset table; zero if the table
    /// has not been created yet.
    pub fn record_count(&self) -> Result<u64, StoreError> {
        let txn = self.db.begin_read()?;
        match txn.open_table(DATASET) {
            Ok(table) => Ok(table.len()?),
            Err(redb::TableError::TableDoesNotExist(_)) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_key_encoding_preserves_numeric_order() {
        let indices = [0u64, 1, 255, 256, 49, 50, 799_999, 800_000, u64::MAX];
        for &a in &indices {
            for &b in &indices {
                assert_eq!(
                    encode_key(a).cmp(&encode_key(b)),
                    a.cmp(&b),
                    "byte order diverged for {a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_open_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bench.redb");
        assert!(!path.exists());
        let _store = Store::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_fresh_store_has_no_records() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(&dir.path().join("bench.redb")).unwrap();
        assert_eq!(store.record_count().unwrap(), 0);
    }

    #[test]
    fn test_open_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("bench.redb");
        assert!(Store::open(&path).is_err());
    }
}
