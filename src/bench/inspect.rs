//! Store inspection: size baselining before the timed phases run.

use crate::store::{DATASET, Store, StoreError};
use redb::ReadableTableMetadata;

/// Size figures for the dataset, reported once per run.
#[derive(Debug, Clone, Copy)]
pub struct StoreSize {
    /// Records in the dataset table.
    pub records: u64,
    /// Logical bytes held by the table (keys and values).
    pub stored_bytes: u64,
    /// On-disk size of the store file.
    pub file_bytes: u64,
}

/// Read the dataset's size through one read-only transaction.
///
/// Purely diagnostic, but a failure here means the store is unusable and
/// aborts the run before any phase starts.
pub fn inspect(store: &Store) -> Result<StoreSize, StoreError> {
    let txn = store.database().begin_read()?;
    let table = txn.open_table(DATASET)?;
    let records = table.len()?;
    let stored_bytes = table.stats()?.stored_bytes();
    let file_bytes = std::fs::metadata(store.path())?.len();

    Ok(StoreSize {
        records,
        stored_bytes,
        file_bytes,
    })
}
