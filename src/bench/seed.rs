//! Dataset seeding: batched, deterministic, run-once.

use crate::config::BenchConfig;
use crate::store::{DATASET, Store, StoreError, encode_key};
use redb::ReadableTableMetadata;

/// Outcome of a completed seeding pass.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    /// Records inserted.
    pub records: u64,
    /// Logical bytes held by the dataset table after the final batch.
    pub stored_bytes: u64,
}

/// Populate an empty store with `config.item_count` records.
///
/// Keys are the big-endian encodings of the contiguous range
/// `0..item_count`; values are zero-filled `value_size` payloads (content is
/// irrelevant to the benchmark, only size matters). Each batch of
/// `batch_size` records commits as one write transaction; a trailing short
/// batch covers any remainder. Any transaction failure aborts the remaining
/// batches immediately; previously committed batches stay on disk and
/// require manual cleanup before a retry (seeding only runs against files
/// that did not previously exist).
///
/// After the last batch the record count is re-read through a fresh read
/// transaction; a mismatch with `item_count` means retained state from an
/// earlier run or silently overwritten keys, and is fatal.
pub fn seed(store: &Store, config: &BenchConfig) -> Result<SeedSummary, StoreError> {
    tracing::info!(
        "seeding {} records in batches of {}",
        config.item_count,
        config.batch_size
    );

    let value = vec![0u8; config.value_size];
    let mut count: u64 = 0;
    let mut stored_bytes: u64 = 0;

    while count < config.item_count {
        let batch_end = (count + config.batch_size).min(config.item_count);
        let txn = store.database().begin_write()?;
        {
            let mut table = txn.open_table(DATASET)?;
            while count < batch_end {
                table.insert(encode_key(count).as_slice(), value.as_slice())?;
                count += 1;
            }
            stored_bytes = table.stats()?.stored_bytes();
        }
        txn.commit()?;
        tracing::info!("{} rows, {} bytes", count, stored_bytes);
    }

    let actual = store.record_count()?;
    if actual != config.item_count {
        return Err(StoreError::CountMismatch {
            expected: config.item_count,
            actual,
        });
    }

    tracing::info!("seeding done");
    Ok(SeedSummary {
        records: count,
        stored_bytes,
    })
}
