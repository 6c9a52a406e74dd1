//! Consistent snapshot export through one read transaction.

use crate::store::{DATASET, Store, StoreError};
use redb::ReadableTable;
use std::io::Write;
use std::time::{Duration, Instant};

/// Outcome of a completed export.
#[derive(Debug, Clone, Copy)]
pub struct ExportReport {
    /// Wall-clock time for the whole export.
    pub duration: Duration,
    /// Records streamed.
    pub records: u64,
    /// Key and value bytes streamed.
    pub bytes: u64,
}

/// Stream every record, in ascending key order, into `sink`.
///
/// The whole walk runs inside a single read transaction, so the sink
/// receives one point-in-time view of the dataset no matter how long the
/// export takes or what else is reading concurrently. The harness does not
/// retain the output: the real run passes `io::sink()` and only the duration
/// matters. Any store or sink error aborts the run; a partial export has no
/// benchmark meaning.
pub fn export_snapshot<W: Write>(store: &Store, sink: &mut W) -> Result<ExportReport, StoreError> {
    let start = Instant::now();

    let txn = store.database().begin_read()?;
    let table = txn.open_table(DATASET)?;

    let mut records: u64 = 0;
    let mut bytes: u64 = 0;
    for item in table.iter()? {
        let (key, value) = item?;
        sink.write_all(key.value())?;
        sink.write_all(value.value())?;
        records += 1;
        bytes += (key.value().len() + value.value().len()) as u64;
    }
    sink.flush()?;

    Ok(ExportReport {
        duration: start.elapsed(),
        records,
        bytes,
    })
}
