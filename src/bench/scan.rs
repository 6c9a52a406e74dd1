//! Scan worker: bounded-range read scans until told to stop.

use crate::bench::ScanReport;
use crate::config::BenchConfig;
use crate::signal::StopSignal;
use crate::store::{DATASET, Store, StoreError, encode_key};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Handle to a spawned scan worker thread.
pub struct ScanHandle {
    handle: thread::JoinHandle<Result<ScanReport, StoreError>>,
}

impl ScanHandle {
    /// Block until the worker exits and yield its report.
    ///
    /// Joining is what enforces the phase hand-off: the orchestrator never
    /// starts the next worker until this returns.
    pub fn join(self) -> Result<ScanReport, StoreError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => Err(StoreError::WorkerPanic),
        }
    }
}

/// Spawn a worker that repeatedly scans the leading key range.
///
/// Each iteration opens a fresh read transaction (independent snapshot) and
/// counts keys strictly below the configured scan bound. The worker polls
/// `signal` only between iterations: an in-flight scan is never interrupted,
/// and at least one iteration completes even if the stop was requested
/// before the thread first ran.
pub fn spawn(store: Arc<Store>, config: &BenchConfig, signal: StopSignal) -> ScanHandle {
    let bound = config.scan_bound();
    let handle = thread::spawn(move || scan_loop(&store, bound, &signal));
    ScanHandle { handle }
}

fn scan_loop(store: &Store, bound: u64, signal: &StopSignal) -> Result<ScanReport, StoreError> {
    let max_key = encode_key(bound);
    let mut iterations: u32 = 0;
    let mut total = Duration::ZERO;
    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    let mut rows: u64 = 0;

    loop {
        let start = Instant::now();
        let matched = scan_once(store, &max_key)?;
        let elapsed = start.elapsed();

        tracing::info!("iterate: {:?} ({} rows)", elapsed, matched);

        iterations += 1;
        total += elapsed;
        min = min.min(elapsed);
        max = max.max(elapsed);

        if iterations == 1 {
            rows = matched;
        } else if matched != rows {
            // Nothing writes during the benchmark, so a drifting count means
            // the snapshot view broke.
            return Err(StoreError::ScanDrift {
                previous: rows,
                current: matched,
            });
        }

        if signal.stop_requested() {
            break;
        }
    }

    Ok(ScanReport {
        iterations,
        total,
        min,
        max,
        rows,
    })
}

/// One scan iteration: its read transaction lives exactly this long.
fn scan_once(store: &Store, max_key: &[u8]) -> Result<u64, StoreError> {
    let txn = store.database().begin_read()?;
    let table = txn.open_table(DATASET)?;

    let mut matched: u64 = 0;
    for item in table.range(..max_key)? {
        let (key, _value) = item?;
        std::hint::black_box(key.value());
        matched += 1;
    }

    Ok(matched)
}
