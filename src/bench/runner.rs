//! Benchmark orchestration: the four-state run sequence.

use crate::bench::export::{ExportReport, export_snapshot};
use crate::bench::inspect::inspect;
use crate::bench::scan;
use crate::bench::seed::seed;
use crate::bench::{RunSummary, ScanReport};
use crate::config::BenchConfig;
use crate::results::BenchPrinter;
use crate::signal::StopSignal;
use crate::store::Store;
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::thread;

/// Drives the benchmark phases in order against one store file.
///
/// Exactly one scan worker is alive at any moment: every phase joins its
/// worker before the next phase starts, so phases never overlap. At most two
/// busy threads exist at any time, the worker plus this one, which sleeps
/// through the isolated window or drives the export. In the concurrent phase
/// those two contend for the CPU; that contention is what the phase
/// measures.
pub struct BenchRunner {
    config: BenchConfig,
    printer: BenchPrinter,
}

impl BenchRunner {
    /// Create a runner; color output is auto-detected from the environment.
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            printer: BenchPrinter::auto(),
        }
    }

    /// Run all phases against the store at `path` and return their reports.
    ///
    /// Seeds the dataset only when the file does not exist yet; re-running
    /// against an existing file goes straight to inspection and scanning.
    pub fn run(&self, path: &Path) -> Result<RunSummary> {
        let fresh = !path.exists();
        let store = Arc::new(
            Store::open(path)
                .with_context(|| format!("failed to open store at {}", path.display()))?,
        );

        let seeded = if fresh {
            Some(seed(&store, &self.config).context("seeding failed")?)
        } else {
            tracing::info!("store file exists, skipping seeding");
            None
        };

        let size = inspect(&store).context("store inspection failed")?;
        self.printer.print_size(&size);

        // Warmup: stopped immediately, so the worker runs one iteration that
        // pulls the scanned range into cache. Numbers are not comparable.
        self.printer.print_phase("warmup (ignore)");
        let warmup = self.run_warmup(&store)?;
        self.printer.print_scan(&warmup);

        // Baseline: the worker runs alone for the whole window.
        self.printer.print_phase("scan only");
        let isolated = self.run_isolated(&store)?;
        self.printer.print_scan(&isolated);

        // Interference: the worker races a full consistent export.
        self.printer.print_phase("scan during copy");
        let (concurrent, export) = self.run_concurrent(&store, &mut io::sink())?;
        self.printer.print_export(&export);
        self.printer.print_scan(&concurrent);

        Ok(RunSummary {
            seeded,
            size,
            warmup,
            isolated,
            concurrent,
            export,
        })
    }

    fn run_warmup(&self, store: &Arc<Store>) -> Result<ScanReport> {
        let signal = StopSignal::new();
        let worker = scan::spawn(Arc::clone(store), &self.config, signal.clone());
        signal.request_stop();
        worker.join().context("warmup worker failed")
    }

    fn run_isolated(&self, store: &Arc<Store>) -> Result<ScanReport> {
        let signal = StopSignal::new();
        let worker = scan::spawn(Arc::clone(store), &self.config, signal.clone());
        thread::sleep(self.config.measure_window);
        signal.request_stop();
        worker.join().context("isolated scan worker failed")
    }

    fn run_concurrent<W: io::Write>(
        &self,
        store: &Arc<Store>,
        sink: &mut W,
    ) -> Result<(ScanReport, ExportReport)> {
        let signal = StopSignal::new();
        let worker = scan::spawn(Arc::clone(store), &self.config, signal.clone());

        // The export runs synchronously here; the worker is stopped only
        // after it returns, so the copy's duration spans the worker's whole
        // concurrent window. A failed export still stops and joins the
        // worker before the error surfaces.
        let export = match export_snapshot(store, sink) {
            Ok(export) => export,
            Err(err) => {
                signal.request_stop();
                // The export error is the one reported; a worker failure in
                // the same window still gets logged.
                if let Err(worker_err) = worker.join() {
                    tracing::warn!("concurrent scan worker failed: {}", worker_err);
                }
                return Err(err).context("snapshot export failed");
            }
        };

        signal.request_stop();
        let report = worker.join().context("concurrent scan worker failed")?;
        Ok((report, export))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FailingSink;

    impl io::Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink refused the bytes"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn seeded_store(config: &BenchConfig) -> (TempDir, Arc<Store>) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(&dir.path().join("bench.redb")).unwrap();
        seed(&store, config).unwrap();
        (dir, Arc::new(store))
    }

    #[test]
    fn test_failed_export_stops_the_worker_and_surfaces() {
        let config = BenchConfig {
            item_count: 100,
            batch_size: 10,
            value_size: 64,
            ..BenchConfig::default()
        };
        let (_dir, store) = seeded_store(&config);
        let runner = BenchRunner::new(config);

        // The error path stops and joins the worker before returning, so a
        // return here means no worker thread was left behind.
        let err = runner.run_concurrent(&store, &mut FailingSink).unwrap_err();
        assert!(err.to_string().contains("snapshot export failed"));
    }
}
