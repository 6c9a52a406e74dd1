//! Benchmark phases and their reports.
//!
//! Each phase component returns a plain report value; the runner prints them
//! through `results::BenchPrinter` and bundles them into a `RunSummary` so
//! callers (and tests) can assert on the numbers instead of parsing output.

pub mod export;
pub mod inspect;
pub mod runner;
pub mod scan;
pub mod seed;

pub use export::{ExportReport, export_snapshot};
pub use inspect::{StoreSize, inspect};
pub use runner::BenchRunner;
pub use scan::ScanHandle;
pub use seed::{SeedSummary, seed};

use std::time::Duration;

/// Aggregate of one scan worker run.
///
/// Samples are folded into the aggregate as they arrive; the per-iteration
/// durations themselves are not retained.
#[derive(Debug, Clone, Copy)]
pub struct ScanReport {
    /// Completed iterations; always at least one.
    pub iterations: u32,
    /// Sum of all iteration durations.
    pub total: Duration,
    /// Fastest iteration.
    pub min: Duration,
    /// Slowest iteration.
    pub max: Duration,
    /// Keys matched per iteration, identical across iterations.
    pub rows: u64,
}

impl ScanReport {
    /// Mean iteration latency: total duration over iteration count.
    pub fn average(&self) -> Duration {
        // iterations >= 1: the worker loop always completes one iteration
        // before its first stop poll.
        self.total / self.iterations
    }
}

/// Everything a full run produced, in phase order.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Present only when this run created and seeded the store file.
    pub seeded: Option<SeedSummary>,
    pub size: StoreSize,
    pub warmup: ScanReport,
    pub isolated: ScanReport,
    pub concurrent: ScanReport,
    pub export: ExportReport,
}
