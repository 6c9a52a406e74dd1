//! Benchmark configuration.

use std::time::Duration;

/// Workload parameters for one benchmark run.
///
/// The defaults reproduce the canonical workload: a 4M-record dataset of
/// 1 KiB payloads, seeded 10,000 records per transaction, with every timed
/// scan covering the leading 20% of the key range. Tests substitute smaller
/// values here instead of touching the phase logic.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of records seeded into the dataset.
    pub item_count: u64,
    /// Records inserted per write transaction during seeding.
    pub batch_size: u64,
    /// Size of each record's opaque payload in bytes.
    pub value_size: usize,
    /// Fraction of the key range covered by each scan iteration.
    pub iterate_pct: f64,
    /// How long the isolated-scan phase runs before being stopped.
    pub measure_window: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            item_count: 4_000_000,
            batch_size: 10_000,
            value_size: 1024,
            iterate_pct: 0.2,
            measure_window: Duration::from_secs(2),
        }
    }
}

impl BenchConfig {
    /// First key index excluded from scans: `floor(item_count * iterate_pct)`.
    ///
    /// Scans count keys strictly below this index's encoding, so each
    /// iteration matches exactly this many records.
    // The cast is the floor; item_count stays far below 2^53 so the f64
    // round-trip is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scan_bound(&self) -> u64 {
        (self.item_count as f64 * self.iterate_pct) as u64
    }
}
