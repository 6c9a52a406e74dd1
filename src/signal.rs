//! Cooperative stop signaling between the orchestrator and scan workers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One-way stop signal shared between the orchestrator and one scan worker.
///
/// `request_stop` is idempotent and non-blocking; the worker polls
/// `stop_requested` between iterations and always finishes its in-flight
/// iteration before exiting, so cancellation is cooperative and never
/// interrupts a scan mid-transaction. The flag never resets: each benchmark
/// phase constructs a fresh signal for its worker.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the worker to stop after its current iteration.
    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Non-blocking poll, checked by the worker between iterations.
    pub fn stop_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
