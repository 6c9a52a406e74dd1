//! copybench - read-path interference benchmark for consistent snapshot copies.
//!
//! Measures how much a full consistent snapshot export ("copy") running
//! concurrently against an embedded key-value store degrades read-scan
//! latency, compared to scanning with no concurrent copy.
//!
//! A run seeds the store file on first use, reports its size, then times
//! three phases: a throwaway warmup scan, a free-running isolated scan, and
//! a scan racing a full export. Each phase runs exactly one scan worker
//! thread, stopped cooperatively and joined before the next phase begins.

pub mod bench;
pub mod cli;
pub mod config;
pub mod results;
pub mod signal;
pub mod store;
