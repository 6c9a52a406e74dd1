//! Console result reporting.

pub mod format;
pub mod printer;

pub use format::{format_bytes, format_duration, format_throughput};
pub use printer::{BenchPrinter, supports_color};
