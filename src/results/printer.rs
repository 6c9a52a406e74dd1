//! Console reporting for the benchmark phases.

use crate::bench::ScanReport;
use crate::bench::export::ExportReport;
use crate::bench::inspect::StoreSize;
use crate::results::format::{format_bytes, format_duration, format_throughput};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Whether colored output should be used.
///
/// `NO_COLOR` and `FORCE_COLOR` take precedence; otherwise color follows
/// whether stdout is a terminal.
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Formats phase headers and reports on stdout.
///
/// Example output:
/// ```text
/// ------------------------ scan only -------------------------
///   Time (mean):  1.84 ms    (1.62 ms … 4.90 ms)
///   Scans:        1086 iterations, 800000 rows per scan
/// ```
pub struct BenchPrinter {
    color: bool,
}

impl BenchPrinter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Printer with color auto-detected from the environment.
    pub fn auto() -> Self {
        Self::new(supports_color())
    }

    /// Print the dataset size line produced by inspection.
    pub fn print_size(&self, size: &StoreSize) {
        if self.color {
            println!(
                "{}: {} bytes ({} records, {} stored)",
                "size".bold(),
                size.file_bytes,
                size.records,
                format_bytes(size.stored_bytes)
            );
        } else {
            println!(
                "size: {} bytes ({} records, {} stored)",
                size.file_bytes,
                size.records,
                format_bytes(size.stored_bytes)
            );
        }
    }

    /// Print a phase header, visually demarcating the phases.
    pub fn print_phase(&self, name: &str) {
        let title = format!(" {name} ");
        println!();
        if self.color {
            println!("{}", format!("{title:-^60}").cyan().bold());
        } else {
            println!("{title:-^60}");
        }
    }

    /// Print a scan worker's report.
    pub fn print_scan(&self, report: &ScanReport) {
        let mean = format_duration(report.average());
        let min = format_duration(report.min);
        let max = format_duration(report.max);

        if self.color {
            println!(
                "  {} ({}):  {}    ({} … {})",
                "Time".bold(),
                "mean".cyan(),
                mean.cyan(),
                min.green(),
                max.yellow()
            );
            println!(
                "  {}:        {} iterations, {} rows per scan",
                "Scans".bold(),
                report.iterations,
                report.rows
            );
        } else {
            println!("  Time (mean):  {mean}    ({min} … {max})");
            println!(
                "  Scans:        {} iterations, {} rows per scan",
                report.iterations, report.rows
            );
        }
    }

    /// Print the snapshot export's report.
    pub fn print_export(&self, report: &ExportReport) {
        let duration = format_duration(report.duration);
        let volume = format_bytes(report.bytes);
        let rate = if report.duration.as_secs_f64() > 0.0 {
            format_throughput(report.bytes as f64 / report.duration.as_secs_f64())
        } else {
            "-".to_string()
        };

        if self.color {
            println!(
                "  {}:         {}    ({volume} at {rate}, {} records)",
                "Copy".bold(),
                duration.cyan(),
                report.records
            );
        } else {
            println!(
                "  Copy:         {duration}    ({volume} at {rate}, {} records)",
                report.records
            );
        }
    }
}
