//! copybench - measures read-scan interference from a concurrent snapshot copy.

use anyhow::{Context, Result};
use clap::Parser;
use copybench::bench::BenchRunner;
use copybench::cli::Cli;
use copybench::config::BenchConfig;
use copybench::results::{format_bytes, supports_color};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set; progress lines default to info since they are
    // the tool's running output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = BenchConfig::default();
    print_banner(&cli.path, &config);

    let runner = BenchRunner::new(config);
    runner.run(&cli.path).context("benchmark run failed")?;

    Ok(())
}

/// Print a compact one-line banner with the workload summary.
fn print_banner(path: &Path, config: &BenchConfig) {
    use owo_colors::OwoColorize;

    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().to_string(),
    );

    println!();
    if supports_color() {
        println!(
            "{}: {name} - {} records of {} each, scan bound {}",
            "copybench".cyan().bold(),
            config.item_count,
            format_bytes(config.value_size as u64),
            config.scan_bound()
        );
    } else {
        println!(
            "copybench: {name} - {} records of {} each, scan bound {}",
            config.item_count,
            format_bytes(config.value_size as u64),
            config.scan_bound()
        );
    }
    println!();
}
