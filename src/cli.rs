//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Read-scan interference benchmark for consistent snapshot copies.
///
/// Seeds the store file on first use, then times three phases: a warmup
/// scan, a free-running isolated scan, and a scan racing a full consistent
/// export of the store. Verbosity is controlled via RUST_LOG.
#[derive(Parser, Debug)]
#[command(name = "copybench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the store file (created and seeded if absent).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}
