//! Bright Star Catalog processing tool
//!
//! Reads a JSON catalog of star records and prints the compact star table
//! used by the star-field renderer.
//!
//! Usage:
//!   cargo run --bin process_bsc -- path/to/bsc.json > bsc.table
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` for stage summaries.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use brightstar::{process_file, ConverterConfig};
use clap::Parser;
use log::{debug, error};

/// Bright Star Catalog processing tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts a Bright Star Catalog JSON file into a [ra,dec,class,mag] star table",
    long_about = None
)]
struct Args {
    /// Catalog file to convert (JSON array, optionally .gz compressed)
    catalog: PathBuf,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConverterConfig::default();
    let table = process_file(&args.catalog, &config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", table)?;
    handle.flush()?;

    debug!("Wrote star table for {}", args.catalog.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Failed to convert {}", args.catalog.display());
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
