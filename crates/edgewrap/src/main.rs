//! edgewrap: apply a parallel Laplacian edge filter to a PPM (P6) image.
//!
//! Reads the image named by the single command-line argument, filters
//! it across a fixed pool of row-band worker threads, writes the result
//! to `laplacian.ppm` in the working directory, and reports the elapsed
//! filtering time on stdout.
//!
//! # Usage
//!
//! ```text
//! edgewrap <filename>
//! ```
//!
//! Historical surface, preserved deliberately: any argument count other
//! than exactly one prints `Usage ./a.out filename` and exits 0 — a
//! success status, not an error. Fatal I/O and format errors report to
//! stderr and exit 1.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use edgewrap_filter::FilterConfig;

/// Output filename, fixed by the historical driver contract.
const OUTPUT_FILENAME: &str = "laplacian.ppm";

/// Apply a parallel Laplacian edge filter to a PPM (P6) image.
#[derive(Parser)]
#[command(name = "edgewrap", version)]
struct Cli {
    /// Path to the input PPM (P6) image.
    filename: PathBuf,
}

fn main() -> ExitCode {
    // Argument-count quirk, checked before clap so it survives intact:
    // with exactly one argument clap takes over, which keeps `--help`
    // and `--version` working since each arrives as the one argument.
    if std::env::args_os().len() != 2 {
        println!("Usage ./a.out filename");
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();

    let bytes = match std::fs::read(&cli.filename) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.filename.display());
            return ExitCode::FAILURE;
        }
    };

    let input = match edgewrap_ppm::decode(&bytes) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error decoding {}: {e}", cli.filename.display());
            return ExitCode::FAILURE;
        }
    };

    // Time the filtering phase only; file I/O stays outside the window.
    let start = Instant::now();
    let output = edgewrap_filter::filter(&input, &FilterConfig::default());
    let elapsed = start.elapsed();

    let encoded = edgewrap_ppm::encode(&output);
    if let Err(e) = std::fs::write(OUTPUT_FILENAME, &encoded) {
        eprintln!("Error writing {OUTPUT_FILENAME}: {e}");
        return ExitCode::FAILURE;
    }

    println!("Elapsed time: {:.3} seconds", elapsed.as_secs_f64());

    ExitCode::SUCCESS
}
