//! Main application orchestrator.
//!
//! Coordinates a single run:
//! 1. Initializes logging (unless quiet).
//! 2. Loads the board from a file or falls back to the built-in board.
//! 3. Builds the counter configuration from the preset and overrides.
//! 4. Counts paths, writing a per-cell breakdown to `cell_counts.log` when verbose.
//! 5. Prints the total to standard output.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::path::PathCounter;
use std::io::Write;
use std::path::Path;

const VERBOSE_LOG_FILE: &str = "knight_paths.log";
const BREAKDOWN_LOG_FILE: &str = "cell_counts.log";

/// Runs the tool for the parsed command line and returns the path count it printed.
///
/// # Errors
/// Returns `AppError` when the board cannot be loaded. A breakdown log that
/// cannot be opened only costs the breakdown; the search itself cannot fail.
pub fn run_app(cli: Cli) -> Result<u64, AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(VERBOSE_LOG_FILE) {
            // Verbose file logging is unavailable, but the count can still be produced.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                VERBOSE_LOG_FILE, e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", VERBOSE_LOG_FILE);
        }
    }

    let result = count(&cli, quiet_mode, Path::new(BREAKDOWN_LOG_FILE));

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }
    if !quiet_mode {
        if let Err(e) = logger::close_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                VERBOSE_LOG_FILE, e
            );
        }
    }

    let total = result?;
    println!("{}", total);
    Ok(total)
}

fn count(cli: &Cli, quiet_mode: bool, breakdown_path: &Path) -> Result<u64, AppError> {
    let board = processing::load_board(cli.board.as_ref(), quiet_mode)?;
    let counter = PathCounter::new(processing::build_config(cli, board));

    if quiet_mode {
        return processing::count_paths(&counter, quiet_mode, None);
    }

    let mut breakdown_writer = match file_handler::init_breakdown_log_writer(breakdown_path) {
        Ok(writer) => writer,
        Err(e) => {
            eprintln!(
                "Warning: Failed to open {}: {}. Per-cell breakdown will be unavailable.",
                breakdown_path.display(),
                e
            );
            verbose_eprintln!(
                quiet_mode,
                "[WARNING] Failed to open {}: {}",
                breakdown_path.display(),
                e
            );
            return processing::count_paths(&counter, quiet_mode, None);
        }
    };
    let total = processing::count_paths(
        &counter,
        quiet_mode,
        Some(&mut breakdown_writer as &mut dyn Write),
    )?;
    breakdown_writer.flush()?;
    verbose_println!(
        quiet_mode,
        "\n[INFO] Per-cell breakdown written to {}",
        breakdown_path.display()
    );
    Ok(total)
}
