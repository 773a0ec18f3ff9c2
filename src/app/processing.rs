//! Builds the path counter from command-line input and runs the search.

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::verbose_println;
use crate::board;
use crate::path::{self, Board, CounterConfig, PathCounter};

/// Loads the board named on the command line, or the built-in board.
pub fn load_board(board_path: Option<&PathBuf>, quiet_mode: bool) -> Result<Board, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading board...");
    let board = match board_path {
        Some(board_path) => {
            let board_file_str = file_handler::validate_board_file(board_path, quiet_mode)?;
            verbose_println!(quiet_mode, "   => Reading {}", board_path.display());
            board::load_board_from_file(board_file_str)?
        }
        None => {
            verbose_println!(quiet_mode, "   => Using the built-in 5x5 board.");
            path::reference_board()
        }
    };
    verbose_println!(quiet_mode, "   => {} row(s).", board.len());
    Ok(board)
}

/// Combines the preset, explicit overrides and restricted symbols into a config.
pub fn build_config(cli: &Cli, board: Board) -> CounterConfig {
    let mut config = cli.preset.config(board);
    if let Some(max_moves) = cli.max_moves {
        config.max_moves = max_moves;
    }
    if let Some(max_restricted) = cli.max_restricted {
        config.max_restricted_characters = max_restricted;
    }
    if let Some(restricted) = &cli.restricted {
        config.restricted_characters = restricted_symbols(restricted);
    }
    config
}

/// One restricted symbol per character.
pub fn restricted_symbols(chars: &str) -> HashSet<String> {
    chars.chars().map(String::from).collect()
}

/// Runs the full search, logging the parameters and the per-cell breakdown.
///
/// The breakdown is only computed when a log writer is supplied, since it
/// repeats the whole search.
pub fn count_paths(
    counter: &PathCounter,
    quiet_mode: bool,
    breakdown_writer: Option<&mut dyn Write>,
) -> Result<u64, AppError> {
    let config = counter.config();
    verbose_println!(quiet_mode, "[STEP 2] Counting paths...");
    verbose_println!(
        quiet_mode,
        "   max moves: {}, void at {} restricted cell(s), {} move offset(s)",
        config.max_moves,
        config.max_restricted_characters,
        config.move_deltas.len()
    );
    let mut restricted: Vec<&str> = config
        .restricted_characters
        .iter()
        .map(String::as_str)
        .collect();
    restricted.sort_unstable();
    verbose_println!(quiet_mode, "   restricted: {}", restricted.join(" "));
    verbose_println!(
        quiet_mode,
        "   valid starting cells: {}",
        counter.valid_cell_count()
    );

    let total: u64 = match breakdown_writer {
        Some(writer) => {
            let breakdown = counter.solve_by_cell();
            write_breakdown(&breakdown, writer)?;
            breakdown.iter().map(|(_, paths)| paths).sum()
        }
        None => counter.solve(),
    };
    verbose_println!(quiet_mode, "   => {} path(s).", total);
    Ok(total)
}

/// Writes one line per starting cell, then the total.
pub fn write_breakdown(
    breakdown: &[(path::Position, u64)],
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(writer, "=== PATHS PER STARTING CELL ===")?;
    for (position, paths) in breakdown {
        writeln!(writer, "{}: {}", position, paths)?;
    }
    let total: u64 = breakdown.iter().map(|(_, paths)| paths).sum();
    writeln!(writer)?;
    writeln!(writer, "Total: {}", total)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Position, Preset};
    use clap::Parser;

    #[test]
    fn overrides_replace_preset_limits() {
        let cli = Cli::try_parse_from([
            "knight-paths",
            "--preset",
            "strict",
            "-m",
            "2",
            "--restricted",
            "bc",
        ])
        .unwrap();
        let config = build_config(&cli, path::reference_board());
        assert_eq!(config.max_moves, 2);
        assert_eq!(
            config.max_restricted_characters,
            Preset::Strict.max_restricted_characters()
        );
        assert_eq!(config.restricted_characters, restricted_symbols("cb"));
        assert_eq!(config.move_deltas, path::KNIGHT_MOVE_DELTAS.to_vec());
    }

    #[test]
    fn breakdown_lists_cells_and_total() {
        let mut out = Vec::new();
        write_breakdown(
            &[(Position::new(0, 0), 3), (Position::new(1, 2), 4)],
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(0, 0): 3\n"));
        assert!(text.contains("(1, 2): 4\n"));
        assert!(text.ends_with("Total: 7\n"));
    }

    #[test]
    fn count_paths_with_and_without_breakdown_agree() {
        let counter = Preset::Standard.counter(path::reference_board());
        let mut out = Vec::new();
        let with = count_paths(&counter, true, Some(&mut out as &mut dyn Write)).unwrap();
        let without = count_paths(&counter, true, None).unwrap();
        assert_eq!(with, without);
        assert!(!out.is_empty());
    }
}
