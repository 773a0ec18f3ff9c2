use crate::path::Preset;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Counts knight-move paths over a board, voiding paths that land on too many restricted cells.", long_about = None)]
pub struct Cli {
    /// Board file: one row per line, whitespace-separated cells, '.' for empty. Defaults to the built-in 5x5 board.
    #[clap(short, long)]
    pub board: Option<PathBuf>,

    /// Search limits to start from.
    #[clap(short, long, value_enum, default_value_t = Preset::Standard)]
    pub preset: Preset,

    /// Number of moves in a complete path (overrides the preset).
    #[clap(short = 'm', long)]
    pub max_moves: Option<usize>,

    /// Restricted-cell count at which a path is void (overrides the preset).
    #[clap(short = 'r', long)]
    pub max_restricted: Option<usize>,

    /// Restricted symbols, one per character (defaults to the vowels "aeiouy").
    #[clap(long)]
    pub restricted: Option<String>,

    /// Suppress verbose logging, only printing the path count.
    #[clap(short, long)]
    pub quiet: bool,
}
