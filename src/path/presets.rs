//! Fixed knight offsets, the vowel restriction set and the reference board.

use std::collections::HashSet;

use super::counter::{Board, CounterConfig, Delta, PathCounter};

/// The eight knight jumps, in the order the search visits them.
pub const KNIGHT_MOVE_DELTAS: [Delta; 8] = [
    Delta::new(-2, -1),
    Delta::new(-2, 1),
    Delta::new(-1, -2),
    Delta::new(-1, 2),
    Delta::new(1, -2),
    Delta::new(1, 2),
    Delta::new(2, -1),
    Delta::new(2, 1),
];

pub const VOWELS: [&str; 6] = ["a", "e", "i", "o", "u", "y"];

pub fn vowel_set() -> HashSet<String> {
    VOWELS.iter().map(|v| v.to_string()).collect()
}

/// The 5x5 board the tool runs on when no board file is given.
pub fn reference_board() -> Board {
    const ROWS: [[Option<&str>; 5]; 5] = [
        [Some("a"), Some("b"), Some("c"), None, Some("e")],
        [None, Some("g"), Some("h"), Some("i"), Some("j")],
        [Some("k"), Some("l"), None, Some("n"), Some("o")],
        [Some("p"), Some("q"), Some("r"), Some("s"), Some("t")],
        [Some("u"), Some("v"), None, None, Some("y")],
    ];
    ROWS.iter()
        .map(|row| row.iter().map(|cell| cell.map(str::to_string)).collect())
        .collect()
}

/// The two search-limit variants the tool ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Preset {
    /// 9 moves, void at 3 restricted cells.
    #[default]
    Standard,
    /// 10 moves, void at 2 restricted cells.
    Strict,
}

impl Preset {
    pub fn max_moves(self) -> usize {
        match self {
            Preset::Standard => 9,
            Preset::Strict => 10,
        }
    }

    pub fn max_restricted_characters(self) -> usize {
        match self {
            Preset::Standard => 3,
            Preset::Strict => 2,
        }
    }

    /// Knight moves and vowel restrictions over `board` with this preset's limits.
    pub fn config(self, board: Board) -> CounterConfig {
        CounterConfig {
            board,
            move_deltas: KNIGHT_MOVE_DELTAS.to_vec(),
            restricted_characters: vowel_set(),
            max_moves: self.max_moves(),
            max_restricted_characters: self.max_restricted_characters(),
        }
    }

    pub fn counter(self, board: Board) -> PathCounter {
        PathCounter::new(self.config(board))
    }
}
