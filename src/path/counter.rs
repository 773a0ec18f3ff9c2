// counter.rs
// ──────────────────────────────────────────────────────────────────────────────
// Exhaustive depth-first count of fixed-length move paths over a board of
// optional symbols. A path dies the moment the number of restricted cells it
// has landed on reaches the configured threshold.
//
// Every recursive call receives its own move count and restricted-hit count by
// value, so there is nothing to undo when a branch returns.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::HashSet;
use std::fmt;
use std::ops::Add;

/// A board cell: either a symbol or empty.
pub type Cell = Option<String>;

/// A board is a list of rows. Rows are bounds-checked individually.
pub type Board = Vec<Vec<Cell>>;

/// A (row, column) coordinate. May lie outside the board until validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A relative move, e.g. one of the eight knight jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub drow: isize,
    pub dcol: isize,
}

impl Delta {
    pub const fn new(drow: isize, dcol: isize) -> Self {
        Self { drow, dcol }
    }
}

impl Add<Delta> for Position {
    type Output = Position;

    fn add(self, delta: Delta) -> Position {
        Position::new(self.row + delta.drow, self.col + delta.dcol)
    }
}

/// Construction parameters for a [`PathCounter`]. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    pub board: Board,
    pub move_deltas: Vec<Delta>,
    pub restricted_characters: HashSet<String>,
    /// Number of moves in a complete path (a path visits `max_moves + 1` cells).
    pub max_moves: usize,
    /// A path is void as soon as its restricted-hit count equals this value.
    pub max_restricted_characters: usize,
}

/// Counts restricted-budget knight paths over a fixed board.
///
/// The configuration never changes after construction, so [`PathCounter::solve`]
/// can be called any number of times with the same result.
#[derive(Debug, Clone)]
pub struct PathCounter {
    config: CounterConfig,
}

impl PathCounter {
    /// Wraps the configuration as-is. Malformed boards are not rejected; they
    /// simply have fewer (or no) valid starting cells.
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Sums the path counts of every valid starting cell.
    pub fn solve(&self) -> u64 {
        self.starting_cells()
            .map(|start| self.count_paths(start, 0, 0))
            .sum()
    }

    /// Per-starting-cell path counts in row-major order, valid cells only.
    pub fn solve_by_cell(&self) -> Vec<(Position, u64)> {
        self.starting_cells()
            .map(|start| (start, self.count_paths(start, 0, 0)))
            .collect()
    }

    /// Number of cells a path may start from.
    pub fn valid_cell_count(&self) -> usize {
        self.starting_cells().count()
    }

    /// True iff `position` is on the board and its cell holds a symbol.
    pub fn is_valid_position(&self, position: Position) -> bool {
        self.symbol_at(position).is_some()
    }

    /// Plain coordinate addition; the result may be off the board.
    pub fn next_position(&self, position: Position, delta: Delta) -> Position {
        position + delta
    }

    /// True iff the symbol at `position` is restricted.
    ///
    /// # Panics
    /// `position` must already satisfy [`PathCounter::is_valid_position`].
    pub fn is_restricted_cell(&self, position: Position) -> bool {
        match self.symbol_at(position) {
            Some(symbol) => self.config.restricted_characters.contains(symbol),
            None => unreachable!("restricted check on invalid position {}", position),
        }
    }

    /// Number of paths of the configured length continuing from `position`,
    /// given the moves made and restricted cells hit before arriving here.
    pub fn count_paths(&self, position: Position, moves_so_far: usize, restricted_hits: usize) -> u64 {
        let restricted_hits = if self.is_restricted_cell(position) {
            restricted_hits + 1
        } else {
            restricted_hits
        };

        // Equality, not `>`: the path is void the moment the threshold is reached.
        if restricted_hits == self.config.max_restricted_characters {
            return 0;
        }
        if moves_so_far == self.config.max_moves {
            return 1;
        }

        let mut total_paths = 0;
        for &delta in &self.config.move_deltas {
            let next = self.next_position(position, delta);
            if self.is_valid_position(next) {
                total_paths += self.count_paths(next, moves_so_far + 1, restricted_hits);
            }
        }
        total_paths
    }

    /// Row-major walk over every coordinate, keeping only valid cells.
    fn starting_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.config
            .board
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                (0..cells.len()).map(move |col| Position::new(row as isize, col as isize))
            })
            .filter(move |&position| self.is_valid_position(position))
    }

    fn symbol_at(&self, position: Position) -> Option<&str> {
        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        self.config.board.get(row)?.get(col)?.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{reference_board, Preset, KNIGHT_MOVE_DELTAS};

    fn board(rows: &[&[Option<&str>]]) -> Board {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.map(str::to_string)).collect())
            .collect()
    }

    fn knight_counter(board: Board, max_moves: usize, max_restricted: usize) -> PathCounter {
        PathCounter::new(CounterConfig {
            board,
            move_deltas: KNIGHT_MOVE_DELTAS.to_vec(),
            restricted_characters: ["a", "e"].iter().map(|s| s.to_string()).collect(),
            max_moves,
            max_restricted_characters: max_restricted,
        })
    }

    #[test]
    fn valid_position_checks_bounds_and_emptiness() {
        let counter = knight_counter(board(&[&[Some("b"), None], &[Some("c")]]), 1, 1);
        assert!(counter.is_valid_position(Position::new(0, 0)));
        assert!(!counter.is_valid_position(Position::new(0, 1)));
        assert!(counter.is_valid_position(Position::new(1, 0)));
        // Second row is shorter than the first.
        assert!(!counter.is_valid_position(Position::new(1, 1)));
        assert!(!counter.is_valid_position(Position::new(-1, 0)));
        assert!(!counter.is_valid_position(Position::new(0, -1)));
        assert!(!counter.is_valid_position(Position::new(2, 0)));
    }

    #[test]
    fn next_position_may_leave_the_board() {
        let counter = knight_counter(board(&[&[Some("b")]]), 0, 1);
        let next = counter.next_position(Position::new(0, 0), Delta::new(-2, 1));
        assert_eq!(next, Position::new(-2, 1));
        assert!(!counter.is_valid_position(next));
    }

    #[test]
    fn restricted_cell_uses_symbol_set() {
        let counter = knight_counter(board(&[&[Some("a"), Some("b")]]), 0, 1);
        assert!(counter.is_restricted_cell(Position::new(0, 0)));
        assert!(!counter.is_restricted_cell(Position::new(0, 1)));
    }

    #[test]
    #[should_panic]
    fn restricted_check_on_empty_cell_panics() {
        let counter = knight_counter(board(&[&[None]]), 0, 1);
        counter.is_restricted_cell(Position::new(0, 0));
    }

    #[test]
    fn single_cell_scenarios() {
        assert_eq!(knight_counter(board(&[&[Some("a")]]), 0, 1).solve(), 0);
        assert_eq!(knight_counter(board(&[&[Some("b")]]), 0, 1).solve(), 1);
    }

    #[test]
    fn stuck_path_contributes_nothing() {
        // No knight move exists on a 1x1 board.
        assert_eq!(knight_counter(board(&[&[Some("b")]]), 1, 1).solve(), 0);
    }

    #[test]
    fn full_three_by_three_one_move() {
        let row: &[Option<&str>] = &[Some("b"), Some("c"), Some("d")];
        let counter = knight_counter(board(&[row, row, row]), 1, 1);
        // Eight rim cells have two knight moves each; the centre has none.
        assert_eq!(counter.solve(), 16);
        let breakdown = counter.solve_by_cell();
        assert_eq!(breakdown.len(), 9);
        assert_eq!(breakdown[4], (Position::new(1, 1), 0));
        assert_eq!(breakdown[0], (Position::new(0, 0), 2));
    }

    #[test]
    fn count_paths_does_not_share_hit_counts_between_branches() {
        // From the corner 'b' the knight can reach 'a' at (1,2) or 'c' at (2,1).
        let counter = knight_counter(
            board(&[
                &[Some("b"), None, None],
                &[None, None, Some("a")],
                &[None, Some("c"), None],
            ]),
            1,
            1,
        );
        // Landing on 'a' voids that branch only.
        assert_eq!(counter.count_paths(Position::new(0, 0), 0, 0), 1);
    }

    #[test]
    fn zero_threshold_keeps_only_restricted_starts() {
        let counter = knight_counter(board(&[&[Some("a"), Some("b")]]), 0, 0);
        assert_eq!(counter.solve(), 1);
    }

    #[test]
    fn solve_is_idempotent_and_matches_breakdown() {
        let counter = Preset::Standard.counter(reference_board());
        let first = counter.solve();
        assert_eq!(first, counter.solve());
        let summed: u64 = counter.solve_by_cell().iter().map(|(_, n)| n).sum();
        assert_eq!(first, summed);
        assert_eq!(counter.valid_cell_count(), 20);
    }
}
