// counter module
mod counter;
// presets module
mod presets;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use counter::{Board, Cell, CounterConfig, Delta, PathCounter, Position};
pub use presets::{reference_board, vowel_set, Preset, KNIGHT_MOVE_DELTAS, VOWELS};
