pub mod error;
mod loader;

pub use error::BoardLoaderError;
pub use loader::{load_board_from_file, parse_board, EMPTY_CELL};
