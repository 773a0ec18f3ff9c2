use std::fs;

use super::error::BoardLoaderError;
use crate::path::{Board, Cell};

//─────────────────────────────────────────────────────────────────────────────

/// Token marking an empty cell in a board file.
pub const EMPTY_CELL: &str = ".";

/// Loads a board from a text file.
pub fn load_board_from_file(file_path: &str) -> Result<Board, BoardLoaderError> {
    let file_content =
        fs::read_to_string(file_path).map_err(|e| BoardLoaderError::ReadFile(file_path.into(), e))?;

    parse_board(&file_content)
}

/// Parses board text: one row per non-blank line, whitespace-separated cells,
/// `.` for an empty cell, `#` starting a comment line.
///
/// Every symbol is a single character, matching how restricted symbols are
/// given on the command line. Ragged rows are kept as-is; the counter
/// bounds-checks each row on its own.
pub fn parse_board(text: &str) -> Result<Board, BoardLoaderError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_number, line)| {
            line.split_whitespace()
                .map(|token| parse_cell(line_number, token))
                .collect()
        })
        .collect()
}

fn parse_cell(line: usize, token: &str) -> Result<Cell, BoardLoaderError> {
    if token == EMPTY_CELL {
        return Ok(None);
    }
    if token.chars().count() != 1 {
        return Err(BoardLoaderError::InvalidCell {
            line,
            token: token.to_string(),
        });
    }
    Ok(Some(token.to_string()))
}
