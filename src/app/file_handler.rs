//! File system helpers: board path validation and log writer setup.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError};
use std::path::{Path, PathBuf};

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `board_file_path` exists and is a regular file, returning it as a `&str`.
///
/// # Errors
/// `AppError::General` if the path is missing or not a file,
/// `AppError::InvalidPath` if it is not valid UTF-8.
pub fn validate_board_file(board_file_path: &PathBuf, quiet_mode: bool) -> Result<&str, AppError> {
    if !board_file_path.exists() {
        let error_msg = format!("File not found: {}", board_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !board_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", board_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }

    board_file_path
        .to_str()
        .ok_or_else(|| AppError::InvalidPath(board_file_path.display().to_string()))
}

/// Opens (truncating) the per-cell breakdown log.
///
/// The writer is flushed by the caller once the breakdown is written, or on drop.
pub fn init_breakdown_log_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Overwrite the breakdown each run.
        .open(file_path)?;
    Ok(BufWriter::new(file))
}
