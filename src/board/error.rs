use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for board loading operations.
#[derive(Error, Debug)]
pub enum BoardLoaderError {
    /// Error when reading a file.
    #[error("Failed to read board file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when a cell token is longer than one character.
    #[error("Line {line}: cell '{token}' must be a single character or '.'")]
    InvalidCell { line: usize, token: String },
}
