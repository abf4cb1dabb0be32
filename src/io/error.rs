//! Error types for level generation and its collaborators

use std::fmt;
use std::path::PathBuf;

/// Main error type for all level generation operations
#[derive(Debug)]
pub enum LevelError {
    /// No sampled tile satisfied the neighbor constraints of a cell
    ///
    /// Fatal to the whole run: earlier cells are never revisited.
    RetryExhausted {
        /// Row of the cell that could not be filled
        row: usize,
        /// Column of the cell that could not be filled
        col: usize,
        /// Attempts spent on the cell
        attempts: usize,
        /// Seed of the random source driving the run
        seed: u64,
    },

    /// Tile library input is empty or inconsistent
    MalformedLibrary {
        /// Description of what's wrong with the library
        reason: String,
    },

    /// Rendering was requested before every cell was populated
    IncompleteGrid {
        /// Row of the first empty cell
        row: usize,
        /// Column of the first empty cell
        col: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered level image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RetryExhausted {
                row,
                col,
                attempts,
                seed,
            } => {
                write!(
                    f,
                    "No tile fits cell ({row}, {col}) after {attempts} attempts (seed {seed})"
                )
            }
            Self::MalformedLibrary { reason } => {
                write!(f, "Malformed tile library: {reason}")
            }
            Self::IncompleteGrid { row, col } => {
                write!(f, "Grid cell ({row}, {col}) has no tile")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for level generation results
pub type Result<T> = std::result::Result<T, LevelError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LevelError {
    LevelError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed library error
pub fn malformed_library(reason: &impl ToString) -> LevelError {
    LevelError::MalformedLibrary {
        reason: reason.to_string(),
    }
}
