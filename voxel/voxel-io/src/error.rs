//! Error types for grid export and reload.

use std::path::PathBuf;
use thiserror::Error;
use voxel_types::{Dimensions, VoxelCoord};

/// Result type for grid I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur during grid I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Unknown file format (unrecognized extension).
    #[error("unknown file format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// Invalid header in a raw grid file.
    #[error("invalid raw grid header: {message}")]
    InvalidHeader {
        /// Description of what was invalid.
        message: String,
    },

    /// Payload size does not agree with the declared dimensions.
    #[error("grid {dimensions} needs {expected} payload bytes, got {got}")]
    DimensionMismatch {
        /// Declared dimensions.
        dimensions: Dimensions,
        /// Expected payload length.
        expected: usize,
        /// Actual payload length.
        got: usize,
    },

    /// A coordinate list names the same voxel twice.
    #[error("duplicate voxel ({coord}) on line {line}")]
    DuplicateVoxel {
        /// The repeated voxel.
        coord: VoxelCoord,
        /// 1-based line number of the repeat.
        line: usize,
    },

    /// A coordinate list names a voxel outside the grid.
    #[error("voxel ({coord}) on line {line} is outside a {dimensions} grid")]
    OutOfBounds {
        /// The offending voxel.
        coord: VoxelCoord,
        /// 1-based line number.
        line: usize,
        /// Grid dimensions.
        dimensions: Dimensions,
    },

    /// Invalid export parameters.
    #[error("invalid corner offset {0}: must be finite and in [0, 0.5)")]
    InvalidCornerOffset(f64),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Create an `InvalidHeader` error with the given message.
    #[must_use]
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Map an open/create failure, turning `NotFound` into [`IoError::FileNotFound`].
    pub(crate) fn from_open(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }
}
