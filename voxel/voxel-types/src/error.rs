//! Error types for voxel grid and pattern construction.

use thiserror::Error;

/// Errors that can occur while building grids or patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VoxelError {
    /// Every grid dimension must be positive.
    #[error("invalid grid dimensions: {width}x{depth}x{height}")]
    InvalidDimensions {
        /// Width (x extent).
        width: usize,
        /// Depth (y extent).
        depth: usize,
        /// Height (z extent).
        height: usize,
    },

    /// The voxel count of the grid does not fit in a `usize`.
    #[error("grid dimensions {width}x{depth}x{height} overflow the voxel count")]
    VolumeOverflow {
        /// Width (x extent).
        width: usize,
        /// Depth (y extent).
        depth: usize,
        /// Height (z extent).
        height: usize,
    },

    /// Stored cells do not match the declared shape.
    #[error("expected {expected} cells, got {got}")]
    CellCountMismatch {
        /// Cell count implied by the shape.
        expected: usize,
        /// Cell count supplied.
        got: usize,
    },

    /// A pattern row has a different length than the first row.
    #[error("pattern row {row} has {got} columns, expected {expected}")]
    RaggedPattern {
        /// Index of the offending row.
        row: usize,
        /// Column count of row 0.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },

    /// A pattern string contains something other than `#` or `.`.
    #[error("unexpected character {found:?} at pattern row {row}, column {column}")]
    InvalidPatternChar {
        /// Row of the character.
        row: usize,
        /// Column of the character.
        column: usize,
        /// The character found.
        found: char,
    },

    /// A pattern has no rows or no columns.
    #[error("pattern has no cells")]
    EmptyPattern,
}

/// Result type for voxel type construction.
pub type VoxelResult<T> = std::result::Result<T, VoxelError>;
