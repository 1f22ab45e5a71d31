//! Error types for projection synthesis.

use thiserror::Error;
use voxel_types::{Face, VoxelError};

use crate::project::Mismatch;

/// Errors that can occur while synthesizing a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CarveError {
    /// A pattern does not fit the face it targets.
    #[error(
        "pattern for face {face} is {rows}x{cols}, expected at most {max_rows} rows of {expected_cols} columns"
    )]
    ShapeMismatch {
        /// Face the pattern targets.
        face: Face,
        /// Rows in the pattern.
        rows: usize,
        /// Columns in the pattern.
        cols: usize,
        /// Grid height.
        max_rows: usize,
        /// Lateral extent of the face.
        expected_cols: usize,
    },

    /// The synthesized grid does not reproduce both patterns.
    #[error("{} projection cell(s) do not match: {}", mismatches.len(), summarize(mismatches))]
    ProjectionMismatch {
        /// Every offending cell.
        mismatches: Vec<Mismatch>,
    },

    /// Invalid grid or pattern construction.
    #[error(transparent)]
    Voxel(#[from] VoxelError),
}

/// Result type for synthesis operations.
pub type CarveResult<T> = std::result::Result<T, CarveError>;

fn summarize(mismatches: &[Mismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CarveError::ShapeMismatch {
            face: Face::Y0,
            rows: 9,
            cols: 6,
            max_rows: 8,
            expected_cols: 6,
        };
        let msg = format!("{err}");
        assert!(msg.contains("y=0"));
        assert!(msg.contains("9x6"));

        let err = CarveError::ProjectionMismatch {
            mismatches: vec![Mismatch {
                face: Face::X0,
                lateral: 0,
                z: 4,
                expected: false,
            }],
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("1 projection cell(s)"));
        assert!(msg.contains("z=4"));
    }
}
