//! Target silhouettes for a projection face.

use std::str::FromStr;

use crate::error::{VoxelError, VoxelResult};

/// Character marking a filled pattern cell.
pub const FILLED_CHAR: char = '#';

/// Character marking an empty (carved) pattern cell.
pub const EMPTY_CHAR: char = '.';

/// A 2D boolean target pattern.
///
/// Row index is the height level `z` (row 0 is `z = 0`), column index is the
/// lateral position along the face. Patterns are immutable once built.
///
/// # Example
///
/// ```
/// use voxel_types::Pattern;
///
/// let pattern: Pattern = "
///     ..##..
///     .#..#.
/// ".parse().unwrap();
///
/// assert_eq!(pattern.rows(), 2);
/// assert_eq!(pattern.cols(), 6);
/// assert_eq!(pattern.get(0, 2), Some(true));
/// assert_eq!(pattern.get(1, 0), Some(false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PatternRepr")
)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PatternRepr {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<PatternRepr> for Pattern {
    type Error = VoxelError;

    fn try_from(repr: PatternRepr) -> VoxelResult<Self> {
        if repr.rows == 0 || repr.cols == 0 {
            return Err(VoxelError::EmptyPattern);
        }
        let got = repr.cells.len();
        match repr.rows.checked_mul(repr.cols) {
            Some(expected) if expected == got => Ok(Self {
                rows: repr.rows,
                cols: repr.cols,
                cells: repr.cells,
            }),
            expected => Err(VoxelError::CellCountMismatch {
                expected: expected.unwrap_or(usize::MAX),
                got,
            }),
        }
    }
}

impl Pattern {
    /// Builds a pattern from rows of booleans.
    ///
    /// # Errors
    ///
    /// Returns [`VoxelError::EmptyPattern`] if there are no cells and
    /// [`VoxelError::RaggedPattern`] if rows differ in length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> VoxelResult<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if cols == 0 {
            return Err(VoxelError::EmptyPattern);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(VoxelError::RaggedPattern {
                    row: index,
                    expected: cols,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Creates a pattern with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`VoxelError::EmptyPattern`] if `rows` or `cols` is zero.
    pub fn uniform(rows: usize, cols: usize, value: bool) -> VoxelResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(VoxelError::EmptyPattern);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        })
    }

    /// Parses `#`/`.` rows, one per line.
    ///
    /// Leading and trailing whitespace on each line is ignored, as are blank lines.
    ///
    /// # Errors
    ///
    /// Returns [`VoxelError::InvalidPatternChar`] for any other character, plus the
    /// errors of [`Pattern::from_rows`].
    pub fn parse(text: &str) -> VoxelResult<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| parse_row(row, line))
            .collect::<VoxelResult<Vec<_>>>()?;
        Self::from_rows(&rows)
    }

    /// Number of rows (height levels).
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (lateral positions).
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Value at row `z`, column `col`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, z: usize, col: usize) -> Option<bool> {
        if z >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(z * self.cols + col).copied()
    }

    /// Returns `true` if the cell exists and is filled.
    #[must_use]
    pub fn is_filled(&self, z: usize, col: usize) -> bool {
        self.get(z, col).unwrap_or(false)
    }

    /// Returns `true` if the cell exists and is empty.
    #[must_use]
    pub fn is_empty_at(&self, z: usize, col: usize) -> bool {
        self.get(z, col) == Some(false)
    }

    /// Row `z` as a slice.
    #[must_use]
    pub fn row(&self, z: usize) -> Option<&[bool]> {
        if z >= self.rows {
            return None;
        }
        self.cells.get(z * self.cols..(z + 1) * self.cols)
    }
}

fn parse_row(row: usize, line: &str) -> VoxelResult<Vec<bool>> {
    line.chars()
        .enumerate()
        .map(|(column, c)| match c {
            FILLED_CHAR => Ok(true),
            EMPTY_CHAR => Ok(false),
            found => Err(VoxelError::InvalidPatternChar { row, column, found }),
        })
        .collect()
}

/// Builds a pattern from a fixed-size array, row 0 first.
///
/// Arrays with no rows or no columns are rejected at compile time:
///
/// ```compile_fail
/// use voxel_types::Pattern;
///
/// let empty: [[bool; 0]; 3] = [[], [], []];
/// let _ = Pattern::from(empty);
/// ```
impl<const R: usize, const C: usize> From<[[bool; C]; R]> for Pattern {
    fn from(rows: [[bool; C]; R]) -> Self {
        const { assert!(R > 0 && C > 0, "pattern array must have cells") };
        Self {
            rows: R,
            cols: C,
            cells: rows.iter().flatten().copied().collect(),
        }
    }
}

impl FromStr for Pattern {
    type Err = VoxelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for z in 0..self.rows {
            for col in 0..self.cols {
                let c = if self.is_filled(z, col) {
                    FILLED_CHAR
                } else {
                    EMPTY_CHAR
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
