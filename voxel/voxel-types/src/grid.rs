//! Dense occupancy grid.

use crate::error::{VoxelError, VoxelResult};
use crate::voxel::VoxelCoord;

/// Extent of a dense grid along each axis.
///
/// Every extent is positive and the voxel count fits in a `usize`.
///
/// # Example
///
/// ```
/// use voxel_types::Dimensions;
///
/// let dims = Dimensions::try_new(6, 6, 8).unwrap();
/// assert_eq!(dims.volume(), 288);
///
/// assert!(Dimensions::try_new(0, 6, 8).is_err());
/// assert!(Dimensions::try_new(usize::MAX, 2, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DimensionsRepr")
)]
pub struct Dimensions {
    width: usize,
    depth: usize,
    height: usize,
}

impl Dimensions {
    /// Creates dimensions, rejecting any zero extent.
    ///
    /// # Errors
    ///
    /// Returns [`VoxelError::InvalidDimensions`] if any extent is zero and
    /// [`VoxelError::VolumeOverflow`] if the voxel count overflows `usize`.
    pub const fn try_new(width: usize, depth: usize, height: usize) -> VoxelResult<Self> {
        if width == 0 || depth == 0 || height == 0 {
            return Err(VoxelError::InvalidDimensions {
                width,
                depth,
                height,
            });
        }
        if checked_volume(width, depth, height).is_none() {
            return Err(VoxelError::VolumeOverflow {
                width,
                depth,
                height,
            });
        }
        Ok(Self {
            width,
            depth,
            height,
        })
    }

    /// Number of voxels along x.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of voxels along y.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Number of voxels along z.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of voxels.
    #[must_use]
    pub const fn volume(&self) -> usize {
        // Checked in `try_new`.
        self.width * self.depth * self.height
    }

    /// Returns `true` if the coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, coord: VoxelCoord) -> bool {
        coord.x < self.width && coord.y < self.depth && coord.z < self.height
    }

    /// Linear index in x-outer, y-middle, z-inner order.
    const fn linear(&self, coord: VoxelCoord) -> usize {
        (coord.x * self.depth + coord.y) * self.height + coord.z
    }
}

const fn checked_volume(width: usize, depth: usize, height: usize) -> Option<usize> {
    match width.checked_mul(depth) {
        Some(area) => area.checked_mul(height),
        None => None,
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DimensionsRepr {
    width: usize,
    depth: usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<DimensionsRepr> for Dimensions {
    type Error = VoxelError;

    fn try_from(repr: DimensionsRepr) -> VoxelResult<Self> {
        Self::try_new(repr.width, repr.depth, repr.height)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.depth, self.height)
    }
}

/// A dense 3D grid of booleans. `true` marks solid material.
///
/// Cells are stored in x-outer, y-middle, z-inner order, which is also the
/// order [`OccupancyGrid::iter`] and [`OccupancyGrid::filled`] visit them in.
///
/// # Example
///
/// ```
/// use voxel_types::{Dimensions, OccupancyGrid, VoxelCoord};
///
/// let dims = Dimensions::try_new(2, 2, 2).unwrap();
/// let mut grid = OccupancyGrid::solid(dims);
/// assert_eq!(grid.filled_count(), 8);
///
/// grid.set(VoxelCoord::new(0, 0, 0), false);
/// assert_eq!(grid.get(VoxelCoord::new(0, 0, 0)), Some(false));
/// assert_eq!(grid.get(VoxelCoord::new(5, 0, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr")
)]
pub struct OccupancyGrid {
    dims: Dimensions,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    dims: Dimensions,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for OccupancyGrid {
    type Error = VoxelError;

    fn try_from(repr: GridRepr) -> VoxelResult<Self> {
        let expected = repr.dims.volume();
        let got = repr.cells.len();
        Self::from_cells(repr.dims, repr.cells)
            .ok_or(VoxelError::CellCountMismatch { expected, got })
    }
}

impl OccupancyGrid {
    /// Creates a grid with every voxel filled.
    #[must_use]
    pub fn solid(dims: Dimensions) -> Self {
        Self::filled_with(dims, true)
    }

    /// Creates a grid with every voxel empty.
    #[must_use]
    pub fn empty(dims: Dimensions) -> Self {
        Self::filled_with(dims, false)
    }

    fn filled_with(dims: Dimensions, value: bool) -> Self {
        Self {
            dims,
            cells: vec![value; dims.volume()],
        }
    }

    /// Builds a grid from cells in x-outer, y-middle, z-inner order.
    ///
    /// Returns `None` if the cell count does not match the dimensions.
    #[must_use]
    pub fn from_cells(dims: Dimensions, cells: Vec<bool>) -> Option<Self> {
        (cells.len() == dims.volume()).then_some(Self { dims, cells })
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Returns all cells in x-outer, y-middle, z-inner order.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Gets the value at a coordinate, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, coord: VoxelCoord) -> Option<bool> {
        if !self.dims.contains(coord) {
            return None;
        }
        self.cells.get(self.dims.linear(coord)).copied()
    }

    /// Sets the value at a coordinate.
    ///
    /// Returns the previous value, or `None` if the coordinate is out of bounds
    /// (in which case nothing is written).
    pub fn set(&mut self, coord: VoxelCoord, value: bool) -> Option<bool> {
        if !self.dims.contains(coord) {
            return None;
        }
        let index = self.dims.linear(coord);
        self.cells
            .get_mut(index)
            .map(|cell| std::mem::replace(cell, value))
    }

    /// Returns `true` if the voxel exists and is filled.
    #[must_use]
    pub fn is_filled(&self, coord: VoxelCoord) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Iterates over every cell in x-outer, y-middle, z-inner order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelCoord, bool)> + '_ {
        let Dimensions { depth, height, .. } = self.dims;
        self.cells.iter().enumerate().map(move |(i, &value)| {
            let z = i % height;
            let y = (i / height) % depth;
            let x = i / (height * depth);
            (VoxelCoord::new(x, y, z), value)
        })
    }

    /// Iterates over filled voxels in x-outer, y-middle, z-inner order.
    pub fn filled(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.iter().filter_map(|(coord, value)| value.then_some(coord))
    }

    /// Number of filled voxels.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    /// Fill statistics for reporting.
    #[must_use]
    pub fn stats(&self) -> GridStats {
        GridStats {
            filled: self.filled_count(),
            total: self.cells.len(),
        }
    }
}

/// Filled/total voxel counts of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridStats {
    /// Number of filled voxels.
    pub filled: usize,
    /// Total number of voxels.
    pub total: usize,
}

impl GridStats {
    /// Percentage of voxels that are filled, `0.0` for an empty grid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fill_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.filled as f64 / self.total as f64 * 100.0
    }
}

impl std::fmt::Display for GridStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} voxels filled ({:.1}%)",
            self.filled,
            self.total,
            self.fill_percentage()
        )
    }
}
