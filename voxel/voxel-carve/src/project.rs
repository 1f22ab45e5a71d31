//! Face projection and pattern comparison.
//!
//! A projection samples exactly one face voxel per `(lateral, z)` cell: the
//! `x = 0` face reads `grid[0, i, z]` and the `y = 0` face reads `grid[i, 0, z]`.

use voxel_types::{Face, OccupancyGrid, Pattern, Projection};

/// Projects a grid onto one face.
///
/// The result has shape `(depth, height)` for [`Face::X0`] and
/// `(width, height)` for [`Face::Y0`].
///
/// # Example
///
/// ```
/// use voxel_carve::project;
/// use voxel_types::{Dimensions, Face, OccupancyGrid, VoxelCoord};
///
/// let dims = Dimensions::try_new(3, 4, 5).unwrap();
/// let mut grid = OccupancyGrid::solid(dims);
/// grid.set(VoxelCoord::new(0, 2, 1), false);
///
/// let projection = project(&grid, Face::X0);
/// assert_eq!(projection.lateral_len(), 4);
/// assert_eq!(projection.get(2, 1), Some(false));
/// ```
#[must_use]
pub fn project(grid: &OccupancyGrid, face: Face) -> Projection {
    let dims = grid.dimensions();
    Projection::from_fn(face, face.lateral_extent(dims), dims.height(), |i, z| {
        grid.is_filled(face.voxel(i, z))
    })
}

/// A projection cell that disagrees with its target pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mismatch {
    /// Face of the offending cell.
    pub face: Face,
    /// Lateral index along the face.
    pub lateral: usize,
    /// Height level.
    pub z: usize,
    /// What the pattern asks for (`true` = filled).
    pub expected: bool,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "face {} at ({}={}, z={}) should be {}",
            self.face,
            self.face.lateral_axis(),
            self.lateral,
            self.z,
            if self.expected { "filled" } else { "empty" }
        )
    }
}

/// Compares the first `rows` levels of a projection against a pattern.
///
/// Pattern row `z`, column `i` corresponds to projection cell `[i, z]`. Levels
/// at or above `rows` (or the projection height) are unconstrained.
#[must_use]
pub fn compare(projection: &Projection, pattern: &Pattern, rows: usize) -> Vec<Mismatch> {
    let rows = rows.min(pattern.rows()).min(projection.height());
    let mut mismatches = Vec::new();
    for z in 0..rows {
        for i in 0..projection.lateral_len() {
            let Some(expected) = pattern.get(z, i) else {
                continue;
            };
            if projection.get(i, z) != Some(expected) {
                mismatches.push(Mismatch {
                    face: projection.face(),
                    lateral: i,
                    z,
                    expected,
                });
            }
        }
    }
    mismatches
}

/// Outcome of comparing both face projections against their patterns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verification {
    /// `x = 0` projection matches its pattern on every constrained cell.
    pub x0_match: bool,
    /// `y = 0` projection matches its pattern on every constrained cell.
    pub y0_match: bool,
    /// Every offending cell, `x = 0` face first.
    pub mismatches: Vec<Mismatch>,
}

impl Verification {
    /// Both faces match.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.x0_match && self.y0_match
    }

    /// Match flag for one face.
    #[must_use]
    pub const fn matches(&self, face: Face) -> bool {
        match face {
            Face::X0 => self.x0_match,
            Face::Y0 => self.y0_match,
        }
    }
}

/// Projects both faces and compares them against their patterns.
///
/// Only levels below `min(pattern rows, grid height)` are checked.
#[must_use]
pub fn verify(grid: &OccupancyGrid, x0_pattern: &Pattern, y0_pattern: &Pattern) -> Verification {
    let height = grid.dimensions().height();
    let x0 = compare(&project(grid, Face::X0), x0_pattern, height);
    let y0 = compare(&project(grid, Face::Y0), y0_pattern, height);

    let mut mismatches = x0;
    let x0_match = mismatches.is_empty();
    let y0_match = y0.is_empty();
    mismatches.extend(y0);

    Verification {
        x0_match,
        y0_match,
        mismatches,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use voxel_types::{Dimensions, VoxelCoord};

    fn dims() -> Dimensions {
        Dimensions::try_new(3, 4, 5).unwrap()
    }

    #[test]
    fn test_project_shapes() {
        let grid = OccupancyGrid::solid(dims());
        let x0 = project(&grid, Face::X0);
        let y0 = project(&grid, Face::Y0);
        assert_eq!((x0.lateral_len(), x0.height()), (4, 5));
        assert_eq!((y0.lateral_len(), y0.height()), (3, 5));
    }

    #[test]
    fn test_project_samples_only_the_face() {
        let mut grid = OccupancyGrid::solid(dims());
        // Interior voxel behind the x=0 face: invisible to both projections.
        grid.set(VoxelCoord::new(1, 1, 0), false);
        grid.set(VoxelCoord::new(2, 0, 3), false);

        let x0 = project(&grid, Face::X0);
        let y0 = project(&grid, Face::Y0);
        assert!((0..4).all(|i| x0.is_filled(i, 0)));
        assert_eq!(y0.get(2, 3), Some(false));
        assert_eq!(y0.get(1, 0), Some(true));
    }

    #[test]
    fn test_shared_edge_appears_in_both() {
        let mut grid = OccupancyGrid::solid(dims());
        grid.set(VoxelCoord::new(0, 0, 2), false);
        assert_eq!(project(&grid, Face::X0).get(0, 2), Some(false));
        assert_eq!(project(&grid, Face::Y0).get(0, 2), Some(false));
    }

    #[test]
    fn test_compare_transposes_indices() {
        let mut grid = OccupancyGrid::solid(dims());
        grid.set(VoxelCoord::new(0, 3, 1), false);
        let pattern: Pattern = "####\n###.".parse().unwrap();
        let mismatches = compare(&project(&grid, Face::X0), &pattern, 5);
        assert!(mismatches.is_empty());

        let pattern: Pattern = "####\n####".parse().unwrap();
        let mismatches = compare(&project(&grid, Face::X0), &pattern, 5);
        assert_eq!(
            mismatches,
            vec![Mismatch {
                face: Face::X0,
                lateral: 3,
                z: 1,
                expected: true
            }]
        );
    }

    #[test]
    fn test_compare_respects_row_limit() {
        let grid = OccupancyGrid::solid(dims());
        let pattern = Pattern::uniform(5, 4, false).unwrap();
        assert_eq!(compare(&project(&grid, Face::X0), &pattern, 2).len(), 8);
        assert!(compare(&project(&grid, Face::X0), &pattern, 0).is_empty());
    }

    #[test]
    fn test_verify_flags() {
        let mut grid = OccupancyGrid::solid(dims());
        grid.set(VoxelCoord::new(2, 0, 0), false);
        let x0 = Pattern::uniform(5, 4, true).unwrap();
        let y0 = Pattern::uniform(5, 3, true).unwrap();

        let verification = verify(&grid, &x0, &y0);
        assert!(verification.x0_match);
        assert!(!verification.y0_match);
        assert!(!verification.is_exact());
        assert!(verification.matches(Face::X0));
        assert_eq!(verification.mismatches.len(), 1);
        assert_eq!(verification.mismatches[0].face, Face::Y0);
    }

    #[test]
    fn test_mismatch_display() {
        let mismatch = Mismatch {
            face: Face::Y0,
            lateral: 2,
            z: 3,
            expected: false,
        };
        assert_eq!(mismatch.to_string(), "face y=0 at (x=2, z=3) should be empty");
    }
}
