//! Voxel coordinate types.

use nalgebra::Point3;

/// A discrete 3D coordinate inside a dense occupancy grid.
///
/// Coordinates are unsigned: the grid always starts at the origin and the two
/// projection faces are the `x = 0` and `y = 0` planes.
///
/// # Example
///
/// ```
/// use voxel_types::VoxelCoord;
///
/// let coord = VoxelCoord::new(1, 2, 3);
/// assert_eq!(coord.x, 1);
/// assert_eq!(coord.y, 2);
/// assert_eq!(coord.z, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelCoord {
    /// X coordinate (width axis).
    pub x: usize,
    /// Y coordinate (depth axis).
    pub y: usize,
    /// Z coordinate (height axis).
    pub z: usize,
}

impl VoxelCoord {
    /// Creates a new voxel coordinate.
    #[must_use]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Creates a coordinate at the origin (0, 0, 0).
    ///
    /// The origin is the bottom of the shared edge of both projection faces.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the coordinate as an array.
    ///
    /// # Example
    ///
    /// ```
    /// use voxel_types::VoxelCoord;
    ///
    /// let coord = VoxelCoord::new(1, 2, 3);
    /// assert_eq!(coord.as_array(), [1, 2, 3]);
    /// ```
    #[must_use]
    pub const fn as_array(self) -> [usize; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns `true` if this voxel lies on both projection faces.
    ///
    /// Voxels with `x == 0 && y == 0` are sampled by both face projections and
    /// are therefore constrained by both target patterns.
    ///
    /// # Example
    ///
    /// ```
    /// use voxel_types::VoxelCoord;
    ///
    /// assert!(VoxelCoord::new(0, 0, 5).is_shared_edge());
    /// assert!(!VoxelCoord::new(0, 1, 5).is_shared_edge());
    /// ```
    #[must_use]
    pub const fn is_shared_edge(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Converts to the floating-point position of the voxel's minimum corner.
    ///
    /// # Example
    ///
    /// ```
    /// use voxel_types::VoxelCoord;
    /// use nalgebra::Point3;
    ///
    /// let coord = VoxelCoord::new(1, 2, 3);
    /// assert_eq!(coord.to_point(), Point3::new(1.0, 2.0, 3.0));
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

impl From<(usize, usize, usize)> for VoxelCoord {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[usize; 3]> for VoxelCoord {
    fn from([x, y, z]: [usize; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<VoxelCoord> for [usize; 3] {
    fn from(coord: VoxelCoord) -> Self {
        coord.as_array()
    }
}

impl std::fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let coord = VoxelCoord::new(1, 2, 3);
        assert_eq!(coord.as_array(), [1, 2, 3]);
    }

    #[test]
    fn test_origin_is_shared_edge() {
        assert!(VoxelCoord::origin().is_shared_edge());
        assert!(VoxelCoord::new(0, 0, 7).is_shared_edge());
        assert!(!VoxelCoord::new(1, 0, 0).is_shared_edge());
    }

    #[test]
    fn test_to_point() {
        let point = VoxelCoord::new(4, 5, 6).to_point();
        assert_eq!(point.x, 4.0);
        assert_eq!(point.y, 5.0);
        assert_eq!(point.z, 6.0);
    }

    #[test]
    fn test_conversions() {
        let coord: VoxelCoord = (1, 2, 3).into();
        assert_eq!(coord, VoxelCoord::new(1, 2, 3));
        let coord: VoxelCoord = [4, 5, 6].into();
        let array: [usize; 3] = coord.into();
        assert_eq!(array, [4, 5, 6]);
    }

    #[test]
    fn test_display_matches_coordinate_list_line() {
        assert_eq!(VoxelCoord::new(0, 5, 7).to_string(), "0, 5, 7");
    }

    #[test]
    fn test_ordering_is_x_major() {
        let mut coords = vec![
            VoxelCoord::new(1, 0, 0),
            VoxelCoord::new(0, 1, 0),
            VoxelCoord::new(0, 0, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                VoxelCoord::new(0, 0, 1),
                VoxelCoord::new(0, 1, 0),
                VoxelCoord::new(1, 0, 0),
            ]
        );
    }
}
