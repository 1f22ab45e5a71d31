//! Inset-cube surface export (Wavefront OBJ).
//!
//! Every filled voxel becomes an independent cube of 8 vertices and 6 quads,
//! inset from its unit cell by a fixed corner offset. Vertices are not shared
//! between neighbouring voxels, so hidden faces between them are kept.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::{Point3, Vector3};
use tracing::debug;
use voxel_types::OccupancyGrid;

use crate::error::{IoError, IoResult};

/// Quads of one cube, as offsets into its 8 vertices.
///
/// Bottom, top, then the four sides.
const CUBE_QUADS: [[u32; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

/// Parameters for surface export.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceParams {
    /// Inset of every cube corner from its unit cell, in voxel units.
    pub corner_offset: f64,
    /// Title written in the first comment line.
    pub title: String,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            corner_offset: 0.05,
            title: "Dual-Projection Voxel Logo".to_string(),
        }
    }
}

impl SurfaceParams {
    /// Set the corner offset.
    #[must_use]
    pub const fn with_corner_offset(mut self, offset: f64) -> Self {
        self.corner_offset = offset;
        self
    }

    /// Set the title comment.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Check the corner offset is finite and in `[0, 0.5)`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidCornerOffset`] otherwise.
    pub fn validate(&self) -> IoResult<()> {
        let offset = self.corner_offset;
        if offset.is_finite() && (0.0..0.5).contains(&offset) {
            Ok(())
        } else {
            Err(IoError::InvalidCornerOffset(offset))
        }
    }
}

/// Quad surface built from filled voxels.
#[derive(Debug, Clone, Default)]
pub struct VoxelSurface {
    /// Cube corners, 8 per voxel.
    pub vertices: Vec<Point3<f64>>,
    /// Quads as 0-based indices into `vertices`, 6 per voxel.
    pub quads: Vec<[u32; 4]>,
}

impl VoxelSurface {
    /// Number of cubes in the surface.
    #[must_use]
    pub fn cube_count(&self) -> usize {
        self.vertices.len() / 8
    }
}

/// Build the inset-cube surface of every filled voxel.
///
/// Voxels are visited in x-outer, y-middle, z-inner order.
///
/// # Errors
///
/// Returns an error if the corner offset is invalid or the vertex count
/// exceeds the `u32` index range.
///
/// # Example
///
/// ```
/// use voxel_io::{build_surface, SurfaceParams};
/// use voxel_types::{Dimensions, OccupancyGrid};
///
/// let grid = OccupancyGrid::solid(Dimensions::try_new(2, 1, 1).unwrap());
/// let surface = build_surface(&grid, &SurfaceParams::default()).unwrap();
/// assert_eq!(surface.vertices.len(), 16);
/// assert_eq!(surface.quads.len(), 12);
/// ```
pub fn build_surface(grid: &OccupancyGrid, params: &SurfaceParams) -> IoResult<VoxelSurface> {
    params.validate()?;
    let o = params.corner_offset;
    let far = 1.0 - o;

    let count = grid.filled_count();
    let mut surface = VoxelSurface {
        vertices: Vec::with_capacity(count * 8),
        quads: Vec::with_capacity(count * 6),
    };

    for coord in grid.filled() {
        let base = u32::try_from(surface.vertices.len())
            .map_err(|_| IoError::invalid_content("too many vertices for OBJ indices"))?;
        let min = coord.to_point();

        for dz in [o, far] {
            for (dx, dy) in [(o, o), (far, o), (far, far), (o, far)] {
                surface.vertices.push(min + Vector3::new(dx, dy, dz));
            }
        }
        for quad in CUBE_QUADS {
            surface.quads.push(quad.map(|i| base + i));
        }
    }

    Ok(surface)
}

/// Render a surface as OBJ text with 1-based face indices.
#[must_use]
pub fn to_obj_string(surface: &VoxelSurface, params: &SurfaceParams) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "# {}", params.title);
    let _ = writeln!(out, "# Generated by voxel-io");
    let _ = writeln!(
        out,
        "# Voxels have inset corners (offset {})\n",
        params.corner_offset
    );

    for (cube, quads) in surface
        .vertices
        .chunks(8)
        .zip(surface.quads.chunks(CUBE_QUADS.len()))
    {
        for v in cube {
            let _ = writeln!(out, "v {} {} {}", v.x, v.y, v.z);
        }
        for q in quads {
            let _ = writeln!(out, "f {} {} {} {}", q[0] + 1, q[1] + 1, q[2] + 1, q[3] + 1);
        }
    }
    out
}

/// Save the inset-cube surface of a grid as an OBJ file.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the file cannot be written.
pub fn save_obj<P: AsRef<Path>>(
    grid: &OccupancyGrid,
    path: P,
    params: &SurfaceParams,
) -> IoResult<()> {
    let path = path.as_ref();
    let surface = build_surface(grid, params)?;
    let file = File::create(path).map_err(|e| IoError::from_open(e, path))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_obj_string(&surface, params).as_bytes())?;
    writer.flush()?;
    debug!(
        path = %path.display(),
        vertices = surface.vertices.len(),
        faces = surface.quads.len(),
        "Wrote OBJ surface"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use voxel_types::{Dimensions, VoxelCoord};

    fn single_voxel_grid(x: usize, y: usize, z: usize) -> OccupancyGrid {
        let mut grid = OccupancyGrid::empty(Dimensions::try_new(3, 3, 3).unwrap());
        grid.set(VoxelCoord::new(x, y, z), true);
        grid
    }

    #[test]
    fn test_cube_vertices_are_inset() {
        let surface = build_surface(&single_voxel_grid(1, 2, 0), &SurfaceParams::default())
            .unwrap();
        assert_eq!(surface.cube_count(), 1);

        let v = &surface.vertices;
        assert_relative_eq!(v[0].x, 1.05);
        assert_relative_eq!(v[0].y, 2.05);
        assert_relative_eq!(v[0].z, 0.05);
        assert_relative_eq!(v[2].x, 1.95);
        assert_relative_eq!(v[2].y, 2.95);
        assert_relative_eq!(v[6].z, 0.95);
        assert_relative_eq!(v[7].x, 1.05);
        assert_relative_eq!(v[7].y, 2.95);
    }

    #[test]
    fn test_indices_advance_by_eight() {
        let grid = OccupancyGrid::solid(Dimensions::try_new(1, 1, 2).unwrap());
        let surface = build_surface(&grid, &SurfaceParams::default()).unwrap();
        assert_eq!(surface.quads[0], [0, 1, 2, 3]);
        assert_eq!(surface.quads[5], [3, 0, 4, 7]);
        assert_eq!(surface.quads[6], [8, 9, 10, 11]);
        assert_eq!(surface.quads[11], [11, 8, 12, 15]);
    }

    #[test]
    fn test_obj_text() {
        let params = SurfaceParams::default().with_title("Test");
        let surface = build_surface(&single_voxel_grid(0, 0, 0), &params).unwrap();
        let obj = to_obj_string(&surface, &params);

        let lines: Vec<&str> = obj.lines().collect();
        assert_eq!(lines[0], "# Test");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "v 0.05 0.05 0.05");
        assert_eq!(lines[5], "v 0.95 0.05 0.05");
        assert_eq!(lines[12], "f 1 2 3 4");
        assert_eq!(lines[13], "f 5 6 7 8");
        assert_eq!(lines[17], "f 4 1 5 8");
        assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
        assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 6);
    }

    #[test]
    fn test_zero_offset_is_unit_cube() {
        let params = SurfaceParams::default().with_corner_offset(0.0);
        let surface = build_surface(&single_voxel_grid(2, 2, 2), &params).unwrap();
        assert_eq!(surface.vertices[0], Point3::new(2.0, 2.0, 2.0));
        assert_eq!(surface.vertices[6], Point3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let grid = single_voxel_grid(0, 0, 0);
        for offset in [-0.1, 0.5, f64::NAN] {
            let params = SurfaceParams::default().with_corner_offset(offset);
            assert!(matches!(
                build_surface(&grid, &params),
                Err(IoError::InvalidCornerOffset(_))
            ));
        }
    }

    #[test]
    fn test_empty_grid_has_header_only() {
        let grid = OccupancyGrid::empty(Dimensions::try_new(2, 2, 2).unwrap());
        let params = SurfaceParams::default();
        let obj = to_obj_string(&build_surface(&grid, &params).unwrap(), &params);
        assert_eq!(obj.lines().count(), 4);
    }

    #[test]
    fn test_save_obj() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.obj");
        let grid = OccupancyGrid::solid(Dimensions::try_new(2, 2, 2).unwrap());
        save_obj(&grid, &path, &SurfaceParams::default()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 64);
        assert!(text.contains("f 57 58 59 60"));
    }
}
