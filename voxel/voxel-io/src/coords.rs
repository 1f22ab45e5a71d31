//! Coordinate list format (`_coords.txt`).
//!
//! One `x, y, z` line per filled voxel, in x-outer, y-middle, z-inner order,
//! preceded by a `#` comment header.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;
use voxel_types::{Dimensions, OccupancyGrid, VoxelCoord};

use crate::error::{IoError, IoResult};

/// Header line written before the coordinates.
pub const COORDS_HEADER: &str = "# Voxel coordinates (x, y, z)";

/// Render the coordinate list of a grid.
///
/// # Example
///
/// ```
/// use voxel_io::to_coords_string;
/// use voxel_types::{Dimensions, OccupancyGrid};
///
/// let grid = OccupancyGrid::solid(Dimensions::try_new(1, 1, 2).unwrap());
/// assert_eq!(
///     to_coords_string(&grid),
///     "# Voxel coordinates (x, y, z)\n0, 0, 0\n0, 0, 1\n"
/// );
/// ```
#[must_use]
pub fn to_coords_string(grid: &OccupancyGrid) -> String {
    let mut out = String::with_capacity(COORDS_HEADER.len() + 1 + grid.filled_count() * 10);
    out.push_str(COORDS_HEADER);
    out.push('\n');
    for coord in grid.filled() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{coord}");
    }
    out
}

/// Parse a coordinate list into voxel coordinates, in file order.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an error for malformed lines or repeated coordinates.
pub fn parse_coords(text: &str) -> IoResult<Vec<VoxelCoord>> {
    Ok(parse_numbered(text)?
        .into_iter()
        .map(|(_, coord)| coord)
        .collect())
}

fn parse_numbered(text: &str) -> IoResult<Vec<(usize, VoxelCoord)>> {
    let mut seen = HashSet::new();
    let mut coords = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_number = index + 1;
        let coord = parse_line(line, line_number)?;
        if !seen.insert(coord) {
            return Err(IoError::DuplicateVoxel {
                coord,
                line: line_number,
            });
        }
        coords.push((line_number, coord));
    }
    Ok(coords)
}

fn parse_line(line: &str, line_number: usize) -> IoResult<VoxelCoord> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(IoError::invalid_content(format!(
            "line {line_number}: expected 3 comma-separated integers, got {line:?}"
        )));
    };
    Ok(VoxelCoord::new(x.parse()?, y.parse()?, z.parse()?))
}

/// Rebuild a grid of the given dimensions from a coordinate list.
///
/// Listed voxels are filled, every other voxel is empty.
///
/// # Errors
///
/// Returns an error for malformed lines, duplicates or voxels outside the grid.
pub fn grid_from_coords(text: &str, dims: Dimensions) -> IoResult<OccupancyGrid> {
    let mut grid = OccupancyGrid::empty(dims);
    for (line, coord) in parse_numbered(text)? {
        if grid.set(coord, true).is_none() {
            return Err(IoError::OutOfBounds {
                coord,
                line,
                dimensions: dims,
            });
        }
    }
    Ok(grid)
}

/// Save the coordinate list of a grid.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_coords<P: AsRef<Path>>(grid: &OccupancyGrid, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| IoError::from_open(e, path))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_coords_string(grid).as_bytes())?;
    writer.flush()?;
    debug!(path = %path.display(), voxels = grid.filled_count(), "Wrote coordinate list");
    Ok(())
}

/// Load a coordinate list into a grid of the given dimensions.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is invalid.
pub fn load_coords<P: AsRef<Path>>(path: P, dims: Dimensions) -> IoResult<OccupancyGrid> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
    let mut text = String::new();
    for line in BufReader::new(file).lines() {
        text.push_str(&line?);
        text.push('\n');
    }
    grid_from_coords(&text, dims)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn dims() -> Dimensions {
        Dimensions::try_new(2, 3, 2).unwrap()
    }

    #[test]
    fn test_output_order_and_format() {
        let mut grid = OccupancyGrid::empty(dims());
        grid.set(VoxelCoord::new(1, 0, 0), true);
        grid.set(VoxelCoord::new(0, 2, 1), true);
        grid.set(VoxelCoord::new(0, 0, 1), true);
        let text = to_coords_string(&grid);
        assert_eq!(
            text,
            "# Voxel coordinates (x, y, z)\n0, 0, 1\n0, 2, 1\n1, 0, 0\n"
        );
    }

    #[test]
    fn test_empty_grid_has_only_header() {
        let text = to_coords_string(&OccupancyGrid::empty(dims()));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_parse_skips_comments() {
        let coords = parse_coords("# header\n\n1, 2, 3\n  4,5,6  \n").unwrap();
        assert_eq!(coords, vec![VoxelCoord::new(1, 2, 3), VoxelCoord::new(4, 5, 6)]);
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let err = parse_coords("1, 1, 1\n0, 0, 0\n1, 1, 1\n").unwrap_err();
        assert!(matches!(err, IoError::DuplicateVoxel { line: 3, .. }));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            parse_coords("1, 2\n"),
            Err(IoError::InvalidContent { .. })
        ));
        assert!(matches!(
            parse_coords("1, 2, z\n"),
            Err(IoError::ParseInt(_))
        ));
        assert!(matches!(
            parse_coords("-1, 0, 0\n"),
            Err(IoError::ParseInt(_))
        ));
    }

    #[test]
    fn test_grid_from_coords_out_of_bounds() {
        let err = grid_from_coords("0, 0, 0\n5, 0, 0\n", dims()).unwrap_err();
        assert!(matches!(err, IoError::OutOfBounds { line: 2, .. }));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid_coords.txt");
        let mut grid = OccupancyGrid::solid(dims());
        grid.set(VoxelCoord::new(1, 2, 0), false);
        save_coords(&grid, &path).unwrap();
        assert_eq!(load_coords(&path, dims()).unwrap(), grid);
    }
}
