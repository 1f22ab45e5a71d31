//! Raw grid format (`.vgrid`).
//!
//! A compact, dimension-tagged binary dump of an occupancy grid that reloads
//! bit-exactly.
//!
//! # Layout
//!
//! | Offset | Size | Content |
//! |--------|------|---------|
//! | 0 | 4 | Magic `VGRD` |
//! | 4 | 1 | Version (`1`) |
//! | 5 | 12 | Width, depth, height as little-endian `u32` |
//! | 17 | `ceil(W*D*H / 8)` | Occupancy bits, x-outer / y-middle / z-inner, LSB first |

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;
use voxel_types::{Dimensions, OccupancyGrid};

use crate::error::{IoError, IoResult};

/// File magic.
pub const RAW_MAGIC: [u8; 4] = *b"VGRD";

/// Current format version.
pub const RAW_VERSION: u8 = 1;

const HEADER_LEN: usize = 17;

/// Encode a grid into the raw format.
///
/// # Errors
///
/// Returns [`IoError::InvalidHeader`] if a dimension does not fit in a `u32`.
///
/// # Example
///
/// ```
/// use voxel_io::{from_raw_bytes, to_raw_bytes};
/// use voxel_types::{Dimensions, OccupancyGrid};
///
/// let grid = OccupancyGrid::solid(Dimensions::try_new(2, 2, 3).unwrap());
/// let bytes = to_raw_bytes(&grid).unwrap();
/// assert_eq!(bytes.len(), 17 + 2);
/// assert_eq!(from_raw_bytes(&bytes).unwrap(), grid);
/// ```
pub fn to_raw_bytes(grid: &OccupancyGrid) -> IoResult<Vec<u8>> {
    let dims = grid.dimensions();
    let payload_len = payload_len(dims);
    let mut bytes = Vec::with_capacity(HEADER_LEN + payload_len);

    bytes.extend_from_slice(&RAW_MAGIC);
    bytes.push(RAW_VERSION);
    for extent in [dims.width(), dims.depth(), dims.height()] {
        let extent = u32::try_from(extent)
            .map_err(|_| IoError::invalid_header(format!("dimension {extent} exceeds u32")))?;
        bytes.extend_from_slice(&extent.to_le_bytes());
    }

    let mut payload = vec![0u8; payload_len];
    for (i, _) in grid.cells().iter().enumerate().filter(|(_, filled)| **filled) {
        payload[i / 8] |= 1 << (i % 8);
    }
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode a grid from the raw format.
///
/// # Errors
///
/// Returns an error if the magic, version or dimensions are invalid, or if the
/// payload length does not match the dimensions.
pub fn from_raw_bytes(bytes: &[u8]) -> IoResult<OccupancyGrid> {
    if bytes.len() < HEADER_LEN {
        return Err(IoError::invalid_header(format!(
            "expected at least {HEADER_LEN} bytes, got {}",
            bytes.len()
        )));
    }
    if bytes[..4] != RAW_MAGIC {
        return Err(IoError::invalid_header("bad magic"));
    }
    if bytes[4] != RAW_VERSION {
        return Err(IoError::invalid_header(format!(
            "unsupported version {}",
            bytes[4]
        )));
    }

    let read_u32 = |offset: usize| -> usize {
        let mut word = [0u8; 4];
        word.copy_from_slice(&bytes[offset..offset + 4]);
        u32::from_le_bytes(word) as usize
    };
    let dims = Dimensions::try_new(read_u32(5), read_u32(9), read_u32(13))
        .map_err(|e| IoError::invalid_header(e.to_string()))?;

    let payload = &bytes[HEADER_LEN..];
    let expected = payload_len(dims);
    if payload.len() != expected {
        return Err(IoError::DimensionMismatch {
            dimensions: dims,
            expected,
            got: payload.len(),
        });
    }

    let cells = (0..dims.volume())
        .map(|i| payload[i / 8] & (1 << (i % 8)) != 0)
        .collect();
    OccupancyGrid::from_cells(dims, cells)
        .ok_or_else(|| IoError::invalid_content("cell count does not match dimensions"))
}

/// Save a grid to a raw `.vgrid` file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_raw<P: AsRef<Path>>(grid: &OccupancyGrid, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let bytes = to_raw_bytes(grid)?;
    let file = File::create(path).map_err(|e| IoError::from_open(e, path))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    debug!(path = %path.display(), bytes = bytes.len(), "Wrote raw grid");
    Ok(())
}

/// Load a grid from a raw `.vgrid` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid raw grid.
pub fn load_raw<P: AsRef<Path>>(path: P) -> IoResult<OccupancyGrid> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    from_raw_bytes(&bytes)
}

const fn payload_len(dims: Dimensions) -> usize {
    dims.volume().div_ceil(8)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use voxel_types::VoxelCoord;

    fn sample_grid() -> OccupancyGrid {
        let mut grid = OccupancyGrid::solid(Dimensions::try_new(3, 2, 5).unwrap());
        grid.set(VoxelCoord::new(0, 0, 0), false);
        grid.set(VoxelCoord::new(2, 1, 4), false);
        grid.set(VoxelCoord::new(1, 0, 3), false);
        grid
    }

    #[test]
    fn test_header_layout() {
        let bytes = to_raw_bytes(&sample_grid()).unwrap();
        assert_eq!(&bytes[..4], b"VGRD");
        assert_eq!(bytes[4], 1);
        assert_eq!(&bytes[5..9], &3u32.to_le_bytes());
        assert_eq!(&bytes[9..13], &2u32.to_le_bytes());
        assert_eq!(&bytes[13..17], &5u32.to_le_bytes());
        assert_eq!(bytes.len(), 17 + 4);
        // First voxel cleared: bit 0 of the first payload byte.
        assert_eq!(bytes[17] & 1, 0);
        assert_eq!(bytes[17] & 2, 2);
    }

    #[test]
    fn test_bytes_roundtrip_is_bit_exact() {
        let grid = sample_grid();
        let back = from_raw_bytes(&to_raw_bytes(&grid).unwrap()).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_rejects_bad_magic_and_version() {
        let mut bytes = to_raw_bytes(&sample_grid()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            from_raw_bytes(&bytes),
            Err(IoError::InvalidHeader { .. })
        ));

        let mut bytes = to_raw_bytes(&sample_grid()).unwrap();
        bytes[4] = 9;
        assert!(matches!(
            from_raw_bytes(&bytes),
            Err(IoError::InvalidHeader { .. })
        ));

        assert!(matches!(
            from_raw_bytes(b"VGRD"),
            Err(IoError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let mut bytes = to_raw_bytes(&sample_grid()).unwrap();
        bytes[5..9].copy_from_slice(&0u32.to_le_bytes());
        assert!(matches!(
            from_raw_bytes(&bytes),
            Err(IoError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        let mut bytes = RAW_MAGIC.to_vec();
        bytes.push(RAW_VERSION);
        for extent in [1u32 << 22, 1 << 22, 1 << 21] {
            bytes.extend_from_slice(&extent.to_le_bytes());
        }
        bytes.extend_from_slice(&[0xff; 8]);

        let err = from_raw_bytes(&bytes).unwrap_err();
        assert!(matches!(err, IoError::InvalidHeader { ref message } if message.contains("overflow")));
    }

    #[test]
    fn test_rejects_truncated_payload() {
        let bytes = to_raw_bytes(&sample_grid()).unwrap();
        let err = from_raw_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(
            err,
            IoError::DimensionMismatch {
                expected: 4,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.vgrid");
        let grid = sample_grid();
        save_raw(&grid, &path).unwrap();
        assert_eq!(load_raw(&path).unwrap(), grid);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_raw("nonexistent_grid_12345.vgrid");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }
}
