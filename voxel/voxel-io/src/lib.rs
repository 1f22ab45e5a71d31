//! Occupancy grid export for CortenForge voxel tools.
//!
//! This crate writes a finished [`OccupancyGrid`] in three formats:
//!
//! - **Raw grid** (`.vgrid`) - Bit-packed, dimension-tagged binary; reloads bit-exactly
//! - **Coordinate list** (`_coords.txt`) - One `x, y, z` line per filled voxel
//! - **Surface** (`.obj`) - One inset cube per filled voxel, as Wavefront OBJ quads
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//!
//! # Example
//!
//! ```no_run
//! use voxel_io::{export_all, SurfaceParams};
//! use voxel_types::{Dimensions, OccupancyGrid};
//!
//! let grid = OccupancyGrid::solid(Dimensions::try_new(6, 6, 8).unwrap());
//! let paths = export_all(&grid, "logo", &SurfaceParams::default()).unwrap();
//! println!("wrote {}", paths.obj.display());
//! ```
//!
//! # Format Detection
//!
//! ```no_run
//! use voxel_io::save_grid;
//! use voxel_types::{Dimensions, OccupancyGrid};
//!
//! let grid = OccupancyGrid::solid(Dimensions::try_new(2, 2, 2).unwrap());
//!
//! // Format detected from the .vgrid extension
//! save_grid(&grid, "block.vgrid").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod coords;
mod error;
mod obj;
mod raw;

pub use coords::{
    COORDS_HEADER, grid_from_coords, load_coords, parse_coords, save_coords, to_coords_string,
};
pub use error::{IoError, IoResult};
pub use obj::{SurfaceParams, VoxelSurface, build_surface, save_obj, to_obj_string};
pub use raw::{RAW_MAGIC, RAW_VERSION, from_raw_bytes, load_raw, save_raw, to_raw_bytes};

use std::path::{Path, PathBuf};

use tracing::info;
use voxel_types::OccupancyGrid;

/// Supported grid export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExportFormat {
    /// Bit-packed raw grid.
    Raw,
    /// Plain-text coordinate list.
    Coords,
    /// Inset-cube OBJ surface.
    Obj,
}

impl ExportFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "vgrid" => Some(Self::Raw),
            "txt" => Some(Self::Coords),
            "obj" => Some(Self::Obj),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Raw => "vgrid",
            Self::Coords => "txt",
            Self::Obj => "obj",
        }
    }
}

/// Save a grid to a file, detecting format from extension.
///
/// OBJ output uses the default [`SurfaceParams`].
///
/// # Errors
///
/// Returns an error if the extension is not recognized or the file cannot be
/// written.
pub fn save_grid<P: AsRef<Path>>(grid: &OccupancyGrid, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path).ok_or_else(|| IoError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        ExportFormat::Raw => save_raw(grid, path),
        ExportFormat::Coords => save_coords(grid, path),
        ExportFormat::Obj => save_obj(grid, path, &SurfaceParams::default()),
    }
}

/// Paths written by [`export_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// Raw grid file.
    pub raw: PathBuf,
    /// Coordinate list file.
    pub coords: PathBuf,
    /// OBJ surface file.
    pub obj: PathBuf,
}

impl ExportPaths {
    /// Paths derived from a base name: `{base}.vgrid`, `{base}_coords.txt`, `{base}.obj`.
    #[must_use]
    pub fn from_base<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref().as_os_str();
        let with_suffix = |suffix: &str| {
            let mut name = base.to_os_string();
            name.push(suffix);
            PathBuf::from(name)
        };
        Self {
            raw: with_suffix(".vgrid"),
            coords: with_suffix("_coords.txt"),
            obj: with_suffix(".obj"),
        }
    }
}

/// Write all three formats next to each other.
///
/// Surface parameters are validated before anything is written.
///
/// # Errors
///
/// Returns the first error encountered. Files written before the failure are
/// left in place.
pub fn export_all<P: AsRef<Path>>(
    grid: &OccupancyGrid,
    base: P,
    params: &SurfaceParams,
) -> IoResult<ExportPaths> {
    params.validate()?;
    let paths = ExportPaths::from_base(base);

    save_raw(grid, &paths.raw)?;
    save_coords(grid, &paths.coords)?;
    save_obj(grid, &paths.obj, params)?;

    info!(
        raw = %paths.raw.display(),
        coords = %paths.coords.display(),
        obj = %paths.obj.display(),
        voxels = grid.filled_count(),
        "Exported grid"
    );
    Ok(paths)
}
