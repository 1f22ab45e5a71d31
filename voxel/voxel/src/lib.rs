//! Dual-projection voxel carving for CortenForge.
//!
//! This umbrella crate re-exports the voxel-* crates behind a single
//! dependency. All of them are Layer 0 (zero Bevy dependencies) and can be
//! used in CLI tools, WASM or servers.
//!
//! # Quick Start
//!
//! ```no_run
//! use voxel::prelude::*;
//!
//! let x0: Pattern = "######\n#.....\n######".parse().unwrap();
//! let y0: Pattern = "######\n#....#\n######".parse().unwrap();
//!
//! let result = synthesize(&x0, &y0, &SynthesisParams::default()).unwrap();
//! println!("{result}");
//! println!("{}", result.projection(Face::X0));
//!
//! export_all(&result.grid, "logo", &SurfaceParams::default()).unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Grids, coordinates, patterns, faces and projections
//! - [`carve`] - Projection, verification and carve-and-repair synthesis
//! - [`io`] - Raw grid, coordinate list and OBJ surface export

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

/// Grids, coordinates, patterns, faces and projections.
pub use voxel_types as types;

/// Projection, verification and carve-and-repair synthesis.
pub use voxel_carve as carve;

/// Raw grid, coordinate list and OBJ surface export.
pub use voxel_io as io;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for voxel carving.
///
/// # Usage
///
/// ```
/// use voxel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use voxel_types::{Dimensions, Face, OccupancyGrid, Pattern, Projection, VoxelCoord};

    // Synthesis
    pub use voxel_carve::{Synthesis, SynthesisParams, project, synthesize, verify};

    // Export
    pub use voxel_io::{ExportFormat, SurfaceParams, export_all, save_grid};
}
