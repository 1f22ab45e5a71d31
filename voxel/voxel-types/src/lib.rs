//! Core voxel data structures for dual-projection carving.
//!
//! This crate provides the shared vocabulary of the voxel crate family:
//!
//! - [`Dimensions`] - Width, depth and height of a dense grid
//! - [`VoxelCoord`] - Unsigned voxel coordinates
//! - [`OccupancyGrid`] - Dense boolean occupancy grid (`true` = solid)
//! - [`Pattern`] - Target silhouette, indexed by height level and lateral position
//! - [`Face`] and [`Projection`] - The `x = 0` / `y = 0` faces and their sampled silhouettes
//! - [`GridStats`] - Fill statistics
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system** consistent with mesh-types:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! # Example
//!
//! ```
//! use voxel_types::{Dimensions, Face, OccupancyGrid, Pattern};
//!
//! let dims = Dimensions::try_new(6, 6, 8).unwrap();
//! let grid = OccupancyGrid::solid(dims);
//! assert_eq!(grid.filled_count(), 288);
//!
//! let pattern: Pattern = "######\n#.....".parse().unwrap();
//! assert_eq!(pattern.cols(), Face::X0.lateral_extent(dims));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod grid;
mod pattern;
mod projection;
mod voxel;

pub use error::{VoxelError, VoxelResult};
pub use grid::{Dimensions, GridStats, OccupancyGrid};
pub use pattern::{EMPTY_CHAR, FILLED_CHAR, Pattern};
pub use projection::{Face, Projection};
pub use voxel::VoxelCoord;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
