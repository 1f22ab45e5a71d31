//! Dual-projection voxel synthesis.
//!
//! Given two target silhouettes, one for the `x = 0` face and one for the
//! `y = 0` face, this crate carves a solid block so that sampling each face
//! reproduces its pattern, keeping the rest of the volume solid.
//!
//! # Features
//!
//! - **Projection**: Sample a face of an [`OccupancyGrid`](voxel_types::OccupancyGrid)
//! - **Verification**: Compare both projections against their patterns
//! - **Synthesis**: Carve, verify and run a single two-phase repair pass
//! - **Conflict reporting**: Shared-edge voxels the two patterns disagree on
//! - **Presets**: The `S`/`A` letter patterns of the 6x6x8 logo block
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
//! ```
//! use voxel_carve::{presets, synthesize, SynthesisParams};
//!
//! let result = synthesize(
//!     &presets::letter_s(),
//!     &presets::letter_a(),
//!     &SynthesisParams::default(),
//! )
//! .unwrap();
//!
//! // The letters disagree on the shared edge, so one face always loses there.
//! assert!(!result.is_exact());
//! assert_eq!(result.conflicts.len(), 4);
//! println!("{result}");
//! ```
//!
//! # Shared-Edge Conflicts
//!
//! Voxels at `x = 0, y = 0` are sampled by both projections. Where the
//! patterns disagree, the repair pass keeps whichever value was written last
//! and the losing face's match flag stays `false`. Callers that need an exact
//! result should use [`Synthesis::into_exact`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod params;
pub mod presets;
mod project;
mod result;
mod synth;

// Re-export main types and functions
pub use error::{CarveError, CarveResult};
pub use params::SynthesisParams;
pub use project::{Mismatch, Verification, compare, project, verify};
pub use result::Synthesis;
pub use synth::{
    ConflictCell, RepairLog, SynthesisStage, VoxelFix, carve, find_conflicts, repair, synthesize,
};
