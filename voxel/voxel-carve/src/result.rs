//! Synthesis result types.

use voxel_types::{Face, OccupancyGrid, Projection};

use crate::error::{CarveError, CarveResult};
use crate::params::SynthesisParams;
use crate::project::{Verification, project};
use crate::synth::{ConflictCell, RepairLog, SynthesisStage};

/// Result of [`crate::synthesize`].
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// The synthesized grid.
    pub grid: OccupancyGrid,

    /// Stage the grid ended in.
    pub stage: SynthesisStage,

    /// Final verification of both faces.
    pub verification: Verification,

    /// Verification right after carving, before any repair.
    pub initial: Verification,

    /// Writes made by the repair pass, if it ran.
    pub repair: Option<RepairLog>,

    /// Shared-edge levels where the patterns contradict each other.
    pub conflicts: Vec<ConflictCell>,

    /// Parameters used.
    pub params: SynthesisParams,
}

impl Synthesis {
    /// `x = 0` projection matches its pattern.
    #[must_use]
    pub const fn x0_match(&self) -> bool {
        self.verification.x0_match
    }

    /// `y = 0` projection matches its pattern.
    #[must_use]
    pub const fn y0_match(&self) -> bool {
        self.verification.y0_match
    }

    /// Both projections match.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.verification.is_exact()
    }

    /// Projection of the final grid onto a face.
    #[must_use]
    pub fn projection(&self, face: Face) -> Projection {
        project(&self.grid, face)
    }

    /// Returns the grid only if both projections match.
    ///
    /// # Errors
    ///
    /// Returns [`CarveError::ProjectionMismatch`] naming every offending cell.
    pub fn into_exact(self) -> CarveResult<OccupancyGrid> {
        if self.is_exact() {
            Ok(self.grid)
        } else {
            Err(CarveError::ProjectionMismatch {
                mismatches: self.verification.mismatches,
            })
        }
    }
}

impl std::fmt::Display for Synthesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Synthesis: {} grid, {:?}, x=0 match: {}, y=0 match: {}, {} conflict(s), {}",
            self.grid.dimensions(),
            self.stage,
            self.x0_match(),
            self.y0_match(),
            self.conflicts.len(),
            self.grid.stats()
        )
    }
}
