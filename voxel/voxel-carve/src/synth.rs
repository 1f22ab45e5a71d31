//! Carve-and-repair synthesis.
//!
//! Synthesis starts from a solid block, carves each pattern's empty cells out
//! of its face, verifies both projections and, if either disagrees, runs a
//! single two-phase repair pass:
//!
//! 1. **Remove**: clear face voxels the pattern marks empty but the projection
//!    shows filled (`x = 0` face, then `y = 0` face).
//! 2. **Restore**: re-project, then fill face voxels the pattern marks filled
//!    but the projection shows empty (`x = 0` face, then `y = 0` face).
//!
//! Voxels on the shared edge (`x = 0, y = 0`) belong to both faces. When the
//! two patterns disagree there, the later write wins and the losing face is
//! reported through its match flag. The pass is not repeated.

use tracing::{debug, info, warn};
use voxel_types::{Face, OccupancyGrid, Pattern, VoxelCoord};

use crate::error::{CarveError, CarveResult};
use crate::params::SynthesisParams;
use crate::project::{project, verify};
use crate::result::Synthesis;

/// Progress of a grid through synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SynthesisStage {
    /// Solid block allocated.
    Initialized,
    /// Both patterns carved; repair was needed but disabled.
    Carved,
    /// Carved grid matched both patterns without repair.
    Verified,
    /// Repair pass applied.
    Repaired,
}

/// A shared-edge voxel whose two patterns disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictCell {
    /// Height level of the voxel `(0, 0, z)`.
    pub z: usize,
    /// What the `x = 0` pattern asks for.
    pub x0_wants: bool,
    /// What the `y = 0` pattern asks for.
    pub y0_wants: bool,
}

impl ConflictCell {
    /// The contested voxel.
    #[must_use]
    pub const fn voxel(&self) -> VoxelCoord {
        VoxelCoord::new(0, 0, self.z)
    }
}

/// A single face voxel written by the repair pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelFix {
    /// Face whose pattern drove the write.
    pub face: Face,
    /// Lateral index along the face.
    pub lateral: usize,
    /// Height level.
    pub z: usize,
}

impl VoxelFix {
    /// The voxel that was written.
    #[must_use]
    pub const fn voxel(&self) -> VoxelCoord {
        self.face.voxel(self.lateral, self.z)
    }
}

/// Voxels cleared and filled by one repair pass, in write order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepairLog {
    /// Voxels cleared in the remove phase.
    pub removed: Vec<VoxelFix>,
    /// Voxels filled in the restore phase.
    pub restored: Vec<VoxelFix>,
}

impl RepairLog {
    /// `true` if the pass changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.restored.is_empty()
    }

    /// Total number of writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.removed.len() + self.restored.len()
    }
}

/// Clears every face voxel the pattern marks empty.
///
/// Cells marked filled are left untouched. Levels at or above the grid height
/// and columns beyond the face are ignored. Returns the number of voxels
/// that changed from filled to empty.
pub fn carve(grid: &mut OccupancyGrid, face: Face, pattern: &Pattern) -> usize {
    let dims = grid.dimensions();
    let rows = pattern.rows().min(dims.height());
    let mut carved = 0;
    for z in 0..rows {
        for i in 0..face.lateral_extent(dims) {
            if pattern.is_empty_at(z, i) && grid.set(face.voxel(i, z), false) == Some(true) {
                carved += 1;
            }
        }
    }
    carved
}

/// Runs one two-phase repair pass over both faces.
///
/// Running it on a grid that already matches both patterns changes nothing
/// and returns an empty log.
pub fn repair(grid: &mut OccupancyGrid, x0_pattern: &Pattern, y0_pattern: &Pattern) -> RepairLog {
    let targets = [(Face::X0, x0_pattern), (Face::Y0, y0_pattern)];
    let mut log = RepairLog::default();

    let projections = targets.map(|(face, _)| project(grid, face));
    for ((face, pattern), projection) in targets.iter().zip(&projections) {
        for_each_constrained(grid, *face, pattern, |i, z, wants_filled| {
            if !wants_filled && projection.is_filled(i, z) {
                log.removed.push(VoxelFix {
                    face: *face,
                    lateral: i,
                    z,
                });
            }
        });
        apply(grid, &log.removed, false, *face);
    }

    let projections = targets.map(|(face, _)| project(grid, face));
    for ((face, pattern), projection) in targets.iter().zip(&projections) {
        for_each_constrained(grid, *face, pattern, |i, z, wants_filled| {
            if wants_filled && !projection.is_filled(i, z) {
                log.restored.push(VoxelFix {
                    face: *face,
                    lateral: i,
                    z,
                });
            }
        });
        apply(grid, &log.restored, true, *face);
    }

    log
}

fn for_each_constrained<F>(grid: &OccupancyGrid, face: Face, pattern: &Pattern, mut visit: F)
where
    F: FnMut(usize, usize, bool),
{
    let dims = grid.dimensions();
    for z in 0..pattern.rows().min(dims.height()) {
        for i in 0..face.lateral_extent(dims) {
            if let Some(wants_filled) = pattern.get(z, i) {
                visit(i, z, wants_filled);
            }
        }
    }
}

fn apply(grid: &mut OccupancyGrid, fixes: &[VoxelFix], value: bool, face: Face) {
    let verb = if value { "Restored" } else { "Removed" };
    for fix in fixes.iter().filter(|fix| fix.face == face) {
        grid.set(fix.voxel(), value);
        debug!(
            face = %fix.face,
            lateral = fix.lateral,
            z = fix.z,
            "{verb} face voxel"
        );
    }
}

/// Lists shared-edge levels where the two patterns ask for different values.
///
/// Only levels constrained by both patterns (below both row counts and the
/// grid height) are considered.
#[must_use]
pub fn find_conflicts(height: usize, x0_pattern: &Pattern, y0_pattern: &Pattern) -> Vec<ConflictCell> {
    let rows = height.min(x0_pattern.rows()).min(y0_pattern.rows());
    (0..rows)
        .filter_map(|z| {
            let x0_wants = x0_pattern.get(z, 0)?;
            let y0_wants = y0_pattern.get(z, 0)?;
            (x0_wants != y0_wants).then_some(ConflictCell {
                z,
                x0_wants,
                y0_wants,
            })
        })
        .collect()
}

/// Synthesizes a grid whose `x = 0` and `y = 0` projections reproduce the two patterns.
///
/// `x0_pattern` must have `depth` columns and `y0_pattern` `width` columns.
/// Patterns taller than the grid are rejected unless
/// [`SynthesisParams::truncate_tall_patterns`] is set.
///
/// Unresolvable shared-edge conflicts are not errors: the returned
/// [`Synthesis`] carries the final match flags and the conflict cells. Use
/// [`Synthesis::into_exact`] to treat any mismatch as an error.
///
/// # Errors
///
/// Returns [`CarveError::ShapeMismatch`] if a pattern does not fit its face.
///
/// # Example
///
/// ```
/// use voxel_carve::{synthesize, SynthesisParams};
/// use voxel_types::Pattern;
///
/// let s: Pattern = "######\n#.....\n######".parse().unwrap();
/// let a: Pattern = "######\n#....#\n######".parse().unwrap();
///
/// let result = synthesize(&s, &a, &SynthesisParams::default()).unwrap();
/// assert!(result.is_exact());
/// ```
pub fn synthesize(
    x0_pattern: &Pattern,
    y0_pattern: &Pattern,
    params: &SynthesisParams,
) -> CarveResult<Synthesis> {
    let dims = params.dimensions;
    check_shape(Face::X0, x0_pattern, params)?;
    check_shape(Face::Y0, y0_pattern, params)?;

    info!(dimensions = %dims, "Starting projection synthesis");

    let conflicts = find_conflicts(dims.height(), x0_pattern, y0_pattern);
    for conflict in &conflicts {
        warn!(
            z = conflict.z,
            x0_wants = conflict.x0_wants,
            y0_wants = conflict.y0_wants,
            "Patterns disagree on shared edge voxel"
        );
    }

    let mut grid = OccupancyGrid::solid(dims);
    let mut stage = SynthesisStage::Initialized;
    debug!(?stage, filled = grid.filled_count(), "Allocated solid block");

    let carved_x0 = carve(&mut grid, Face::X0, x0_pattern);
    let carved_y0 = carve(&mut grid, Face::Y0, y0_pattern);
    debug!(carved_x0, carved_y0, "Carved both faces");

    let initial = verify(&grid, x0_pattern, y0_pattern);
    let mut repair_log = None;

    if initial.is_exact() {
        stage = SynthesisStage::Verified;
    } else if params.repair {
        info!(
            x0_match = initial.x0_match,
            y0_match = initial.y0_match,
            "Carved grid does not match, repairing"
        );
        repair_log = Some(repair(&mut grid, x0_pattern, y0_pattern));
        stage = SynthesisStage::Repaired;
    } else {
        stage = SynthesisStage::Carved;
    }

    let verification = if stage == SynthesisStage::Repaired {
        verify(&grid, x0_pattern, y0_pattern)
    } else {
        initial.clone()
    };

    info!(
        x0_match = verification.x0_match,
        y0_match = verification.y0_match,
        ?stage,
        filled = grid.filled_count(),
        "Synthesis complete"
    );
    if !verification.is_exact() {
        warn!(
            mismatches = verification.mismatches.len(),
            "Synthesized grid does not reproduce both patterns"
        );
    }

    Ok(Synthesis {
        grid,
        stage,
        verification,
        initial,
        repair: repair_log,
        conflicts,
        params: *params,
    })
}

fn check_shape(face: Face, pattern: &Pattern, params: &SynthesisParams) -> CarveResult<()> {
    let dims = params.dimensions;
    let expected_cols = face.lateral_extent(dims);
    let too_tall = pattern.rows() > dims.height();

    if pattern.cols() != expected_cols || (too_tall && !params.truncate_tall_patterns) {
        return Err(CarveError::ShapeMismatch {
            face,
            rows: pattern.rows(),
            cols: pattern.cols(),
            max_rows: dims.height(),
            expected_cols,
        });
    }

    if too_tall {
        warn!(
            face = %face,
            rows = pattern.rows(),
            height = dims.height(),
            "Pattern taller than grid, ignoring rows above the top level"
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::presets::{LOGO_DIMENSIONS, letter_a, letter_s};
    use voxel_types::Dimensions;

    fn pattern(text: &str) -> Pattern {
        text.parse().unwrap()
    }

    #[test]
    fn test_carve_only_clears_empty_cells() {
        let mut grid = OccupancyGrid::solid(Dimensions::try_new(3, 3, 2).unwrap());
        let carved = carve(&mut grid, Face::Y0, &pattern("#.#\n..."));
        assert_eq!(carved, 4);
        assert!(grid.is_filled(VoxelCoord::new(0, 0, 0)));
        assert!(!grid.is_filled(VoxelCoord::new(1, 0, 0)));
        assert!(!grid.is_filled(VoxelCoord::new(2, 0, 1)));
        assert!(grid.is_filled(VoxelCoord::new(1, 1, 0)));
        // Carving twice changes nothing more.
        assert_eq!(carve(&mut grid, Face::Y0, &pattern("#.#\n...")), 0);
    }

    #[test]
    fn test_find_conflicts() {
        let conflicts = find_conflicts(8, &letter_s(), &letter_a());
        let levels: Vec<_> = conflicts.iter().map(|c| c.z).collect();
        assert_eq!(levels, vec![0, 1, 4, 5]);
        assert!(conflicts[0].x0_wants);
        assert!(!conflicts[0].y0_wants);
        assert_eq!(conflicts[2].voxel(), VoxelCoord::new(0, 0, 4));

        // Height limits the levels considered.
        assert_eq!(find_conflicts(1, &letter_s(), &letter_a()).len(), 1);
    }

    #[test]
    fn test_repair_restores_after_other_face_carve() {
        let dims = Dimensions::try_new(3, 3, 1).unwrap();
        let x0 = pattern("###");
        let y0 = pattern(".##");
        let mut grid = OccupancyGrid::solid(dims);
        carve(&mut grid, Face::X0, &x0);
        carve(&mut grid, Face::Y0, &y0);
        assert!(!grid.is_filled(VoxelCoord::origin()));

        let log = repair(&mut grid, &x0, &y0);
        assert!(log.removed.is_empty());
        assert_eq!(
            log.restored,
            vec![VoxelFix {
                face: Face::X0,
                lateral: 0,
                z: 0
            }]
        );
        assert!(grid.is_filled(VoxelCoord::origin()));
    }

    #[test]
    fn test_repair_removes_excess_fill() {
        let dims = Dimensions::try_new(2, 2, 2).unwrap();
        let x0 = pattern("#.\n..");
        let y0 = pattern("##\n##");
        let mut grid = OccupancyGrid::solid(dims);

        let log = repair(&mut grid, &x0, &y0);
        assert_eq!(log.removed.len(), 3);
        assert!(log.restored.iter().all(|fix| fix.face == Face::Y0));
        // (0,0,1) was cleared for x=0 then restored for y=0.
        assert!(grid.is_filled(VoxelCoord::new(0, 0, 1)));
        assert_eq!(log.len(), log.removed.len() + log.restored.len());
    }

    #[test]
    fn test_shape_mismatch_on_width() {
        let err = synthesize(
            &pattern("#####"),
            &letter_a(),
            &SynthesisParams::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CarveError::ShapeMismatch {
                face: Face::X0,
                cols: 5,
                expected_cols: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_tall_pattern_rejected_or_truncated() {
        let tall = Pattern::uniform(LOGO_DIMENSIONS.height() + 2, 6, false).unwrap();
        let a = letter_a();

        let err = synthesize(&tall, &a, &SynthesisParams::default()).unwrap_err();
        assert!(matches!(err, CarveError::ShapeMismatch { rows: 10, max_rows: 8, .. }));

        let params = SynthesisParams::default().with_truncation(true);
        let result = synthesize(&tall, &Pattern::uniform(10, 6, false).unwrap(), &params).unwrap();
        assert!(result.is_exact());
        for z in 0..LOGO_DIMENSIONS.height() {
            assert!(!result.grid.is_filled(VoxelCoord::new(0, 3, z)));
        }
    }

    #[test]
    fn test_stage_transitions() {
        let full = Pattern::uniform(8, 6, true).unwrap();
        let result = synthesize(&full, &full, &SynthesisParams::default()).unwrap();
        assert_eq!(result.stage, SynthesisStage::Verified);
        assert!(result.repair.is_none());

        let params = SynthesisParams::default().with_repair(false);
        let result = synthesize(&letter_s(), &letter_a(), &params).unwrap();
        assert_eq!(result.stage, SynthesisStage::Carved);
        assert!(result.repair.is_none());
        assert_eq!(result.verification, result.initial);

        let result = synthesize(&letter_s(), &letter_a(), &SynthesisParams::default()).unwrap();
        assert_eq!(result.stage, SynthesisStage::Repaired);
        assert!(result.repair.is_some());
    }
}
