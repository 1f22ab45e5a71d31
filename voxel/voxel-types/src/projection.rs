//! Projection faces and sampled face silhouettes.

#[cfg(feature = "serde")]
use crate::error::{VoxelError, VoxelResult};
use crate::grid::Dimensions;
use crate::pattern::{EMPTY_CHAR, FILLED_CHAR};
use crate::voxel::VoxelCoord;

/// One of the two axis-aligned faces a grid is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// The `x = 0` plane; lateral index runs along y.
    X0,
    /// The `y = 0` plane; lateral index runs along x.
    Y0,
}

impl Face {
    /// Both faces, in the order synthesis processes them.
    pub const ALL: [Self; 2] = [Self::X0, Self::Y0];

    /// Grid voxel sampled by this face at `(lateral, z)`.
    ///
    /// # Example
    ///
    /// ```
    /// use voxel_types::{Face, VoxelCoord};
    ///
    /// assert_eq!(Face::X0.voxel(3, 2), VoxelCoord::new(0, 3, 2));
    /// assert_eq!(Face::Y0.voxel(3, 2), VoxelCoord::new(3, 0, 2));
    /// ```
    #[must_use]
    pub const fn voxel(self, lateral: usize, z: usize) -> VoxelCoord {
        match self {
            Self::X0 => VoxelCoord::new(0, lateral, z),
            Self::Y0 => VoxelCoord::new(lateral, 0, z),
        }
    }

    /// Number of lateral positions on this face.
    #[must_use]
    pub const fn lateral_extent(self, dims: Dimensions) -> usize {
        match self {
            Self::X0 => dims.depth(),
            Self::Y0 => dims.width(),
        }
    }

    /// Name of the axis the lateral index runs along.
    #[must_use]
    pub const fn lateral_axis(self) -> char {
        match self {
            Self::X0 => 'y',
            Self::Y0 => 'x',
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X0 => write!(f, "x=0"),
            Self::Y0 => write!(f, "y=0"),
        }
    }
}

/// A face silhouette sampled from a grid, indexed `[lateral, z]`.
///
/// Note the transpose relative to [`crate::Pattern`], which is indexed
/// `[z, lateral]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ProjectionRepr")
)]
pub struct Projection {
    face: Face,
    lateral: usize,
    height: usize,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ProjectionRepr {
    face: Face,
    lateral: usize,
    height: usize,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<ProjectionRepr> for Projection {
    type Error = VoxelError;

    fn try_from(repr: ProjectionRepr) -> VoxelResult<Self> {
        let got = repr.cells.len();
        match repr.lateral.checked_mul(repr.height) {
            Some(expected) if expected == got => Ok(Self {
                face: repr.face,
                lateral: repr.lateral,
                height: repr.height,
                cells: repr.cells,
            }),
            expected => Err(VoxelError::CellCountMismatch {
                expected: expected.unwrap_or(usize::MAX),
                got,
            }),
        }
    }
}

impl Projection {
    /// Builds a projection by evaluating `sample` for every `(lateral, z)`.
    pub fn from_fn<F>(face: Face, lateral: usize, height: usize, mut sample: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut cells = Vec::with_capacity(lateral * height);
        for i in 0..lateral {
            for z in 0..height {
                cells.push(sample(i, z));
            }
        }
        Self {
            face,
            lateral,
            height,
            cells,
        }
    }

    /// The face this projection was sampled from.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Number of lateral positions.
    #[must_use]
    pub const fn lateral_len(&self) -> usize {
        self.lateral
    }

    /// Number of height levels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Value at `[lateral, z]`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, lateral: usize, z: usize) -> Option<bool> {
        if lateral >= self.lateral || z >= self.height {
            return None;
        }
        self.cells.get(lateral * self.height + z).copied()
    }

    /// Returns `true` if the cell exists and is filled.
    #[must_use]
    pub fn is_filled(&self, lateral: usize, z: usize) -> bool {
        self.get(lateral, z).unwrap_or(false)
    }
}

/// Renders one line per height level, `#`/`.` per lateral position.
impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for z in 0..self.height {
            for i in 0..self.lateral {
                let c = if self.is_filled(i, z) {
                    FILLED_CHAR
                } else {
                    EMPTY_CHAR
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
