//! Synthesis parameters.

use voxel_types::Dimensions;

use crate::presets::LOGO_DIMENSIONS;

/// Parameters for [`crate::synthesize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthesisParams {
    /// Grid extent. Patterns must have `depth` (x=0 face) or `width` (y=0 face) columns.
    pub dimensions: Dimensions,

    /// Drop pattern rows at or above `height` instead of failing.
    ///
    /// When `false`, an over-tall pattern is a `ShapeMismatch`.
    pub truncate_tall_patterns: bool,

    /// Run the repair pass when the carved grid does not match.
    pub repair: bool,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            dimensions: LOGO_DIMENSIONS,
            truncate_tall_patterns: false,
            repair: true,
        }
    }
}

impl SynthesisParams {
    /// Set grid dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Allow over-tall patterns to be truncated to the grid height.
    #[must_use]
    pub const fn with_truncation(mut self, truncate: bool) -> Self {
        self.truncate_tall_patterns = truncate;
        self
    }

    /// Enable or disable the repair pass.
    #[must_use]
    pub const fn with_repair(mut self, repair: bool) -> Self {
        self.repair = repair;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SynthesisParams::default();
        assert_eq!(params.dimensions, Dimensions::try_new(6, 6, 8).unwrap());
        assert!(!params.truncate_tall_patterns);
        assert!(params.repair);
    }

    #[test]
    fn test_builder() {
        let dims = Dimensions::try_new(3, 4, 5).unwrap();
        let params = SynthesisParams::default()
            .with_dimensions(dims)
            .with_truncation(true)
            .with_repair(false);
        assert_eq!(params.dimensions, dims);
        assert!(params.truncate_tall_patterns);
        assert!(!params.repair);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let params = SynthesisParams::default().with_truncation(true);
        let json = serde_json::to_string(&params).unwrap();
        let back: SynthesisParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
