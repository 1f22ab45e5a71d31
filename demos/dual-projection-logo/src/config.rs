//! JSON configuration for the logo demo.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use voxel::carve::presets::LOGO_DIMENSIONS;
use voxel::types::{Dimensions, Pattern};

/// Settings loaded from a JSON file. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Grid width (x).
    pub width: usize,
    /// Grid depth (y).
    pub depth: usize,
    /// Grid height (z).
    pub height: usize,
    /// Rows of the `x = 0` pattern, `z = 0` first. Empty means the `S` preset.
    pub x0_pattern: Vec<String>,
    /// Rows of the `y = 0` pattern, `z = 0` first. Empty means the `A` preset.
    pub y0_pattern: Vec<String>,
    /// Cube inset for the OBJ surface.
    pub corner_offset: f64,
    /// Base name of the exported files.
    pub output: PathBuf,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            width: LOGO_DIMENSIONS.width(),
            depth: LOGO_DIMENSIONS.depth(),
            height: LOGO_DIMENSIONS.height(),
            x0_pattern: Vec::new(),
            y0_pattern: Vec::new(),
            corner_offset: 0.05,
            output: PathBuf::from("voxel_logo"),
        }
    }
}

impl LogoConfig {
    /// Load from a file, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Grid dimensions.
    pub fn dimensions(&self) -> Result<Dimensions> {
        Ok(Dimensions::try_new(self.width, self.depth, self.height)?)
    }

    /// The `x = 0` pattern, if the config names one.
    pub fn x0(&self) -> Result<Option<Pattern>> {
        rows_to_pattern(&self.x0_pattern).context("x0_pattern")
    }

    /// The `y = 0` pattern, if the config names one.
    pub fn y0(&self) -> Result<Option<Pattern>> {
        rows_to_pattern(&self.y0_pattern).context("y0_pattern")
    }
}

fn rows_to_pattern(rows: &[String]) -> Result<Option<Pattern>> {
    if rows.is_empty() {
        return Ok(None);
    }
    Ok(Some(rows.join("\n").parse()?))
}
