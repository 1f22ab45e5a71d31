//! Dual-Projection Logo Generator
//!
//! Carves a 6x6x8 block so that the `x = 0` face shows one letter and the
//! `y = 0` face another, prints both silhouettes, and exports the grid as a
//! raw `.vgrid` file, a coordinate list and an inset-cube OBJ surface.
//!
//! # Usage
//!
//! ```text
//! dual-projection-logo                       # S / A presets
//! dual-projection-logo --x0-pattern s.txt --y0-pattern a.txt -o out/logo
//! dual-projection-logo --config logo.json --strict -v
//! ```
//!
//! Pattern files hold one row per line, `#` for filled and `.` for empty,
//! bottom level first. `RUST_LOG` overrides the log filter.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use voxel::carve::presets;
use voxel::prelude::*;

use crate::config::LogoConfig;

/// Dual-projection voxel logo generator
#[derive(Parser, Debug)]
#[command(name = "dual-projection-logo")]
#[command(about = "Carve a voxel block whose two faces show two patterns", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config file (dimensions, patterns, corner offset, output)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pattern file for the x = 0 face
    #[arg(long)]
    x0_pattern: Option<PathBuf>,

    /// Pattern file for the y = 0 face
    #[arg(long)]
    y0_pattern: Option<PathBuf>,

    /// Base name of the exported files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Cube inset for the OBJ surface
    #[arg(long)]
    corner_offset: Option<f64>,

    /// Drop pattern rows above the grid instead of failing
    #[arg(long)]
    truncate: bool,

    /// Skip the repair pass
    #[arg(long)]
    no_repair: bool,

    /// Fail unless both projections match exactly
    #[arg(long)]
    strict: bool,

    /// Print the result without writing files
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = LogoConfig::load(cli.config.as_deref())?;
    run(&cli, &config)
}

fn run(cli: &Cli, config: &LogoConfig) -> Result<()> {
    let x0 = resolve_pattern(cli.x0_pattern.as_deref(), config.x0()?, presets::letter_s)?;
    let y0 = resolve_pattern(cli.y0_pattern.as_deref(), config.y0()?, presets::letter_a)?;

    let params = SynthesisParams::default()
        .with_dimensions(config.dimensions()?)
        .with_truncation(cli.truncate)
        .with_repair(!cli.no_repair);

    println!("Target x=0 pattern:\n{x0}");
    println!("Target y=0 pattern:\n{y0}");

    let result = synthesize(&x0, &y0, &params).context("synthesizing grid")?;

    for face in Face::ALL {
        println!("Projection onto {face}:\n{}", result.projection(face));
    }
    println!("{result}");
    println!("{}", result.grid.stats());

    for conflict in &result.conflicts {
        warn!(
            voxel = %conflict.voxel(),
            x0_wants = conflict.x0_wants,
            y0_wants = conflict.y0_wants,
            "Unresolvable shared edge voxel"
        );
    }

    let grid = if cli.strict {
        result.into_exact().context("strict mode")?
    } else {
        result.grid
    };

    if cli.dry_run {
        info!("Dry run, nothing written");
        return Ok(());
    }

    let surface = SurfaceParams::default()
        .with_corner_offset(cli.corner_offset.unwrap_or(config.corner_offset));
    let base = cli.output.as_ref().unwrap_or(&config.output);
    if let Some(parent) = base.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let paths = export_all(&grid, base, &surface)
        .with_context(|| format!("exporting to {}", base.display()))?;
    println!("Wrote {}", paths.raw.display());
    println!("Wrote {}", paths.coords.display());
    println!("Wrote {}", paths.obj.display());
    Ok(())
}

/// Command-line file first, then the config rows, then the preset.
fn resolve_pattern(
    file: Option<&Path>,
    from_config: Option<Pattern>,
    preset: fn() -> Pattern,
) -> Result<Pattern> {
    if let Some(path) = file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading pattern {}", path.display()))?;
        return text
            .parse()
            .with_context(|| format!("parsing pattern {}", path.display()));
    }
    Ok(from_config.unwrap_or_else(preset))
}
