// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Floorsketch: replay a gesture script and export the plan as PNG

use anyhow::{Context, Result};
use clap::Parser;
use floorsketch::{Canvas, CanvasConfig, GestureScript};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "floorsketch",
    about = "Replay a recorded floor plan sketch and export it as PNG",
    version
)]
struct Cli {
    /// Gesture script (JSON) to replay
    script: PathBuf,

    /// Canvas configuration overrides (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the PNG is written to
    #[arg(long = "out", default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    floorsketch::init_logging();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CanvasConfig::load(path)?,
        None => CanvasConfig::default(),
    };

    let script = GestureScript::load(&cli.script)?;
    let mut canvas = Canvas::new(config);
    script.replay(&mut canvas)?;

    let scene = canvas.scene();
    tracing::info!(
        "Replayed plan: {} rooms, {} walls, {} strokes, {} labels, {} placements",
        scene.rooms.len(),
        scene.walls.len(),
        scene.paths.len(),
        scene.labels.len(),
        scene.placements.len()
    );

    let image = canvas.export_raster().context("export failed")?;
    let path = image.save_to(&cli.out_dir)?;
    tracing::info!(
        "Exported {}x{} plan to {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_script_and_flags() {
        let cli = Cli::try_parse_from([
            "floorsketch",
            "plan.json",
            "--config",
            "canvas.toml",
            "--out",
            "renders",
        ])
        .unwrap();
        assert_eq!(cli.script, PathBuf::from("plan.json"));
        assert_eq!(cli.config, Some(PathBuf::from("canvas.toml")));
        assert_eq!(cli.out_dir, PathBuf::from("renders"));
    }

    #[test]
    fn out_dir_defaults_to_current() {
        let cli = Cli::try_parse_from(["floorsketch", "plan.json"]).unwrap();
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn script_is_required() {
        assert!(Cli::try_parse_from(["floorsketch"]).is_err());
        assert!(Cli::try_parse_from(["floorsketch", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
