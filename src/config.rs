// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration loaded from TOML.
//!
//! Every field defaults to the matching constant in `settings`, so a config
//! file only needs to name the values it changes:
//!
//! ```toml
//! [view]
//! max_zoom = 800.0
//!
//! [export]
//! artifact_name = "ground-floor"
//! ```

use crate::settings;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// View transform limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub cell_size: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    pub pan_step: f64,
    pub compact_breakpoint: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cell_size: settings::view::CELL_SIZE,
            min_zoom: settings::view::MIN_ZOOM,
            max_zoom: settings::view::MAX_ZOOM,
            zoom_step: settings::view::ZOOM_STEP,
            pan_step: settings::view::PAN_STEP,
            compact_breakpoint: settings::view::COMPACT_BREAKPOINT,
        }
    }
}

/// Pointer tolerances and history length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub closure_radius: f64,
    pub min_stroke_step: f64,
    pub label_hit_radius: f64,
    pub path_hit_radius: f64,
    pub drag_threshold: f64,
    pub snap_spacing: f64,
    pub double_click_ms: u64,
    pub double_click_distance: f64,
    pub max_undo: usize,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            closure_radius: settings::interaction::CLOSURE_RADIUS,
            min_stroke_step: settings::interaction::MIN_STROKE_STEP,
            label_hit_radius: settings::interaction::LABEL_HIT_RADIUS,
            path_hit_radius: settings::interaction::PATH_HIT_RADIUS,
            drag_threshold: settings::interaction::DRAG_THRESHOLD,
            snap_spacing: settings::snap::SPACING,
            double_click_ms: settings::interaction::DOUBLE_CLICK_TIME_MS,
            double_click_distance: settings::interaction::DOUBLE_CLICK_DISTANCE,
            max_undo: settings::interaction::MAX_UNDO,
        }
    }
}

/// Raster export sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub pixels_per_unit: f64,
    pub min_dimension: f64,
    pub max_dimension: f64,
    pub padding: f64,
    pub artifact_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: settings::export::PIXELS_PER_UNIT,
            min_dimension: settings::export::MIN_DIMENSION,
            max_dimension: settings::export::MAX_DIMENSION,
            padding: settings::export::PADDING,
            artifact_name: settings::export::ARTIFACT_NAME.to_string(),
        }
    }
}

/// Complete canvas configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub view: ViewConfig,
    pub interaction: InteractionConfig,
    pub export: ExportConfig,
}

impl CanvasConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let config: CanvasConfig =
            toml::from_str(source).context("invalid canvas configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.view.cell_size > 0.0,
            "view.cell_size must be positive, got {}",
            self.view.cell_size
        );
        anyhow::ensure!(
            self.view.min_zoom > 0.0 && self.view.min_zoom <= self.view.max_zoom,
            "view zoom range {}..{} is invalid",
            self.view.min_zoom,
            self.view.max_zoom
        );
        anyhow::ensure!(
            self.export.pixels_per_unit > 0.0 && self.export.max_dimension > 0.0,
            "export sizing must be positive"
        );
        anyhow::ensure!(
            self.export.min_dimension <= self.export.max_dimension,
            "export.min_dimension {} exceeds export.max_dimension {}",
            self.export.min_dimension,
            self.export.max_dimension
        );
        // A single wall has zero-area bounds until padded
        anyhow::ensure!(
            self.export.padding > 0.0,
            "export.padding must be positive, got {}",
            self.export.padding
        );
        Ok(())
    }
}
