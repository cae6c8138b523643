// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! The explicit command contract between the canvas and its host

use super::Canvas;
use crate::export::{self, ExportError, ExportedImage};
use kurbo::Vec2;
use serde::Deserialize;

/// Direction for stepwise panning
///
/// `Left` brings content to the left of the view into sight, so the scene
/// itself moves right on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    /// Screen offset change for one pan step
    fn offset_delta(self, step: f64) -> Vec2 {
        match self {
            PanDirection::Left => Vec2::new(step, 0.0),
            PanDirection::Right => Vec2::new(-step, 0.0),
            PanDirection::Up => Vec2::new(0.0, step),
            PanDirection::Down => Vec2::new(0.0, -step),
        }
    }
}

/// Commands the surrounding chrome can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasCommand {
    Undo,
    Export,
    Clear,
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    ResetView,
}

impl Canvas {
    /// Run a command; returns whether it changed anything
    pub fn execute(&mut self, command: CanvasCommand) -> bool {
        tracing::debug!("Command: {:?}", command);
        match command {
            CanvasCommand::Undo => self.undo(),
            CanvasCommand::Export => self.export_and_notify(),
            CanvasCommand::Clear => {
                self.clear();
                true
            }
            CanvasCommand::Pan(direction) => self.pan(direction),
            CanvasCommand::ZoomIn => self.zoom(self.session.config.view.zoom_step),
            CanvasCommand::ZoomOut => self.zoom(-self.session.config.view.zoom_step),
            CanvasCommand::ResetView => {
                self.session.viewport.reset();
                self.after_event();
                true
            }
        }
    }

    /// Revert the last committed action
    pub fn undo(&mut self) -> bool {
        let undone = self.session.undo();
        self.after_event();
        undone
    }

    /// Remove everything, without an undo step
    pub fn clear(&mut self) {
        self.cancel_gesture();
        self.session.clear();
        self.after_event();
    }

    pub fn pan(&mut self, direction: PanDirection) -> bool {
        let step = self.session.config.view.pan_step;
        self.session.viewport.pan_by(direction.offset_delta(step));
        self.after_event();
        true
    }

    fn zoom(&mut self, delta_percent: f64) -> bool {
        let changed = self
            .session
            .viewport
            .zoom_by(delta_percent, self.session.canvas_size);
        if changed {
            tracing::debug!("Zoom: {}%", self.session.viewport.zoom_percent);
        }
        self.after_event();
        changed
    }

    /// Render the committed scene to a PNG
    pub fn export_raster(&self) -> Result<ExportedImage, ExportError> {
        export::export_png(&self.session)
    }

    /// Export and hand the result (or the reason there is none) to the observer
    fn export_and_notify(&mut self) -> bool {
        match self.export_raster() {
            Ok(image) => {
                self.observer.exported(&image);
                true
            }
            Err(ExportError::EmptyScene) => {
                tracing::info!("Export skipped: empty plan");
                self.observer.notice("Nothing to export yet. Draw something first.");
                false
            }
            Err(err) => {
                tracing::warn!("Export failed: {}", err);
                self.observer.notice(&format!("Export failed: {err}"));
                false
            }
        }
    }
}
