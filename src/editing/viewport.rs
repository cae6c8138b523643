// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Coordinate transform between screen pixels and grid units.
//!
//! `screen = grid * cell_size * (zoom_percent / 100) + offset`
//!
//! A single `ViewPort` value is shared by the renderer and the hit tester
//! for a frame, so what is drawn and what is clicked always agree. Every
//! zoom change is anchored on the viewport centre: the grid point under the
//! centre stays under the centre.

use crate::settings;
use kurbo::{Affine, Point, Rect, Size, Vec2};

/// View transform for one canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// Zoom level in percent, clamped to `[min_zoom, max_zoom]`
    pub zoom_percent: f64,
    /// Pan offset in screen pixels
    pub offset: Vec2,
    /// Pixel size of one grid unit at 100% zoom
    pub cell_size: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl ViewPort {
    /// Default view: 100% zoom, grid origin at the screen origin
    pub fn new() -> Self {
        Self::with_limits(
            settings::view::CELL_SIZE,
            settings::view::MIN_ZOOM,
            settings::view::MAX_ZOOM,
        )
    }

    /// View with a custom cell size and zoom range
    pub fn with_limits(cell_size: f64, min_zoom: f64, max_zoom: f64) -> Self {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        Self {
            zoom_percent: 100.0_f64.clamp(min_zoom, max_zoom),
            offset: Vec2::ZERO,
            cell_size,
            min_zoom,
            max_zoom,
        }
    }

    /// Export transform: `scale` pixels per grid unit, `origin` at (0, 0)
    ///
    /// The scale is expressed as a zoom level over `cell_size`, so text and
    /// stroke sizes grow with it exactly as they do on screen. The zoom range
    /// is pinned to that level.
    pub fn for_export(scale: f64, origin: Point, cell_size: f64) -> Self {
        let zoom_percent = scale / cell_size * 100.0;
        Self {
            zoom_percent,
            offset: -origin.to_vec2() * scale,
            cell_size,
            min_zoom: zoom_percent,
            max_zoom: zoom_percent,
        }
    }

    /// Zoom as a plain factor (1.0 at 100%)
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_percent / 100.0
    }

    /// Pixels per grid unit at the current zoom
    pub fn scale(&self) -> f64 {
        self.cell_size * self.zoom_percent / 100.0
    }

    pub fn zoom_range(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Convert a grid point to screen space
    pub fn to_screen(&self, grid_pos: Point) -> Point {
        (grid_pos.to_vec2() * self.scale() + self.offset).to_point()
    }

    /// Convert a screen point to grid space
    pub fn to_grid(&self, screen_pos: Point) -> Point {
        ((screen_pos.to_vec2() - self.offset) / self.scale()).to_point()
    }

    /// Grid length to screen pixels
    pub fn grid_len_to_screen(&self, len: f64) -> f64 {
        len * self.scale()
    }

    /// Screen pixels to grid length
    pub fn screen_len_to_grid(&self, len: f64) -> f64 {
        len / self.scale()
    }

    /// Affine mapping grid space to screen space
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale())
    }

    /// Grid-space rectangle covered by a canvas of the given size
    pub fn visible_grid_rect(&self, canvas_size: Size) -> Rect {
        Rect::from_points(
            self.to_grid(Point::ZERO),
            self.to_grid(Point::new(canvas_size.width, canvas_size.height)),
        )
    }

    /// Move the view by a screen-space delta
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Set the zoom level, keeping the grid point under `anchor` fixed
    ///
    /// Returns whether the zoom actually changed after clamping.
    pub fn set_zoom(&mut self, zoom_percent: f64, anchor: Point) -> bool {
        let clamped = zoom_percent.clamp(self.min_zoom, self.max_zoom);
        if (clamped - self.zoom_percent).abs() < f64::EPSILON {
            return false;
        }

        let grid_anchor = self.to_grid(anchor);
        self.zoom_percent = clamped;
        let moved = self.to_screen(grid_anchor);
        self.offset += anchor - moved;
        true
    }

    /// Zoom by a percentage delta around the canvas centre
    pub fn zoom_by(&mut self, delta_percent: f64, canvas_size: Size) -> bool {
        let center = canvas_size.to_rect().center();
        self.set_zoom(self.zoom_percent + delta_percent, center)
    }

    /// Back to 100% with the grid origin at the screen origin
    pub fn reset(&mut self) {
        self.zoom_percent = 100.0_f64.clamp(self.min_zoom, self.max_zoom);
        self.offset = Vec2::ZERO;
    }
}

impl Default for ViewPort {
    fn default() -> Self {
        Self::new()
    }
}
