// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas settings and configuration constants.
//!
//! These are the compile-time defaults. `config::CanvasConfig` starts from
//! them and lets a TOML file override any value. Visual styling (colors,
//! stroke widths) belongs in `theme.rs`.

// ============================================================================
// VIEW SETTINGS
// ============================================================================
/// Pixel size of one grid unit (one foot) at 100% zoom
const CELL_SIZE: f64 = 20.0;

/// Minimum zoom level, in percent
const MIN_ZOOM: f64 = 25.0;

/// Maximum zoom level, in percent
const MAX_ZOOM: f64 = 400.0;

/// Zoom change applied by the zoom in / zoom out commands, in percent
const ZOOM_STEP: f64 = 25.0;

/// Distance the view moves for one pan command (screen pixels)
const PAN_STEP: f64 = 100.0;

/// Viewports narrower than this are treated as a compact/touch form factor
const COMPACT_BREAKPOINT: f64 = 768.0;

// ============================================================================
// GRID SETTINGS
// ============================================================================
// Three zoom bands with different grid densities:
//   Far:   minor=5,   major every 5 (25 ft)
//   Mid:   minor=1,   major every 5 (5 ft)
//   Close: minor=0.5, major every 2 (1 ft)

/// Minimum zoom for the mid band (percent)
const GRID_MID_MIN_ZOOM: f64 = 50.0;
/// Minimum zoom for the close band (percent)
const GRID_CLOSE_MIN_ZOOM: f64 = 200.0;

// ============================================================================
// SNAP SETTINGS
// ============================================================================
/// Grid spacing room and wall vertices snap to (grid units, 0 disables)
const SNAP_SPACING: f64 = 1.0;

// ============================================================================
// INTERACTION SETTINGS
// ============================================================================
/// Clicking within this many pixels of a room's first vertex closes it
const CLOSURE_RADIUS: f64 = 25.0;

/// Minimum screen distance between recorded freehand points
const MIN_STROKE_STEP: f64 = 4.0;

/// Pick radius around a label anchor (screen pixels)
const LABEL_HIT_RADIUS: f64 = 20.0;

/// Pick radius around walls and freehand paths (screen pixels)
const PATH_HIT_RADIUS: f64 = 10.0;

/// Pointer travel before a press becomes a drag (screen pixels)
const DRAG_THRESHOLD: f64 = 3.0;

/// Two clicks closer than this in time count as a double-click
const DOUBLE_CLICK_TIME_MS: u64 = 500;

/// Two clicks closer than this in space count as a double-click
const DOUBLE_CLICK_DISTANCE: f64 = 10.0;

/// Oldest undo entries are dropped past this length
const MAX_UNDO: usize = 200;

// ============================================================================
// STRAIGHTENING SETTINGS
// ============================================================================
/// Strokes shorter than this (grid units) are never straightened
const STRAIGHTEN_MIN_LENGTH: f64 = 3.0;

/// Maximum deviation from a canonical angle, in degrees
const STRAIGHTEN_ANGLE_THRESHOLD: f64 = 15.0;

// ============================================================================
// EXPORT SETTINGS
// ============================================================================
/// Base export resolution (pixels per grid unit)
const EXPORT_PIXELS_PER_UNIT: f64 = 40.0;

/// Longest output side is scaled up to at least this many pixels
const EXPORT_MIN_DIMENSION: f64 = 800.0;

/// Longest output side is capped at this many pixels
const EXPORT_MAX_DIMENSION: f64 = 4096.0;

/// Margin added around the content bounds (grid units)
const EXPORT_PADDING: f64 = 2.0;

/// Stem of exported file names
const EXPORT_ARTIFACT_NAME: &str = "floor-plan";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// View transform settings
pub mod view {
    pub const CELL_SIZE: f64 = super::CELL_SIZE;
    pub const MIN_ZOOM: f64 = super::MIN_ZOOM;
    pub const MAX_ZOOM: f64 = super::MAX_ZOOM;
    pub const ZOOM_STEP: f64 = super::ZOOM_STEP;
    pub const PAN_STEP: f64 = super::PAN_STEP;
    pub const COMPACT_BREAKPOINT: f64 = super::COMPACT_BREAKPOINT;
}

/// Background grid density bands
///
/// Each band applies from its minimum zoom upward until the next band.
pub mod grid {
    /// Far band (zoomed out)
    pub mod far {
        pub const MIN_ZOOM: f64 = 0.0;
        pub const MINOR: f64 = 5.0;
        pub const MAJOR_N: u32 = 5;
    }

    /// Mid band
    pub mod mid {
        pub const MIN_ZOOM: f64 = super::super::GRID_MID_MIN_ZOOM;
        pub const MINOR: f64 = 1.0;
        pub const MAJOR_N: u32 = 5;
    }

    /// Close band (zoomed in)
    pub mod close {
        pub const MIN_ZOOM: f64 = super::super::GRID_CLOSE_MIN_ZOOM;
        pub const MINOR: f64 = 0.5;
        pub const MAJOR_N: u32 = 2;
    }
}

/// Snap-to-grid settings for room and wall vertices
pub mod snap {
    pub const SPACING: f64 = super::SNAP_SPACING;
}

/// Pointer interaction tolerances
pub mod interaction {
    pub const CLOSURE_RADIUS: f64 = super::CLOSURE_RADIUS;
    pub const MIN_STROKE_STEP: f64 = super::MIN_STROKE_STEP;
    pub const LABEL_HIT_RADIUS: f64 = super::LABEL_HIT_RADIUS;
    pub const PATH_HIT_RADIUS: f64 = super::PATH_HIT_RADIUS;
    pub const DRAG_THRESHOLD: f64 = super::DRAG_THRESHOLD;
    pub const DOUBLE_CLICK_TIME_MS: u64 = super::DOUBLE_CLICK_TIME_MS;
    pub const DOUBLE_CLICK_DISTANCE: f64 = super::DOUBLE_CLICK_DISTANCE;
    pub const MAX_UNDO: usize = super::MAX_UNDO;
}

/// Freehand straightening
pub mod straighten {
    pub const MIN_LENGTH: f64 = super::STRAIGHTEN_MIN_LENGTH;
    pub const ANGLE_THRESHOLD_DEG: f64 = super::STRAIGHTEN_ANGLE_THRESHOLD;
}

/// Raster export sizing
pub mod export {
    pub const PIXELS_PER_UNIT: f64 = super::EXPORT_PIXELS_PER_UNIT;
    pub const MIN_DIMENSION: f64 = super::EXPORT_MIN_DIMENSION;
    pub const MAX_DIMENSION: f64 = super::EXPORT_MAX_DIMENSION;
    pub const PADDING: f64 = super::EXPORT_PADDING;
    pub const ARTIFACT_NAME: &str = super::EXPORT_ARTIFACT_NAME;
}
