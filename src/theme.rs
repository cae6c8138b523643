// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS -- Neutral gradient, light to dark (paper-like canvas)
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0xff, 0xff, 0xff);
const BASE_B: Color = Color::from_rgb8(0xf6, 0xf6, 0xf2);
const BASE_C: Color = Color::from_rgb8(0xe4, 0xe6, 0xea);
const BASE_D: Color = Color::from_rgb8(0xc8, 0xcc, 0xd4);
const BASE_E: Color = Color::from_rgb8(0x9a, 0xa0, 0xaa);
const BASE_F: Color = Color::from_rgb8(0x60, 0x66, 0x70);
const BASE_G: Color = Color::from_rgb8(0x33, 0x36, 0x3c);
const BASE_H: Color = Color::from_rgb8(0x1a, 0x1c, 0x20);

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Color = BASE_B;
const EXPORT_BACKGROUND: Color = BASE_A;

// ============================================================================
// GRID AND RULERS
// ============================================================================
const GRID_MINOR: Color = BASE_C;
const GRID_MAJOR: Color = BASE_D;
const RULER_BACKGROUND: Color = Color::from_rgba8(0xff, 0xff, 0xff, 0xe0);
const RULER_TICK: Color = BASE_E;
const RULER_TEXT: Color = BASE_F;

// ============================================================================
// ROOMS
// ============================================================================
// Committed rooms cycle through this palette in creation order
const ROOM_PALETTE: [Color; 6] = [
    Color::from_rgb8(0xa8, 0xd0, 0xe6),
    Color::from_rgb8(0xf7, 0xd6, 0x8a),
    Color::from_rgb8(0xb8, 0xe0, 0xb0),
    Color::from_rgb8(0xf2, 0xb5, 0xa8),
    Color::from_rgb8(0xd4, 0xc2, 0xee),
    Color::from_rgb8(0xc9, 0xd9, 0xa3),
];
const ROOM_OUTLINE: Color = BASE_G;
const ROOM_TEXT: Color = BASE_H;
const DIMENSION_TEXT: Color = BASE_F;

// ============================================================================
// WALLS, STROKES, LABELS
// ============================================================================
const WALL: Color = BASE_H;
const STROKE_DEFAULT: Color = BASE_G;
const LABEL_DEFAULT: Color = BASE_H;
const PLACEMENT_FILL: Color = Color::from_rgb8(0xd9, 0xc3, 0xa5);
const PLACEMENT_OUTLINE: Color = BASE_F;

// ============================================================================
// SELECTION AND DRAFTS
// ============================================================================
const SELECTED: Color = Color::from_rgb8(0xff, 0xaa, 0x33);
const DRAFT_LINE: Color = Color::from_rgb8(0x2f, 0x6f, 0xeb);
const DRAFT_FILL: Color = Color::from_rgba8(0x2f, 0x6f, 0xeb, 0x28);
const CLOSURE_TARGET: Color = Color::from_rgb8(0x20, 0x8e, 0x56);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Canvas backgrounds
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
    /// Exports always use a plain white page
    pub const EXPORT_BACKGROUND: Color = super::EXPORT_BACKGROUND;
}

/// Background grid and rulers
pub mod grid {
    use super::Color;
    pub const MINOR: Color = super::GRID_MINOR;
    pub const MAJOR: Color = super::GRID_MAJOR;
    pub const RULER_BACKGROUND: Color = super::RULER_BACKGROUND;
    pub const RULER_TICK: Color = super::RULER_TICK;
    pub const RULER_TEXT: Color = super::RULER_TEXT;
}

/// Room fills, outlines and annotation text
pub mod room {
    use super::Color;
    pub const PALETTE: [Color; 6] = super::ROOM_PALETTE;
    pub const OUTLINE: Color = super::ROOM_OUTLINE;
    pub const TEXT: Color = super::ROOM_TEXT;
    pub const DIMENSION_TEXT: Color = super::DIMENSION_TEXT;
    /// Alpha applied to a room's color for its fill
    pub const FILL_ALPHA: f32 = 0.55;

    /// Palette color for the nth room created
    pub fn palette_color(n: usize) -> Color {
        PALETTE[n % PALETTE.len()]
    }
}

/// Committed entity defaults
pub mod entity {
    use super::Color;
    pub const WALL: Color = super::WALL;
    pub const STROKE: Color = super::STROKE_DEFAULT;
    pub const LABEL: Color = super::LABEL_DEFAULT;
    pub const PLACEMENT_FILL: Color = super::PLACEMENT_FILL;
    pub const PLACEMENT_OUTLINE: Color = super::PLACEMENT_OUTLINE;
}

/// Selection highlight
pub mod selection {
    use super::Color;
    pub const HIGHLIGHT: Color = super::SELECTED;
}

/// In-progress draft overlay styles
pub mod draft {
    use super::Color;

    pub const LINE_COLOR: Color = super::DRAFT_LINE;
    pub const FILL_COLOR: Color = super::DRAFT_FILL;
    /// Ring drawn around the first vertex of an open room
    pub const CLOSURE_TARGET: Color = super::CLOSURE_TARGET;

    /// Width of draft outlines
    pub const LINE_WIDTH: f64 = 2.0;
    /// Dash pattern for open room outlines [dash_length, gap_length]
    pub const LINE_DASH: [f64; 2] = [6.0, 4.0];
    /// Dash offset
    pub const LINE_DASH_OFFSET: f64 = 0.0;
    /// Radius of vertex dots
    pub const DOT_RADIUS: f64 = 3.5;
    /// Radius of the first-vertex ring
    pub const FIRST_VERTEX_RADIUS: f64 = 7.0;
}

/// Sizes for rendering
pub mod size {
    /// Room outline width (screen pixels)
    pub const ROOM_OUTLINE_WIDTH: f64 = 1.5;
    /// Room outline width when selected
    pub const ROOM_SELECTED_WIDTH: f64 = 3.0;
    /// Wall thickness (grid units)
    pub const WALL_THICKNESS: f64 = 0.5;
    /// Default freehand stroke width (screen pixels at 100%)
    pub const STROKE_WIDTH: f64 = 2.0;
    /// Default label font size (screen pixels at 100%)
    pub const LABEL_FONT_SIZE: f64 = 14.0;
    /// Room name font size
    pub const ROOM_FONT_SIZE: f64 = 13.0;
    /// Dimension annotation font size
    pub const DIMENSION_FONT_SIZE: f64 = 11.0;
    /// Thickness of the rulers along the top and left edges
    pub const RULER_THICKNESS: f64 = 18.0;
    /// Ruler label font size
    pub const RULER_FONT_SIZE: f64 = 9.0;
    /// Average glyph advance as a fraction of the font size
    pub const GLYPH_ADVANCE: f64 = 0.6;
    /// Minor grid line width
    pub const GRID_MINOR_WIDTH: f64 = 0.5;
    /// Major grid line width
    pub const GRID_MAJOR_WIDTH: f64 = 1.0;
}
