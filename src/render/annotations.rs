// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Room dimension annotations

use super::{DisplayList, TextAnchor};
use crate::editing::ViewPort;
use crate::model::Room;
use crate::theme;
use kurbo::{Point, Size};

/// Format a length in feet, dropping the decimal on whole numbers
pub fn format_feet(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 0.05 {
        // Avoid printing "-0'"
        format!("{}'", rounded as i64)
    } else {
        format!("{:.1}'", value)
    }
}

/// `W' × H'` for a room's bounding size
pub fn dimension_text(size: Size) -> String {
    format!("{} × {}", format_feet(size.width), format_feet(size.height))
}

pub(super) fn draw_dimensions(list: &mut DisplayList, room: &Room, vp: &ViewPort, at: Point) {
    let size = room.dimensions();
    if size.width <= 0.0 && size.height <= 0.0 {
        return;
    }
    list.text(
        dimension_text(size),
        at,
        theme::size::DIMENSION_FONT_SIZE * vp.zoom_factor(),
        theme::room::DIMENSION_TEXT,
        TextAnchor::Middle,
    );
}
