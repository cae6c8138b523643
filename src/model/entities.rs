// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Committed scene entities: rooms, walls, freehand paths and text labels.
//!
//! All geometry is stored in grid space (one unit per foot), so it is
//! independent of zoom, pan and output resolution.

use super::EntityId;
use crate::geometry;
use crate::theme;
use kurbo::{Point, Rect, Size};
use peniko::Color;

// ===== Room =====

/// A closed room polygon
#[derive(Debug, Clone)]
pub struct Room {
    pub id: EntityId,
    /// Vertices in grid space, in drawing order
    pub points: Vec<Point>,
    pub label: String,
    /// Shoelace area of `points` at the last recompute (square feet)
    pub area: f64,
    pub color: Color,
    pub selected: bool,
}

impl Room {
    /// Create a room and compute its area
    pub fn new(points: Vec<Point>, label: impl Into<String>, color: Color) -> Self {
        let area = geometry::polygon_area(&points);
        Self {
            id: EntityId::allocate(),
            points,
            label: label.into(),
            area,
            color,
            selected: false,
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        geometry::bounding_box(&self.points)
    }

    /// Width and height in grid units
    ///
    /// A rotated rectangle reports its side lengths; any other shape reports
    /// its bounding box.
    pub fn dimensions(&self) -> Size {
        if let [a, b, c, _] = self.points[..]
            && !self.is_axis_aligned_rectangle()
            && self.is_rectangle()
        {
            return Size::new((b - a).hypot(), (c - b).hypot());
        }
        self.bounds().map(|r| r.size()).unwrap_or(Size::ZERO)
    }

    pub fn is_rectangle(&self) -> bool {
        geometry::is_rectangle(&self.points)
    }

    /// A rectangle whose sides run along the grid
    pub fn is_axis_aligned_rectangle(&self) -> bool {
        geometry::is_axis_aligned_rectangle(&self.points)
    }

    pub fn contains(&self, grid_pos: Point) -> bool {
        geometry::point_in_polygon(grid_pos, &self.points)
    }
}

// ===== Wall =====

/// A straight wall segment between two grid points
#[derive(Debug, Clone)]
pub struct Wall {
    pub id: EntityId,
    pub start: Point,
    pub end: Point,
}

impl Wall {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: EntityId::allocate(),
            start,
            end,
        }
    }

    /// Length in grid units
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

// ===== FreehandPath =====

/// A freehand stroke, possibly straightened to two points
#[derive(Debug, Clone)]
pub struct FreehandPath {
    pub id: EntityId,
    pub points: Vec<Point>,
    pub color: Color,
    /// Stroke width in screen pixels at 100% zoom
    pub stroke_width: f64,
}

impl FreehandPath {
    pub fn new(points: Vec<Point>, color: Color, stroke_width: f64) -> Self {
        Self {
            id: EntityId::allocate(),
            points,
            color,
            stroke_width,
        }
    }

    /// Whether the stroke was collapsed to a straight line
    pub fn is_straight(&self) -> bool {
        self.points.len() == 2
    }

    pub fn bounds(&self) -> Option<Rect> {
        geometry::bounding_box(&self.points)
    }
}

// ===== TextLabel =====

/// A free-standing text label, centred on its position
#[derive(Debug, Clone)]
pub struct TextLabel {
    pub id: EntityId,
    pub position: Point,
    pub text: String,
    pub color: Color,
    /// Font size in screen pixels at 100% zoom
    pub font_size: f64,
}

impl TextLabel {
    pub fn new(position: Point, text: impl Into<String>) -> Self {
        Self {
            id: EntityId::allocate(),
            position,
            text: text.into(),
            color: theme::entity::LABEL,
            font_size: theme::size::LABEL_FONT_SIZE,
        }
    }

    /// Estimated text box in grid space
    ///
    /// There is no font shaping in the core, so the width is estimated from
    /// the character count and an average glyph advance.
    pub fn text_box(&self, cell_size: f64) -> Rect {
        let font = self.font_size / cell_size;
        let chars = self.text.chars().count().max(1) as f64;
        let size = Size::new(chars * font * theme::size::GLYPH_ADVANCE, font * 1.2);
        Rect::from_center_size(self.position, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_room(w: f64, h: f64) -> Room {
        Room::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(w, 0.0),
                Point::new(w, h),
                Point::new(0.0, h),
            ],
            "Kitchen",
            theme::room::palette_color(0),
        )
    }

    #[test]
    fn room_area_is_computed_on_creation() {
        let room = rect_room(12.0, 10.0);
        assert_eq!(room.area, 120.0);
        assert!(room.is_rectangle());
        assert_eq!(room.dimensions(), Size::new(12.0, 10.0));
        assert!(!room.selected);
    }

    #[test]
    fn rotated_rectangle_reports_side_lengths() {
        let room = Room::new(
            vec![
                Point::new(0.0, 3.0),
                Point::new(3.0, 0.0),
                Point::new(7.0, 4.0),
                Point::new(4.0, 7.0),
            ],
            "Den",
            theme::room::palette_color(0),
        );
        assert!(room.is_rectangle());
        assert!(!room.is_axis_aligned_rectangle());
        let size = room.dimensions();
        assert!((size.width - 18f64.sqrt()).abs() < 1e-9);
        assert!((size.height - 32f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn room_contains() {
        let room = rect_room(4.0, 4.0);
        assert!(room.contains(Point::new(2.0, 2.0)));
        assert!(!room.contains(Point::new(5.0, 2.0)));
    }

    #[test]
    fn wall_length_and_bounds() {
        let wall = Wall::new(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(wall.length(), 5.0);
        assert_eq!(wall.bounds(), Rect::new(1.0, 1.0, 4.0, 5.0));
    }

    #[test]
    fn label_text_box_grows_with_text() {
        let short = TextLabel::new(Point::new(10.0, 10.0), "A");
        let long = TextLabel::new(Point::new(10.0, 10.0), "Living room");
        let a = short.text_box(20.0);
        let b = long.text_box(20.0);
        assert!(b.width() > a.width());
        assert_eq!(a.center(), Point::new(10.0, 10.0));
    }
}
