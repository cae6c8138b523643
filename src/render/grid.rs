// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Background grid and edge rulers

use super::{DisplayList, TextAnchor, format_feet};
use crate::editing::ViewPort;
use crate::settings;
use crate::theme;
use kurbo::{BezPath, Line, Point, Rect, Size, Stroke};

/// Grid density for a zoom band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBand {
    /// Minor line spacing in grid units
    pub minor: f64,
    /// Every Nth minor line is a major line
    pub major_n: u32,
}

impl GridBand {
    /// Major line spacing in grid units
    pub fn major(&self) -> f64 {
        self.minor * self.major_n as f64
    }
}

/// Pick the grid density for a zoom level
///
/// Bands are checked from the closest zoom down, and each applies from its
/// minimum zoom upward.
pub fn grid_band(zoom_percent: f64) -> GridBand {
    use settings::grid::{close, far, mid};

    if zoom_percent >= close::MIN_ZOOM {
        GridBand {
            minor: close::MINOR,
            major_n: close::MAJOR_N,
        }
    } else if zoom_percent >= mid::MIN_ZOOM {
        GridBand {
            minor: mid::MINOR,
            major_n: mid::MAJOR_N,
        }
    } else {
        debug_assert!(zoom_percent >= far::MIN_ZOOM);
        GridBand {
            minor: far::MINOR,
            major_n: far::MAJOR_N,
        }
    }
}

/// Indices of the grid lines covering `[min, max]` at `spacing`
fn line_range(min: f64, max: f64, spacing: f64) -> std::ops::RangeInclusive<i64> {
    (min / spacing).floor() as i64..=(max / spacing).ceil() as i64
}

fn is_major(index: i64, major_n: u32) -> bool {
    major_n > 0 && index.unsigned_abs() % major_n as u64 == 0
}

/// Draw minor and major grid lines over the visible area
///
/// Lines are batched into one path per weight.
pub(super) fn draw_grid(list: &mut DisplayList, vp: &ViewPort, canvas_size: Size) {
    let band = grid_band(vp.zoom_percent);
    let visible = vp.visible_grid_rect(canvas_size);
    let mut minor = BezPath::new();
    let mut major = BezPath::new();

    for ix in line_range(visible.x0, visible.x1, band.minor) {
        let x = vp.to_screen(Point::new(ix as f64 * band.minor, 0.0)).x;
        let target = if is_major(ix, band.major_n) { &mut major } else { &mut minor };
        target.move_to((x, 0.0));
        target.line_to((x, canvas_size.height));
    }
    for iy in line_range(visible.y0, visible.y1, band.minor) {
        let y = vp.to_screen(Point::new(0.0, iy as f64 * band.minor)).y;
        let target = if is_major(iy, band.major_n) { &mut major } else { &mut minor };
        target.move_to((0.0, y));
        target.line_to((canvas_size.width, y));
    }

    list.stroke(&minor, theme::grid::MINOR, Stroke::new(theme::size::GRID_MINOR_WIDTH));
    list.stroke(&major, theme::grid::MAJOR, Stroke::new(theme::size::GRID_MAJOR_WIDTH));
}

/// Draw the top and left rulers, labelled in feet at major lines
pub(super) fn draw_rulers(list: &mut DisplayList, vp: &ViewPort, canvas_size: Size) {
    let band = grid_band(vp.zoom_percent);
    let visible = vp.visible_grid_rect(canvas_size);
    let t = theme::size::RULER_THICKNESS;
    let font = theme::size::RULER_FONT_SIZE;

    list.fill(&Rect::new(0.0, 0.0, canvas_size.width, t), theme::grid::RULER_BACKGROUND);
    list.fill(&Rect::new(0.0, t, t, canvas_size.height), theme::grid::RULER_BACKGROUND);

    let mut ticks = BezPath::new();
    ticks.move_to((t, t));
    ticks.line_to((canvas_size.width, t));
    ticks.move_to((t, t));
    ticks.line_to((t, canvas_size.height));

    // Top ruler
    for ix in line_range(visible.x0, visible.x1, band.minor) {
        let value = ix as f64 * band.minor;
        let x = vp.to_screen(Point::new(value, 0.0)).x;
        if x < t || x > canvas_size.width {
            continue;
        }
        let major = is_major(ix, band.major_n);
        let top = if major { t * 0.4 } else { t * 0.75 };
        ticks.move_to((x, top));
        ticks.line_to((x, t));
        if major {
            list.text(
                format_feet(value),
                Point::new(x + 2.0, t * 0.35),
                font,
                theme::grid::RULER_TEXT,
                TextAnchor::Start,
            );
        }
    }

    // Left ruler
    for iy in line_range(visible.y0, visible.y1, band.minor) {
        let value = iy as f64 * band.minor;
        let y = vp.to_screen(Point::new(0.0, value)).y;
        if y < t || y > canvas_size.height {
            continue;
        }
        let major = is_major(iy, band.major_n);
        let left = if major { t * 0.4 } else { t * 0.75 };
        ticks.move_to((left, y));
        ticks.line_to((t, y));
        if major {
            list.text(
                format_feet(value),
                Point::new(1.0, y - font * 0.7),
                font,
                theme::grid::RULER_TEXT,
                TextAnchor::Start,
            );
        }
    }

    list.stroke(&ticks, theme::grid::RULER_TICK, Stroke::new(1.0));
    // Corner square covers where the rulers meet
    list.fill(&Rect::new(0.0, 0.0, t, t), theme::grid::RULER_BACKGROUND);
    list.stroke(&Line::new((0.0, t), (t, t)), theme::grid::RULER_TICK, Stroke::new(1.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawItem;
    use kurbo::Vec2;

    #[test]
    fn bands_by_zoom() {
        assert_eq!(grid_band(25.0).minor, 5.0);
        assert_eq!(grid_band(49.9).minor, 5.0);
        assert_eq!(grid_band(50.0).minor, 1.0);
        assert_eq!(grid_band(100.0).major(), 5.0);
        assert_eq!(grid_band(200.0).minor, 0.5);
        assert_eq!(grid_band(400.0).major(), 1.0);
    }

    #[test]
    fn major_index() {
        assert!(is_major(0, 5));
        assert!(is_major(-10, 5));
        assert!(!is_major(3, 5));
        assert!(!is_major(3, 0));
    }

    #[test]
    fn grid_is_two_batched_strokes() {
        let vp = ViewPort::new();
        let size = Size::new(800.0, 600.0);
        let mut list = DisplayList::new(size);
        draw_grid(&mut list, &vp, size);
        assert_eq!(list.len(), 2);
        assert!(list.items.iter().all(|i| matches!(i, DrawItem::Stroke { .. })));
    }

    #[test]
    fn rulers_label_major_lines() {
        let vp = ViewPort::new();
        let size = Size::new(800.0, 600.0);
        let mut list = DisplayList::new(size);
        draw_rulers(&mut list, &vp, size);
        let texts: Vec<&str> = list.texts().collect();
        // 100% zoom: majors every 5 ft = 100 px; 0 ft is under the corner
        assert!(texts.contains(&"5'"));
        assert!(texts.contains(&"35'"));
        assert!(!texts.contains(&"0'"));
    }

    #[test]
    fn rulers_follow_pan() {
        let mut vp = ViewPort::new();
        vp.pan_by(Vec2::new(200.0, 0.0));
        let size = Size::new(800.0, 600.0);
        let mut list = DisplayList::new(size);
        draw_rulers(&mut list, &vp, size);
        let texts: Vec<&str> = list.texts().collect();
        assert!(texts.contains(&"-5'"));
    }
}
