// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Overlay for the entity under construction

use super::{DisplayList, FrameInput, TextAnchor, screen_path};
use crate::editing::{Draft, ViewPort};
use crate::theme;
use kurbo::{Cap, Circle, Join, Line, Point, Stroke};

fn dashed() -> Stroke {
    Stroke::new(theme::draft::LINE_WIDTH)
        .with_dashes(theme::draft::LINE_DASH_OFFSET, theme::draft::LINE_DASH)
}

fn solid() -> Stroke {
    Stroke::new(theme::draft::LINE_WIDTH).with_join(Join::Round)
}

pub(super) fn draw_draft(list: &mut DisplayList, input: &FrameInput) {
    let vp = input.viewport;
    match input.draft {
        Draft::None => {}
        Draft::Room { points, closed } => {
            draw_room_draft(list, points, *closed, input);
        }
        Draft::Wall { start } => {
            let start = vp.to_screen(*start);
            if let Some(hover) = input.hover {
                let line = Line::new(start, vp.to_screen(hover));
                list.stroke(&line, theme::draft::LINE_COLOR, dashed());
            }
            draw_dot(list, start);
        }
        Draft::Stroke { points } => {
            if points.len() >= 2 {
                let style = solid().with_caps(Cap::Round);
                list.stroke(&screen_path(points, vp, false), theme::entity::STROKE, style);
            } else if let Some(&p) = points.first() {
                draw_dot(list, vp.to_screen(p));
            }
        }
        Draft::Text { position, text, .. } => {
            // Trailing bar stands in for the caret
            list.text(
                format!("{text}|"),
                vp.to_screen(*position),
                theme::size::LABEL_FONT_SIZE * vp.zoom_factor(),
                theme::draft::LINE_COLOR,
                TextAnchor::Middle,
            );
        }
    }
}

fn draw_room_draft(list: &mut DisplayList, points: &[Point], closed: bool, input: &FrameInput) {
    let vp = input.viewport;
    let Some(&first) = points.first() else {
        return;
    };

    if closed {
        let outline = screen_path(points, vp, true);
        list.fill(&outline, theme::draft::FILL_COLOR);
        list.stroke(&outline, theme::draft::LINE_COLOR, solid());
    } else {
        if points.len() >= 2 {
            list.stroke(&screen_path(points, vp, false), theme::draft::LINE_COLOR, dashed());
        }
        // Rubber band from the newest vertex to the pointer
        if let (Some(&last), Some(hover)) = (points.last(), input.hover) {
            let line = Line::new(vp.to_screen(last), vp.to_screen(hover));
            list.stroke(&line, theme::draft::LINE_COLOR, dashed());
        }
    }

    for &p in &points[1..] {
        draw_dot(list, vp.to_screen(p));
    }

    let first = vp.to_screen(first);
    let ring = Circle::new(first, theme::draft::FIRST_VERTEX_RADIUS);
    if !closed && points.len() >= 3 && hover_near(input, vp, first) {
        list.fill(&ring, theme::draft::CLOSURE_TARGET);
    }
    list.stroke(&ring, theme::draft::CLOSURE_TARGET, Stroke::new(theme::draft::LINE_WIDTH));
    draw_dot(list, first);
}

/// Whether the pointer is inside the closure radius of a screen point
fn hover_near(input: &FrameInput, vp: &ViewPort, target: Point) -> bool {
    input
        .hover
        .is_some_and(|h| (vp.to_screen(h) - target).hypot() <= input.options.closure_radius)
}

fn draw_dot(list: &mut DisplayList, center: Point) {
    list.fill(&Circle::new(center, theme::draft::DOT_RADIUS), theme::draft::LINE_COLOR);
}
