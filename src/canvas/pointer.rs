// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer and touch event handlers for Canvas

use super::Canvas;
use crate::editing::{MouseButton, MouseEvent};
use crate::tools::ToolId;
use kurbo::Point;
use std::collections::BTreeMap;

/// How the current touch sequence is being interpreted
///
/// One finger draws with the active tool. A second finger before the first
/// lifts turns the sequence into a pinch: the draw is cancelled and the
/// sequence stays a pinch until every finger is up.
#[derive(Debug, Clone, Default)]
pub(super) enum TouchGesture {
    #[default]
    Idle,
    Draw {
        id: u64,
        pos: Point,
    },
    Pinch {
        touches: BTreeMap<u64, Point>,
        /// Midpoint and finger spread at the previous update
        last: Option<(Point, f64)>,
    },
}

impl Canvas {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    /// Primary button pressed at a screen point
    ///
    /// `time_ms` is any monotonic millisecond clock; it is only compared
    /// against the previous press for double-click detection.
    pub fn pointer_down(&mut self, screen_pos: Point, time_ms: u64) {
        tracing::debug!(
            "Pointer down at {:?}, current_tool: {:?}",
            screen_pos,
            self.tool_id()
        );
        self.update_hover(screen_pos);

        if self.is_double_click(screen_pos, time_ms) && self.handle_double_click(screen_pos) {
            self.after_event();
            return;
        }

        let event = MouseEvent::new(screen_pos, Some(MouseButton::Left));
        self.with_tool(|mouse, tool, session| mouse.mouse_down(event, tool, session));
        self.after_event();
    }

    pub fn pointer_move(&mut self, screen_pos: Point) {
        self.update_hover(screen_pos);
        let event = MouseEvent::new(screen_pos, None);
        self.with_tool(|mouse, tool, session| mouse.mouse_moved(event, tool, session));
        self.after_event();
    }

    pub fn pointer_up(&mut self, screen_pos: Point) {
        let event = MouseEvent::new(screen_pos, Some(MouseButton::Left));
        self.with_tool(|mouse, tool, session| mouse.mouse_up(event, tool, session));
        self.after_event();
    }

    /// The pointer left the canvas
    ///
    /// A press in progress is cancelled, which discards a freehand stroke.
    pub fn pointer_leave(&mut self) {
        self.session.hover = None;
        if self.mouse.is_down() {
            tracing::debug!("Pointer left the canvas mid-gesture");
            self.cancel_gesture();
        }
        self.after_event();
    }

    /// Mouse wheel: negative `delta_y` zooms in, around the canvas centre
    pub fn scroll_zoom(&mut self, delta_y: f64) {
        if delta_y == 0.0 {
            return;
        }
        let step = self.session.config.view.zoom_step;
        let delta = if delta_y < 0.0 { step } else { -step };
        if self.session.viewport.zoom_by(delta, self.session.canvas_size) {
            tracing::debug!("Wheel zoom to {}%", self.session.viewport.zoom_percent);
        }
        self.after_event();
    }

    fn update_hover(&mut self, screen_pos: Point) {
        let grid_pos = self.session.viewport.to_grid(screen_pos);
        self.session.hover = Some(grid_pos);
        self.observer.pointer_moved(grid_pos);
    }

    fn is_double_click(&mut self, position: Point, time_ms: u64) -> bool {
        let interaction = &self.session.config.interaction;
        let is_double = match self.last_click {
            Some((last_time, last_pos)) => {
                time_ms >= last_time
                    && time_ms - last_time < interaction.double_click_ms
                    && (position - last_pos).hypot() < interaction.double_click_distance
            }
            None => false,
        };

        // Reset after a double-click so a third click starts fresh
        self.last_click = if is_double {
            None
        } else {
            Some((time_ms, position))
        };
        is_double
    }

    /// Double-click on a label re-opens it for editing
    fn handle_double_click(&mut self, screen_pos: Point) -> bool {
        if !matches!(self.tool_id(), ToolId::Label | ToolId::Select) {
            return false;
        }
        let Some(hit) = self.session.hit_label(screen_pos) else {
            return false;
        };

        tracing::info!("Double-click on label {}", hit.id);
        // The first click of the pair may have started an empty text draft
        if self.session.is_typing() {
            self.session.submit_text();
        }
        self.set_tool(ToolId::Label);
        self.session.edit_label(hit.id)
    }

    // ============================================================================
    // TOUCH
    // ============================================================================

    pub fn touch_start(&mut self, id: u64, screen_pos: Point, time_ms: u64) {
        match std::mem::take(&mut self.touches) {
            TouchGesture::Idle => {
                self.touches = TouchGesture::Draw { id, pos: screen_pos };
                self.pointer_down(screen_pos, time_ms);
            }
            TouchGesture::Draw { id: first, pos } => {
                tracing::debug!("Second touch: switching to pinch");
                self.cancel_gesture();
                self.after_event();
                let touches = BTreeMap::from([(first, pos), (id, screen_pos)]);
                self.touches = TouchGesture::Pinch {
                    touches,
                    last: None,
                };
            }
            TouchGesture::Pinch { mut touches, .. } => {
                touches.insert(id, screen_pos);
                self.touches = TouchGesture::Pinch {
                    touches,
                    last: None,
                };
            }
        }
    }

    pub fn touch_move(&mut self, id: u64, screen_pos: Point) {
        match &mut self.touches {
            TouchGesture::Idle => {}
            TouchGesture::Draw { id: active, pos } => {
                if *active == id {
                    *pos = screen_pos;
                    self.pointer_move(screen_pos);
                }
            }
            TouchGesture::Pinch { touches, last } => {
                let Some(slot) = touches.get_mut(&id) else {
                    return;
                };
                *slot = screen_pos;

                let mut fingers = touches.values();
                let (Some(&a), Some(&b)) = (fingers.next(), fingers.next()) else {
                    return;
                };
                let mid = a.midpoint(b);
                let spread = a.distance(b);
                let previous = last.replace((mid, spread));
                if let Some((prev_mid, prev_spread)) = previous {
                    self.apply_pinch(mid - prev_mid, spread, prev_spread);
                }
            }
        }
    }

    pub fn touch_end(&mut self, id: u64, screen_pos: Point) {
        match &mut self.touches {
            TouchGesture::Idle => {}
            TouchGesture::Draw { id: active, .. } => {
                if *active == id {
                    self.touches = TouchGesture::Idle;
                    self.pointer_up(screen_pos);
                }
            }
            TouchGesture::Pinch { touches, last } => {
                touches.remove(&id);
                *last = None;
                if touches.is_empty() {
                    tracing::debug!("Pinch ended");
                    self.touches = TouchGesture::Idle;
                }
            }
        }
    }

    /// The host cancelled the touch sequence
    pub fn touch_cancel(&mut self) {
        if matches!(self.touches, TouchGesture::Draw { .. }) {
            self.cancel_gesture();
        }
        self.touches = TouchGesture::Idle;
        self.after_event();
    }

    fn apply_pinch(&mut self, pan: kurbo::Vec2, spread: f64, prev_spread: f64) {
        let viewport = &mut self.session.viewport;
        viewport.pan_by(pan);
        if prev_spread > f64::EPSILON {
            let zoom = viewport.zoom_percent * spread / prev_spread;
            let center = self.session.canvas_size.to_rect().center();
            viewport.set_zoom(zoom, center);
        }
        self.after_event();
    }
}
