// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Mouse state machine that turns raw pointer events into clicks and drags.
//!
//! The canvas feeds `mouse_down` / `mouse_moved` / `mouse_up` into `Mouse`,
//! which decides when a press has travelled far enough to count as a drag
//! and calls the matching `MouseDelegate` method. Tools implement the
//! delegate and never see raw events.

use crate::settings;
use kurbo::{Point, Vec2};

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard modifiers held during a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// Position in screen space
    pub pos: Point,
    pub button: Option<MouseButton>,
    /// 1 for a single click, 2 for a double-click
    pub count: u8,
}

impl MouseEvent {
    pub fn new(pos: Point, button: Option<MouseButton>) -> Self {
        Self {
            pos,
            button,
            count: 1,
        }
    }

    /// Same event, tagged with a click count
    pub fn with_count(mut self, count: u8) -> Self {
        self.count = count;
        self
    }
}

/// An in-progress drag, all positions in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub start: Point,
    pub prev: Point,
    pub current: Point,
}

impl Drag {
    /// Movement since the previous drag event
    pub fn delta(&self) -> Vec2 {
        self.current - self.prev
    }
}

/// Receiver of interpreted mouse gestures
///
/// All methods default to no-ops so tools only implement what they use.
#[allow(unused_variables)]
pub trait MouseDelegate {
    type Data;

    fn left_down(&mut self, event: MouseEvent, data: &mut Self::Data) {}
    fn left_up(&mut self, event: MouseEvent, data: &mut Self::Data) {}
    fn left_click(&mut self, event: MouseEvent, data: &mut Self::Data) {}
    fn mouse_moved(&mut self, event: MouseEvent, data: &mut Self::Data) {}
    fn left_drag_began(&mut self, event: MouseEvent, drag: Drag, data: &mut Self::Data) {}
    fn left_drag_changed(&mut self, event: MouseEvent, drag: Drag, data: &mut Self::Data) {}
    fn left_drag_ended(&mut self, event: MouseEvent, drag: Drag, data: &mut Self::Data) {}
    fn cancel(&mut self, data: &mut Self::Data) {}
}

#[derive(Debug, Clone, Copy)]
enum MouseState {
    /// No button held
    Up,
    /// Left button held, not yet a drag
    Down(MouseEvent),
    /// Left button held and moved past the drag threshold
    Drag { down: MouseEvent, drag: Drag },
}

/// Click/drag classifier for the left button
#[derive(Debug, Clone)]
pub struct Mouse {
    state: MouseState,
    drag_threshold: f64,
}

impl Mouse {
    pub fn new() -> Self {
        Self::with_threshold(settings::interaction::DRAG_THRESHOLD)
    }

    pub fn with_threshold(drag_threshold: f64) -> Self {
        Self {
            state: MouseState::Up,
            drag_threshold,
        }
    }

    /// Whether the left button is currently held
    pub fn is_down(&self) -> bool {
        !matches!(self.state, MouseState::Up)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, MouseState::Drag { .. })
    }

    pub fn mouse_down<T>(
        &mut self,
        event: MouseEvent,
        delegate: &mut dyn MouseDelegate<Data = T>,
        data: &mut T,
    ) {
        if event.button != Some(MouseButton::Left) {
            return;
        }
        self.state = MouseState::Down(event);
        delegate.left_down(event, data);
    }

    pub fn mouse_moved<T>(
        &mut self,
        event: MouseEvent,
        delegate: &mut dyn MouseDelegate<Data = T>,
        data: &mut T,
    ) {
        match self.state {
            MouseState::Up => delegate.mouse_moved(event, data),
            MouseState::Down(down) => {
                if (event.pos - down.pos).hypot() < self.drag_threshold {
                    return;
                }
                let drag = Drag {
                    start: down.pos,
                    prev: down.pos,
                    current: event.pos,
                };
                self.state = MouseState::Drag { down, drag };
                delegate.left_drag_began(event, drag, data);
            }
            MouseState::Drag { down, drag } => {
                let drag = Drag {
                    start: drag.start,
                    prev: drag.current,
                    current: event.pos,
                };
                self.state = MouseState::Drag { down, drag };
                delegate.left_drag_changed(event, drag, data);
            }
        }
    }

    pub fn mouse_up<T>(
        &mut self,
        event: MouseEvent,
        delegate: &mut dyn MouseDelegate<Data = T>,
        data: &mut T,
    ) {
        match std::mem::replace(&mut self.state, MouseState::Up) {
            MouseState::Up => {}
            MouseState::Down(down) => {
                delegate.left_up(event, data);
                delegate.left_click(event.with_count(down.count), data);
            }
            MouseState::Drag { drag, .. } => {
                let drag = Drag {
                    start: drag.start,
                    prev: drag.current,
                    current: event.pos,
                };
                delegate.left_drag_ended(event, drag, data);
                delegate.left_up(event, data);
            }
        }
    }

    /// Abort any press or drag in progress
    pub fn cancel<T>(&mut self, delegate: &mut dyn MouseDelegate<Data = T>, data: &mut T) {
        self.state = MouseState::Up;
        delegate.cancel(data);
    }
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new()
    }
}
