// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas host surface
//!
//! `Canvas` is what a host embeds: it owns the edit session and the mouse
//! state machine, turns raw pointer, touch and key input into tool calls,
//! runs commands, and reports back through a `CanvasObserver`.

mod commands;
mod keyboard;
mod pointer;

pub use commands::{CanvasCommand, PanDirection};
pub use keyboard::Key;

use crate::config::CanvasConfig;
use crate::editing::{EditSession, Mouse};
use crate::model::{EntityId, PayloadError, PlacementPayload, Scene};
use crate::render::{DisplayList, render_frame};
use crate::tools::{ToolBox, ToolId};
use kurbo::{Point, Size};
use pointer::TouchGesture;

/// Callbacks to the UI chrome around the canvas
///
/// Every method defaults to a no-op.
#[allow(unused_variables)]
pub trait CanvasObserver {
    /// Committed entities changed (including selection)
    fn scene_changed(&mut self, scene: &Scene) {}

    /// Pointer position in grid space, for a coordinate readout
    fn pointer_moved(&mut self, grid_pos: Point) {}

    fn pan_capability_changed(&mut self, capability: PanCapability) {}

    /// A message for the user, such as why an export produced nothing
    fn notice(&mut self, message: &str) {}

    fn exported(&mut self, image: &crate::export::ExportedImage) {}
}

/// Observer that ignores everything
#[derive(Debug, Default)]
pub struct NullObserver;

impl CanvasObserver for NullObserver {}

/// Which pan directions would bring more content into view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanCapability {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl PanCapability {
    pub fn can_pan(&self, direction: PanDirection) -> bool {
        match direction {
            PanDirection::Left => self.left,
            PanDirection::Right => self.right,
            PanDirection::Up => self.up,
            PanDirection::Down => self.down,
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// The interactive canvas
pub struct Canvas {
    pub session: EditSession,
    mouse: Mouse,
    observer: Box<dyn CanvasObserver>,
    touches: TouchGesture,
    /// Time (ms) and screen position of the last press, for double-click
    last_click: Option<(u64, Point)>,
    pan_capability: PanCapability,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_observer(config, Box::new(NullObserver))
    }

    pub fn with_observer(config: CanvasConfig, observer: Box<dyn CanvasObserver>) -> Self {
        let mouse = Mouse::with_threshold(config.interaction.drag_threshold);
        Self {
            session: EditSession::new(config),
            mouse,
            observer,
            touches: TouchGesture::default(),
            last_click: None,
            pan_capability: PanCapability::default(),
        }
    }

    pub fn tool_id(&self) -> ToolId {
        self.session.tool_id()
    }

    pub fn scene(&self) -> &Scene {
        &self.session.scene
    }

    pub fn pan_capability(&self) -> PanCapability {
        self.pan_capability
    }

    /// The canvas was laid out at a new size
    pub fn resize(&mut self, size: Size) {
        if self.session.canvas_size == size {
            return;
        }
        tracing::debug!("Canvas resized to {}x{}", size.width, size.height);
        self.session.canvas_size = size;
        self.after_event();
    }

    /// Switch tools
    ///
    /// Any press or drag in progress is cancelled first so the old tool can
    /// clean up, then the session drops the draft.
    pub fn set_tool(&mut self, id: ToolId) {
        if self.session.tool_id() == id {
            return;
        }
        self.cancel_gesture();
        self.session.set_tool(id);
        self.after_event();
    }

    /// Drop a placement from an external palette at a screen point
    pub fn drop_placement(
        &mut self,
        payload: &PlacementPayload,
        screen_pos: Point,
    ) -> Result<EntityId, PayloadError> {
        let result = self.session.drop_placement(payload, screen_pos);
        if let Err(err) = &result {
            tracing::warn!("Rejected placement {:?}: {}", payload.kind, err);
        }
        self.after_event();
        result
    }

    /// Build the display list for the current state
    pub fn render(&self) -> DisplayList {
        render_frame(&self.session.frame_input())
    }

    // ============================================================================
    // INTERNALS
    // ============================================================================

    /// Run `f` with the current tool taken out of the session
    fn with_tool(&mut self, f: impl FnOnce(&mut Mouse, &mut ToolBox, &mut EditSession)) {
        let placeholder = ToolBox::for_id(ToolId::Pan);
        let mut tool = std::mem::replace(&mut self.session.current_tool, placeholder);
        f(&mut self.mouse, &mut tool, &mut self.session);
        self.session.current_tool = tool;
    }

    /// Abort the current press or drag, letting the tool undo its preview
    fn cancel_gesture(&mut self) {
        self.with_tool(|mouse, tool, session| mouse.cancel(tool, session));
        self.mouse = Mouse::with_threshold(self.session.config.interaction.drag_threshold);
    }

    /// Notify the observer about whatever the last event changed
    fn after_event(&mut self) {
        if self.session.take_scene_changed() {
            self.observer.scene_changed(&self.session.scene);
        }

        let capability = self.compute_pan_capability();
        if capability != self.pan_capability {
            self.pan_capability = capability;
            self.observer.pan_capability_changed(capability);
        }
    }

    fn compute_pan_capability(&self) -> PanCapability {
        let size = self.session.canvas_size;
        if size.is_zero_area() {
            return PanCapability::default();
        }
        let Some(content) = self.session.scene.content_bounds(self.session.viewport.cell_size)
        else {
            return PanCapability::default();
        };
        let visible = self.session.viewport.visible_grid_rect(size);
        PanCapability {
            left: content.x0 < visible.x0,
            right: content.x1 > visible.x1,
            up: content.y0 < visible.y0,
            down: content.y1 > visible.y1,
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::editing::Modifiers;
    use crate::model::{Entity, PlacementShape, Wall};

    #[test]
    fn room_commit_notifies_observer() {
        let (mut canvas, log) = canvas();
        canvas.set_tool(ToolId::Room);
        click(&mut canvas, 20.0, 20.0, 0);
        click(&mut canvas, 120.0, 20.0, 1000);
        click(&mut canvas, 120.0, 120.0, 2000);
        assert_eq!(log.borrow().scene_changes, 0);

        canvas.key_down(Key::Enter, Modifiers::default());
        assert_eq!(canvas.scene().rooms.len(), 1);
        assert_eq!(log.borrow().scene_changes, 1);
        assert_eq!(log.borrow().entity_counts, vec![1]);
    }

    #[test]
    fn tool_switch_discards_draft_and_cancels_drag() {
        let (mut canvas, _) = canvas();
        canvas.set_tool(ToolId::Freehand);
        canvas.pointer_down(Point::new(10.0, 10.0), 0);
        canvas.pointer_move(Point::new(60.0, 10.0));
        assert!(!canvas.session.draft.is_none());

        canvas.set_tool(ToolId::Wall);
        assert!(canvas.session.draft.is_none());
        // The release goes nowhere once the drag was cancelled
        canvas.pointer_up(Point::new(80.0, 10.0));
        assert!(canvas.scene().is_empty());
        assert_eq!(canvas.tool_id(), ToolId::Wall);
    }

    #[test]
    fn pan_capability_tracks_offscreen_content() {
        let (mut canvas, log) = canvas();
        assert!(!canvas.pan_capability().any());

        // 1000 px at 20 px per unit shows x in 0..50; this wall runs past it
        canvas
            .session
            .scene
            .push(Entity::Wall(Wall::new(Point::new(10.0, 5.0), Point::new(80.0, 5.0))));
        canvas.resize(Size::new(1000.0, 801.0));

        let capability = canvas.pan_capability();
        assert!(capability.right);
        assert!(!capability.left && !capability.up && !capability.down);
        assert!(capability.can_pan(PanDirection::Right));
        assert_eq!(log.borrow().capabilities.last().copied(), Some(capability));
    }

    #[test]
    fn bad_placement_is_rejected() {
        let (mut canvas, log) = canvas();
        let payload = PlacementPayload {
            kind: "sofa".to_string(),
            width: 6.0,
            height: 3.0,
            color: Some("not-a-color".to_string()),
            shape: PlacementShape::Rect,
        };
        assert!(canvas.drop_placement(&payload, Point::new(100.0, 100.0)).is_err());
        assert!(canvas.scene().is_empty());
        assert_eq!(log.borrow().scene_changes, 0);

        let payload = PlacementPayload {
            color: Some("#8a6b4e".to_string()),
            ..payload
        };
        canvas.drop_placement(&payload, Point::new(100.0, 100.0)).unwrap();
        assert_eq!(canvas.scene().placements[0].position, Point::new(5.0, 5.0));
        assert_eq!(log.borrow().scene_changes, 1);
    }

    #[test]
    fn render_reflects_session() {
        let (mut canvas, _) = canvas();
        canvas.set_tool(ToolId::Label);
        click(&mut canvas, 100.0, 100.0, 0);
        canvas.text_input("Hall");
        assert!(canvas.render().texts().any(|t| t == "Hall|"));
        canvas.key_down(Key::Enter, Modifiers::default());
        assert!(canvas.render().texts().any(|t| t == "Hall"));
    }
}
