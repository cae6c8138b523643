// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Select tool
//!
//! Click toggles room selection. Pressing on a label and dragging moves it;
//! the whole drag is recorded as one undo step when the button is released.

use crate::editing::{Drag, EditSession, MouseDelegate, MouseEvent};
use crate::model::{EntityKind, TextLabel};
use crate::render::{DisplayList, FrameInput};
use crate::theme;
use crate::tools::{Tool, ToolId};
use kurbo::{Rect, Stroke};

#[derive(Debug, Clone, Default)]
pub struct SelectTool {
    /// The dragged label as it was before the drag started
    dragging: Option<TextLabel>,
}

impl Tool for SelectTool {
    fn id(&self) -> ToolId {
        ToolId::Select
    }

    fn overlay(&self, input: &FrameInput, list: &mut DisplayList) {
        let Some(id) = self.dragging.as_ref().map(|l| l.id) else {
            return;
        };
        let Some(label) = input.scene.labels.iter().find(|l| l.id == id) else {
            return;
        };
        let vp = input.viewport;
        let bounds = label.text_box(vp.cell_size);
        let rect = Rect::from_points(
            vp.to_screen(bounds.origin()),
            vp.to_screen((bounds.x1, bounds.y1).into()),
        )
        .inflate(3.0, 3.0);
        list.stroke(&rect, theme::selection::HIGHLIGHT, Stroke::new(1.0));
    }
}

impl MouseDelegate for SelectTool {
    type Data = EditSession;

    fn left_click(&mut self, event: MouseEvent, session: &mut EditSession) {
        match session.hit_test(event.pos) {
            Some(hit) if hit.kind == EntityKind::Room => {
                session.toggle_room_selection(hit.id);
            }
            Some(_) => {}
            None => {
                session.deselect_all();
            }
        }
    }

    fn left_drag_began(&mut self, _event: MouseEvent, drag: Drag, session: &mut EditSession) {
        let Some(hit) = session.hit_label(drag.start) else {
            return;
        };
        self.dragging = session.scene.label(hit.id).cloned();
        let delta = session.viewport.to_grid(drag.current) - session.viewport.to_grid(drag.start);
        session.move_label(hit.id, delta);
    }

    fn left_drag_changed(&mut self, _event: MouseEvent, drag: Drag, session: &mut EditSession) {
        let Some(id) = self.dragging.as_ref().map(|l| l.id) else {
            return;
        };
        let delta = session.viewport.to_grid(drag.current) - session.viewport.to_grid(drag.prev);
        session.move_label(id, delta);
    }

    fn left_drag_ended(&mut self, event: MouseEvent, drag: Drag, session: &mut EditSession) {
        self.left_drag_changed(event, drag, session);
        if let Some(previous) = self.dragging.take() {
            session.finish_label_move(previous);
        }
    }

    fn cancel(&mut self, session: &mut EditSession) {
        // Put an in-flight label back where it started
        if let Some(previous) = self.dragging.take()
            && let Some(label) = session.scene.label(previous.id)
        {
            let delta = previous.position - label.position;
            session.move_label(previous.id, delta);
        }
    }
}
