// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Freehand tool
//!
//! Press starts a stroke, dragging records points at least a few pixels
//! apart, release straightens and commits it.

use crate::editing::{Drag, EditSession, MouseDelegate, MouseEvent};
use crate::tools::{Tool, ToolId};

#[derive(Debug, Clone, Copy, Default)]
pub struct FreehandTool;

impl Tool for FreehandTool {
    fn id(&self) -> ToolId {
        ToolId::Freehand
    }
}

impl MouseDelegate for FreehandTool {
    type Data = EditSession;

    fn left_down(&mut self, event: MouseEvent, session: &mut EditSession) {
        session.begin_stroke(event.pos);
    }

    fn left_drag_began(&mut self, event: MouseEvent, _drag: Drag, session: &mut EditSession) {
        session.extend_stroke(event.pos);
    }

    fn left_drag_changed(&mut self, event: MouseEvent, _drag: Drag, session: &mut EditSession) {
        session.extend_stroke(event.pos);
    }

    fn left_drag_ended(&mut self, event: MouseEvent, _drag: Drag, session: &mut EditSession) {
        session.extend_stroke(event.pos);
    }

    fn left_up(&mut self, _event: MouseEvent, session: &mut EditSession) {
        session.finish_stroke();
    }

    fn cancel(&mut self, session: &mut EditSession) {
        session.discard_stroke();
    }
}
