// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Pan tool: drag to move the view

use crate::editing::{Drag, EditSession, MouseDelegate, MouseEvent};
use crate::tools::{Tool, ToolId};

#[derive(Debug, Clone, Copy, Default)]
pub struct PanTool;

impl Tool for PanTool {
    fn id(&self) -> ToolId {
        ToolId::Pan
    }
}

impl MouseDelegate for PanTool {
    type Data = EditSession;

    fn left_drag_began(&mut self, _event: MouseEvent, drag: Drag, session: &mut EditSession) {
        session.viewport.pan_by(drag.delta());
    }

    fn left_drag_changed(&mut self, _event: MouseEvent, drag: Drag, session: &mut EditSession) {
        session.viewport.pan_by(drag.delta());
    }

    fn left_drag_ended(&mut self, _event: MouseEvent, drag: Drag, session: &mut EditSession) {
        session.viewport.pan_by(drag.delta());
    }
}
