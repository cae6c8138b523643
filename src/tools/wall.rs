// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Wall tool: first click anchors, second click commits

use crate::editing::{EditSession, MouseDelegate, MouseEvent};
use crate::tools::{Tool, ToolId};

#[derive(Debug, Clone, Copy, Default)]
pub struct WallTool;

impl Tool for WallTool {
    fn id(&self) -> ToolId {
        ToolId::Wall
    }
}

impl MouseDelegate for WallTool {
    type Data = EditSession;

    fn left_click(&mut self, event: MouseEvent, session: &mut EditSession) {
        session.wall_click(event.pos);
    }
}
