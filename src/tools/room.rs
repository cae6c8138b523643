// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Room tool
//!
//! Each click adds a snapped vertex. Clicking near the first vertex closes
//! the outline; Enter (handled by the canvas) commits it.

use crate::editing::{EditSession, MouseDelegate, MouseEvent};
use crate::tools::{Tool, ToolId};

#[derive(Debug, Clone, Copy, Default)]
pub struct RoomTool;

impl Tool for RoomTool {
    fn id(&self) -> ToolId {
        ToolId::Room
    }
}

impl MouseDelegate for RoomTool {
    type Data = EditSession;

    fn left_click(&mut self, event: MouseEvent, session: &mut EditSession) {
        session.room_click(event.pos);
    }
}
