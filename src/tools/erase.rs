// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Erase tool: click deletes whatever the hit tester finds

use crate::editing::{EditSession, MouseDelegate, MouseEvent};
use crate::tools::{Tool, ToolId};

#[derive(Debug, Clone, Copy, Default)]
pub struct EraseTool;

impl Tool for EraseTool {
    fn id(&self) -> ToolId {
        ToolId::Erase
    }
}

impl MouseDelegate for EraseTool {
    type Data = EditSession;

    fn left_click(&mut self, event: MouseEvent, session: &mut EditSession) {
        if let Some(hit) = session.hit_test(event.pos) {
            session.erase(hit);
        }
    }
}
