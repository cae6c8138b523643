// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system for floor plan editing

use crate::editing::{Drag, EditSession, MouseDelegate, MouseEvent};
use crate::render::{DisplayList, FrameInput};
use serde::{Deserialize, Serialize};

// ===== Tool Identifier =====

/// Tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    /// Toggle room selection, move labels
    Select,
    /// Delete the entity under the pointer
    Erase,
    /// Click out room polygons
    Room,
    /// Two-click walls
    Wall,
    /// Freehand strokes
    Freehand,
    /// Text labels
    Label,
    /// Drag to pan the view
    Pan,
}

impl ToolId {
    pub const ALL: [ToolId; 7] = [
        ToolId::Select,
        ToolId::Erase,
        ToolId::Room,
        ToolId::Wall,
        ToolId::Freehand,
        ToolId::Label,
        ToolId::Pan,
    ];
}

// ===== Tool Trait =====

/// A tool for editing the floor plan
pub trait Tool: MouseDelegate<Data = EditSession> {
    /// Get the tool identifier
    fn id(&self) -> ToolId;

    /// Add tool-specific overlays on top of the frame
    fn overlay(&self, _input: &FrameInput, _list: &mut DisplayList) {}
}

// ===== ToolBox Enum =====

/// Enum wrapping all tool types
#[derive(Debug, Clone)]
pub enum ToolBox {
    Select(select::SelectTool),
    Erase(erase::EraseTool),
    Room(room::RoomTool),
    Wall(wall::WallTool),
    Freehand(freehand::FreehandTool),
    Label(label::LabelTool),
    Pan(pan::PanTool),
}

// ===== ToolBox Implementation =====

impl ToolBox {
    /// Create a tool by ID
    pub fn for_id(id: ToolId) -> Self {
        match id {
            ToolId::Select => ToolBox::Select(select::SelectTool::default()),
            ToolId::Erase => ToolBox::Erase(erase::EraseTool),
            ToolId::Room => ToolBox::Room(room::RoomTool),
            ToolId::Wall => ToolBox::Wall(wall::WallTool),
            ToolId::Freehand => ToolBox::Freehand(freehand::FreehandTool),
            ToolId::Label => ToolBox::Label(label::LabelTool),
            ToolId::Pan => ToolBox::Pan(pan::PanTool),
        }
    }

    fn tool(&self) -> &dyn Tool {
        match self {
            ToolBox::Select(tool) => tool,
            ToolBox::Erase(tool) => tool,
            ToolBox::Room(tool) => tool,
            ToolBox::Wall(tool) => tool,
            ToolBox::Freehand(tool) => tool,
            ToolBox::Label(tool) => tool,
            ToolBox::Pan(tool) => tool,
        }
    }

    fn tool_mut(&mut self) -> &mut dyn Tool {
        match self {
            ToolBox::Select(tool) => tool,
            ToolBox::Erase(tool) => tool,
            ToolBox::Room(tool) => tool,
            ToolBox::Wall(tool) => tool,
            ToolBox::Freehand(tool) => tool,
            ToolBox::Label(tool) => tool,
            ToolBox::Pan(tool) => tool,
        }
    }

    /// Get the tool ID
    pub fn id(&self) -> ToolId {
        self.tool().id()
    }

    /// Paint tool overlays
    pub fn overlay(&self, input: &FrameInput, list: &mut DisplayList) {
        self.tool().overlay(input, list);
    }
}

// ===== MouseDelegate Implementation =====

/// Forward the interpreted gestures to the active tool
impl MouseDelegate for ToolBox {
    type Data = EditSession;

    fn left_down(&mut self, event: MouseEvent, data: &mut EditSession) {
        self.tool_mut().left_down(event, data);
    }

    fn left_up(&mut self, event: MouseEvent, data: &mut EditSession) {
        self.tool_mut().left_up(event, data);
    }

    fn left_click(&mut self, event: MouseEvent, data: &mut EditSession) {
        self.tool_mut().left_click(event, data);
    }

    fn mouse_moved(&mut self, event: MouseEvent, data: &mut EditSession) {
        self.tool_mut().mouse_moved(event, data);
    }

    fn left_drag_began(&mut self, event: MouseEvent, drag: Drag, data: &mut EditSession) {
        self.tool_mut().left_drag_began(event, drag, data);
    }

    fn left_drag_changed(&mut self, event: MouseEvent, drag: Drag, data: &mut EditSession) {
        self.tool_mut().left_drag_changed(event, drag, data);
    }

    fn left_drag_ended(&mut self, event: MouseEvent, drag: Drag, data: &mut EditSession) {
        self.tool_mut().left_drag_ended(event, drag, data);
    }

    fn cancel(&mut self, data: &mut EditSession) {
        self.tool_mut().cancel(data);
    }
}

// ===== Tool Modules =====

pub mod erase;
pub mod freehand;
pub mod label;
pub mod pan;
pub mod room;
pub mod select;
pub mod wall;
