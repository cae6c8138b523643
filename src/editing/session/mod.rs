// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - all mutable state for one canvas

mod drafting;
mod hit_testing;
mod scene_editing;

pub use hit_testing::Hit;

use super::draft::Draft;
use super::undo::{UndoEntry, UndoLog};
use super::viewport::ViewPort;
use crate::config::CanvasConfig;
use crate::model::Scene;
use crate::tools::{ToolBox, ToolId};
use kurbo::{Point, Size};

/// Editing session for a floor plan
///
/// Holds the committed scene, the single in-progress draft, the view
/// transform and the undo history. Tools and the canvas mutate it; the
/// renderer and the exporter only read it.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Committed entities
    pub scene: Scene,

    /// Entity under construction, if any
    pub draft: Draft,

    /// View transform shared by rendering and hit testing
    pub viewport: ViewPort,

    /// Current editing tool
    pub current_tool: ToolBox,

    pub undo: UndoLog,

    pub config: CanvasConfig,

    /// Last pointer position in grid space, for rubber-band previews
    pub hover: Option<Point>,

    /// Size of the canvas in screen pixels
    pub canvas_size: Size,

    /// Rooms committed since the last clear, used for default names and colors
    rooms_created: usize,

    /// Set whenever committed entities change; drained by the canvas
    scene_changed: bool,
}

impl EditSession {
    pub fn new(config: CanvasConfig) -> Self {
        let viewport = ViewPort::with_limits(
            config.view.cell_size,
            config.view.min_zoom,
            config.view.max_zoom,
        );
        let undo = UndoLog::with_capacity(config.interaction.max_undo);

        Self {
            scene: Scene::new(),
            draft: Draft::None,
            viewport,
            current_tool: ToolBox::for_id(ToolId::Select),
            undo,
            config,
            hover: None,
            canvas_size: Size::ZERO,
            rooms_created: 0,
            scene_changed: false,
        }
    }

    pub fn tool_id(&self) -> ToolId {
        self.current_tool.id()
    }

    /// Switch to another tool, discarding any draft
    ///
    /// Selecting the tool that is already active is a no-op.
    pub fn set_tool(&mut self, id: ToolId) {
        if self.current_tool.id() == id {
            return;
        }
        if !self.draft.is_none() {
            tracing::debug!("Discarding {} draft on tool switch", self.draft.name());
        }
        tracing::debug!("Tool: {:?} -> {:?}", self.current_tool.id(), id);
        self.draft = Draft::None;
        self.current_tool = ToolBox::for_id(id);
    }

    /// Drop the draft without committing it
    pub fn cancel_draft(&mut self) -> bool {
        if self.draft.is_none() {
            return false;
        }
        tracing::debug!("Cancelled {} draft", self.draft.name());
        self.draft = Draft::None;
        true
    }

    /// Whether the canvas is narrow enough to count as compact
    pub fn is_compact(&self) -> bool {
        self.canvas_size.width < self.config.view.compact_breakpoint
    }

    /// Record a committed action
    pub(crate) fn record(&mut self, entry: UndoEntry) {
        self.undo.push(entry);
        self.scene_changed = true;
    }

    pub(crate) fn mark_scene_changed(&mut self) {
        self.scene_changed = true;
    }

    /// Whether the scene changed since the last call, resetting the flag
    pub fn take_scene_changed(&mut self) -> bool {
        std::mem::take(&mut self.scene_changed)
    }

    /// Revert the most recent action
    pub fn undo(&mut self) -> bool {
        match self.undo.undo(&mut self.scene) {
            Some(name) => {
                tracing::info!("Undo: {}", name);
                self.scene_changed = true;
                true
            }
            None => {
                tracing::debug!("Nothing to undo");
                false
            }
        }
    }

    /// Remove everything: scene, draft and history
    pub fn clear(&mut self) {
        tracing::info!("Clearing {} entities", self.scene.entity_count());
        self.scene.clear();
        self.draft = Draft::None;
        self.undo.clear();
        self.rooms_created = 0;
        self.scene_changed = true;
    }

    /// Convert a screen point to grid space, snapped to the vertex grid
    pub fn snapped_grid_point(&self, screen_pos: Point) -> Point {
        crate::geometry::snap_to_grid(
            self.viewport.to_grid(screen_pos),
            self.config.interaction.snap_spacing,
        )
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, TextLabel};

    #[test]
    fn starts_with_select_tool_and_empty_scene() {
        let session = EditSession::default();
        assert_eq!(session.tool_id(), ToolId::Select);
        assert!(session.scene.is_empty());
        assert!(session.draft.is_none());
        assert!(!session.undo.can_undo());
    }

    #[test]
    fn tool_switch_discards_draft() {
        let mut session = EditSession::default();
        session.set_tool(ToolId::Room);
        session.draft = Draft::Room {
            points: vec![Point::ZERO, Point::new(1.0, 0.0)],
            closed: false,
        };
        session.set_tool(ToolId::Room);
        assert!(!session.draft.is_none());
        session.set_tool(ToolId::Wall);
        assert!(session.draft.is_none());
        assert_eq!(session.tool_id(), ToolId::Wall);
    }

    #[test]
    fn clear_is_not_undoable() {
        let mut session = EditSession::default();
        let label = TextLabel::new(Point::ZERO, "Hall");
        session.scene.push(Entity::Label(label.clone()));
        session.record(UndoEntry::AddLabel(label));
        session.draft = Draft::Wall { start: Point::ZERO };

        session.clear();
        assert!(session.scene.is_empty());
        assert!(session.draft.is_none());
        assert!(!session.undo());
        assert!(session.take_scene_changed());
        assert!(!session.take_scene_changed());
    }

    #[test]
    fn compact_breakpoint() {
        let mut session = EditSession::default();
        session.canvas_size = Size::new(500.0, 800.0);
        assert!(session.is_compact());
        session.canvas_size = Size::new(1024.0, 768.0);
        assert!(!session.is_compact());
    }

    #[test]
    fn config_limits_reach_viewport_and_log() {
        let mut config = CanvasConfig::default();
        config.view.max_zoom = 800.0;
        config.interaction.max_undo = 3;
        let mut session = EditSession::new(config);
        assert_eq!(session.viewport.zoom_range(), (25.0, 800.0));

        for i in 0..4 {
            let x = i as f64 * 40.0;
            session.wall_click(Point::new(x, 0.0));
            session.wall_click(Point::new(x, 100.0)).unwrap();
        }
        assert_eq!(session.scene.walls.len(), 4);
        assert_eq!(session.undo.len(), 3);
        for _ in 0..3 {
            assert!(session.undo());
        }
        // The oldest wall fell off the log
        assert!(!session.undo());
        assert_eq!(session.scene.walls.len(), 1);
    }
}
