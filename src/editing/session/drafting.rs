// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Draft construction and commit for rooms, walls, strokes and labels

use super::EditSession;
use crate::editing::draft::Draft;
use crate::editing::undo::UndoEntry;
use crate::geometry;
use crate::model::{Entity, EntityId, FreehandPath, Room, TextLabel, Wall};
use crate::theme;
use kurbo::Point;

impl EditSession {
    // ============================================================================
    // ROOMS
    // ============================================================================

    /// Handle a click while drawing a room
    ///
    /// The first click starts a draft. A click within the closure radius of
    /// the first vertex, once there are at least three, marks the draft as
    /// closed without adding a vertex. Clicks on a closed draft, or that
    /// snap onto an existing vertex, are ignored. Returns whether the draft
    /// changed.
    pub fn room_click(&mut self, screen_pos: Point) -> bool {
        let grid_pos = self.snapped_grid_point(screen_pos);
        let closure_radius = self.config.interaction.closure_radius;

        match &mut self.draft {
            Draft::Room { closed: true, .. } => false,
            Draft::Room { points, closed } => {
                if points.len() >= 3 {
                    let first = self.viewport.to_screen(points[0]);
                    if (first - screen_pos).hypot() <= closure_radius {
                        tracing::debug!("Room draft closed with {} vertices", points.len());
                        *closed = true;
                        return true;
                    }
                }
                if points.contains(&grid_pos) {
                    return false;
                }
                points.push(grid_pos);
                true
            }
            _ => {
                self.draft = Draft::Room {
                    points: vec![grid_pos],
                    closed: false,
                };
                true
            }
        }
    }

    /// Commit the room draft if it has at least three vertices
    ///
    /// With fewer vertices, or no room draft, nothing happens.
    pub fn confirm_room(&mut self) -> Option<EntityId> {
        let vertex_count = self.draft.room_points().map_or(0, <[Point]>::len);
        if vertex_count < 3 {
            return None;
        }
        let Draft::Room { points, .. } = self.draft.take() else {
            return None;
        };
        Some(self.commit_room(points))
    }

    /// Remove the newest room vertex, reopening a closed draft
    pub fn remove_last_vertex(&mut self) -> bool {
        let Draft::Room { points, closed } = &mut self.draft else {
            return false;
        };
        if *closed {
            *closed = false;
            return true;
        }
        points.pop();
        if points.is_empty() {
            self.draft = Draft::None;
        }
        true
    }

    fn commit_room(&mut self, points: Vec<Point>) -> EntityId {
        self.rooms_created += 1;
        let n = self.rooms_created;
        let room = Room::new(points, format!("Room {n}"), theme::room::palette_color(n - 1));
        let id = room.id;
        tracing::info!(
            "Committed {} ({} vertices, {:.1} sq ft)",
            room.label,
            room.points.len(),
            room.area
        );
        self.scene.push(Entity::Room(room.clone()));
        self.record(UndoEntry::AddRoom(room));
        id
    }

    // ============================================================================
    // WALLS
    // ============================================================================

    /// Handle a click while drawing a wall
    ///
    /// The first click anchors the wall, the second commits it. A wall that
    /// would have zero length is discarded.
    pub fn wall_click(&mut self, screen_pos: Point) -> Option<EntityId> {
        let grid_pos = self.snapped_grid_point(screen_pos);

        let Draft::Wall { start } = self.draft else {
            self.draft = Draft::Wall { start: grid_pos };
            return None;
        };
        self.draft = Draft::None;
        if start == grid_pos {
            tracing::debug!("Discarding zero-length wall");
            return None;
        }

        let wall = Wall::new(start, grid_pos);
        let id = wall.id;
        tracing::info!("Committed wall {} ({:.1} ft)", id, wall.length());
        self.scene.push(Entity::Wall(wall.clone()));
        self.record(UndoEntry::AddWall(wall));
        Some(id)
    }

    // ============================================================================
    // FREEHAND STROKES
    // ============================================================================

    pub fn begin_stroke(&mut self, screen_pos: Point) {
        self.draft = Draft::Stroke {
            points: vec![self.viewport.to_grid(screen_pos)],
        };
    }

    /// Append a point to the stroke if it moved far enough on screen
    pub fn extend_stroke(&mut self, screen_pos: Point) -> bool {
        let min_step = self.config.interaction.min_stroke_step;
        let Draft::Stroke { points } = &mut self.draft else {
            return false;
        };
        let Some(&last) = points.last() else {
            return false;
        };
        if (self.viewport.to_screen(last) - screen_pos).hypot() < min_step {
            return false;
        }
        points.push(self.viewport.to_grid(screen_pos));
        true
    }

    /// Straighten and commit the stroke
    ///
    /// Strokes with fewer than two points are discarded.
    pub fn finish_stroke(&mut self) -> Option<EntityId> {
        if !matches!(self.draft, Draft::Stroke { .. }) {
            return None;
        }
        let Draft::Stroke { points } = self.draft.take() else {
            return None;
        };
        if points.len() < 2 {
            tracing::debug!("Discarding stroke with {} point(s)", points.len());
            return None;
        }

        let raw_len = points.len();
        let points = geometry::straighten(&points);
        let path = FreehandPath::new(points, theme::entity::STROKE, theme::size::STROKE_WIDTH);
        let id = path.id;
        tracing::info!(
            "Committed stroke {} ({} points{})",
            id,
            path.points.len(),
            if path.is_straight() && raw_len > 2 {
                ", straightened"
            } else {
                ""
            }
        );
        self.scene.push(Entity::Path(path.clone()));
        self.record(UndoEntry::AddStroke(path));
        Some(id)
    }

    /// Drop an in-progress stroke
    pub fn discard_stroke(&mut self) -> bool {
        if matches!(self.draft, Draft::Stroke { .. }) {
            tracing::debug!("Discarding in-progress stroke");
            self.draft = Draft::None;
            return true;
        }
        false
    }

    // ============================================================================
    // TEXT LABELS
    // ============================================================================

    /// Start typing a new label at a screen point
    pub fn begin_text(&mut self, screen_pos: Point) {
        self.draft = Draft::Text {
            position: self.viewport.to_grid(screen_pos),
            text: String::new(),
            editing: None,
        };
    }

    /// Start re-editing an existing label
    pub fn edit_label(&mut self, id: EntityId) -> bool {
        let Some(label) = self.scene.label(id) else {
            return false;
        };
        tracing::debug!("Editing label {} ({:?})", id, label.text);
        self.draft = Draft::Text {
            position: label.position,
            text: label.text.clone(),
            editing: Some(id),
        };
        true
    }

    /// Whether a text draft is accepting input
    pub fn is_typing(&self) -> bool {
        matches!(self.draft, Draft::Text { .. })
    }

    pub fn insert_text(&mut self, input: &str) -> bool {
        let Draft::Text { text, .. } = &mut self.draft else {
            return false;
        };
        text.push_str(input);
        true
    }

    pub fn delete_text_backward(&mut self) -> bool {
        let Draft::Text { text, .. } = &mut self.draft else {
            return false;
        };
        text.pop().is_some()
    }

    /// Commit the text draft as a new label or an update to an existing one
    ///
    /// Empty (or whitespace-only) text discards the draft and leaves any
    /// label being edited unchanged.
    pub fn submit_text(&mut self) -> Option<EntityId> {
        if !self.is_typing() {
            return None;
        }
        let Draft::Text {
            position,
            text,
            editing,
        } = self.draft.take()
        else {
            return None;
        };
        let text = text.trim().to_string();
        if text.is_empty() {
            tracing::debug!("Discarding empty label");
            return None;
        }

        if let Some(id) = editing
            && let Some(label) = self.scene.label_mut(id)
        {
            if label.text == text {
                return Some(id);
            }
            let previous = label.clone();
            label.text = text;
            tracing::info!("Updated label {}", id);
            self.record(UndoEntry::UpdateLabel { previous });
            return Some(id);
        }

        let label = TextLabel::new(position, text);
        let id = label.id;
        tracing::info!("Committed label {} ({:?})", id, label.text);
        self.scene.push(Entity::Label(label.clone()));
        self.record(UndoEntry::AddLabel(label));
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::EditSession;

    /// Screen point for a grid point at the default view
    fn at(x: f64, y: f64) -> Point {
        Point::new(x * 20.0, y * 20.0)
    }

    fn square_draft(session: &mut EditSession) {
        for (x, y) in [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)] {
            session.room_click(at(x, y));
        }
    }

    #[test]
    fn closing_click_sets_closed_without_adding_vertex() {
        let mut session = EditSession::default();
        square_draft(&mut session);
        assert!(session.room_click(Point::new(10.0, 10.0)));
        assert!(session.draft.is_closed_room());
        assert_eq!(session.draft.room_points().unwrap().len(), 4);

        // Closed drafts ignore further clicks
        assert!(!session.room_click(at(8.0, 8.0)));
        assert_eq!(session.draft.room_points().unwrap().len(), 4);
    }

    #[test]
    fn closing_needs_three_vertices() {
        let mut session = EditSession::default();
        session.room_click(at(0.0, 0.0));
        session.room_click(at(4.0, 0.0));
        session.room_click(Point::new(5.0, 5.0));
        assert!(!session.draft.is_closed_room());
    }

    #[test]
    fn vertices_snap_to_grid() {
        let mut session = EditSession::default();
        session.room_click(Point::new(47.0, 33.0));
        assert_eq!(session.draft.room_points().unwrap(), &[Point::new(2.0, 2.0)]);
    }

    #[test]
    fn confirm_commits_room_and_undo_restores() {
        let mut session = EditSession::default();
        let before: Vec<EntityId> = session.scene.rooms.iter().map(|r| r.id).collect();
        square_draft(&mut session);
        let id = session.confirm_room().unwrap();

        assert!(session.draft.is_none());
        let room = &session.scene.rooms[0];
        assert_eq!(room.id, id);
        assert_eq!(room.label, "Room 1");
        assert_eq!(room.area, 16.0);

        assert!(session.undo());
        let after: Vec<EntityId> = session.scene.rooms.iter().map(|r| r.id).collect();
        assert_eq!(after, before);
    }

    #[test]
    fn click_snapping_onto_earlier_vertex_is_ignored() {
        let mut session = EditSession::default();
        session.viewport.zoom_percent = 400.0;
        // 80 px per unit at this zoom
        for (x, y) in [(0.0, 0.0), (320.0, 0.0), (320.0, 320.0)] {
            session.room_click(Point::new(x, y));
        }
        // Outside the closure radius, but snaps back onto the first vertex
        assert!(!session.room_click(Point::new(32.0, 0.0)));
        assert!(!session.draft.is_closed_room());
        // Snaps onto the second vertex
        assert!(!session.room_click(Point::new(300.0, 30.0)));
        assert_eq!(session.draft.room_points().unwrap().len(), 3);
    }

    #[test]
    fn confirm_with_two_vertices_is_noop() {
        let mut session = EditSession::default();
        session.room_click(at(0.0, 0.0));
        session.room_click(at(4.0, 0.0));
        assert_eq!(session.confirm_room(), None);
        assert_eq!(session.draft.room_points().unwrap().len(), 2);
        assert!(session.scene.rooms.is_empty());
    }

    #[test]
    fn rooms_are_numbered() {
        let mut session = EditSession::default();
        square_draft(&mut session);
        session.confirm_room();
        square_draft(&mut session);
        session.confirm_room();
        assert_eq!(session.scene.rooms[1].label, "Room 2");
    }

    #[test]
    fn backspace_reopens_then_removes() {
        let mut session = EditSession::default();
        square_draft(&mut session);
        session.room_click(at(0.0, 0.0));
        assert!(session.draft.is_closed_room());

        assert!(session.remove_last_vertex());
        assert!(!session.draft.is_closed_room());
        assert_eq!(session.draft.room_points().unwrap().len(), 4);

        session.remove_last_vertex();
        assert_eq!(session.draft.room_points().unwrap().len(), 3);
    }

    #[test]
    fn wall_takes_two_clicks() {
        let mut session = EditSession::default();
        assert_eq!(session.wall_click(at(1.0, 1.0)), None);
        assert_eq!(session.draft, Draft::Wall { start: Point::new(1.0, 1.0) });
        let id = session.wall_click(at(6.0, 1.0)).unwrap();
        assert_eq!(session.scene.walls[0].id, id);
        assert_eq!(session.scene.walls[0].length(), 5.0);
        assert!(session.draft.is_none());
    }

    #[test]
    fn undo_removes_only_the_last_wall() {
        let mut session = EditSession::default();
        session.wall_click(at(0.0, 0.0));
        let first = session.wall_click(at(5.0, 0.0)).unwrap();
        session.wall_click(at(5.0, 0.0));
        session.wall_click(at(5.0, 3.0)).unwrap();

        assert!(session.undo());
        assert_eq!(session.scene.walls.len(), 1);
        assert_eq!(session.scene.walls[0].id, first);
        assert!(session.undo());
        assert!(session.scene.is_empty());
        assert!(!session.undo());
    }

    #[test]
    fn zero_length_wall_is_discarded() {
        let mut session = EditSession::default();
        session.wall_click(at(1.0, 1.0));
        assert_eq!(session.wall_click(at(1.0, 1.0)), None);
        assert!(session.scene.walls.is_empty());
        assert!(session.draft.is_none());
    }

    #[test]
    fn stroke_respects_min_step() {
        let mut session = EditSession::default();
        session.begin_stroke(Point::new(0.0, 0.0));
        assert!(!session.extend_stroke(Point::new(2.0, 0.0)));
        assert!(session.extend_stroke(Point::new(4.0, 0.0)));
        assert!(!session.extend_stroke(Point::new(7.0, 0.0)));
        assert!(session.extend_stroke(Point::new(9.0, 0.0)));
        let Draft::Stroke { points } = &session.draft else {
            panic!("expected stroke draft");
        };
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn stroke_is_straightened_on_finish() {
        let mut session = EditSession::default();
        session.begin_stroke(at(0.0, 0.0));
        for i in 1..=10 {
            let y = if i % 2 == 0 { 0.1 } else { -0.1 };
            session.extend_stroke(at(i as f64, y));
        }
        session.finish_stroke().unwrap();
        let path = &session.scene.paths[0];
        assert!(path.is_straight());
        assert_eq!(path.points[0], Point::ZERO);
    }

    #[test]
    fn undo_removes_stroke() {
        let mut session = EditSession::default();
        session.wall_click(at(0.0, 0.0));
        session.wall_click(at(0.0, 5.0));
        session.begin_stroke(at(1.0, 1.0));
        session.extend_stroke(at(2.0, 3.0));
        session.extend_stroke(at(4.0, 2.0));
        session.finish_stroke().unwrap();
        assert_eq!(session.scene.paths.len(), 1);

        assert!(session.undo());
        assert!(session.scene.paths.is_empty());
        assert_eq!(session.scene.walls.len(), 1);
        assert_eq!(session.undo.len(), 1);
    }

    #[test]
    fn single_point_stroke_is_discarded() {
        let mut session = EditSession::default();
        session.begin_stroke(at(1.0, 1.0));
        assert_eq!(session.finish_stroke(), None);
        assert!(session.scene.paths.is_empty());
        assert!(session.draft.is_none());
    }

    #[test]
    fn text_entry_creates_label() {
        let mut session = EditSession::default();
        session.begin_text(at(3.0, 3.0));
        session.insert_text("Kitchn");
        session.delete_text_backward();
        session.insert_text("en");
        let id = session.submit_text().unwrap();
        let label = session.scene.label(id).unwrap();
        assert_eq!(label.text, "Kitchen");
        assert_eq!(label.position, Point::new(3.0, 3.0));
    }

    #[test]
    fn undo_removes_new_label() {
        let mut session = EditSession::default();
        session.begin_text(at(1.0, 1.0));
        session.insert_text("Hall");
        let kept = session.submit_text().unwrap();
        session.begin_text(at(6.0, 2.0));
        session.insert_text("Bath");
        session.submit_text().unwrap();

        assert!(session.undo());
        assert_eq!(session.scene.labels.len(), 1);
        assert_eq!(session.scene.labels[0].id, kept);
        assert_eq!(session.scene.labels[0].text, "Hall");
    }

    #[test]
    fn empty_text_is_discarded() {
        let mut session = EditSession::default();
        session.begin_text(at(3.0, 3.0));
        session.insert_text("   ");
        assert_eq!(session.submit_text(), None);
        assert!(session.scene.labels.is_empty());
        assert!(!session.undo.can_undo());
    }

    #[test]
    fn re_editing_updates_and_undo_restores() {
        let mut session = EditSession::default();
        session.begin_text(at(1.0, 1.0));
        session.insert_text("Bed");
        let id = session.submit_text().unwrap();

        assert!(session.edit_label(id));
        session.insert_text("room");
        assert_eq!(session.submit_text(), Some(id));
        assert_eq!(session.scene.labels.len(), 1);
        assert_eq!(session.scene.label(id).unwrap().text, "Bedroom");

        session.undo();
        assert_eq!(session.scene.label(id).unwrap().text, "Bed");
    }

    #[test]
    fn empty_re_edit_keeps_label() {
        let mut session = EditSession::default();
        session.begin_text(at(1.0, 1.0));
        session.insert_text("Den");
        let id = session.submit_text().unwrap();

        session.edit_label(id);
        for _ in 0..3 {
            session.delete_text_backward();
        }
        assert_eq!(session.submit_text(), None);
        assert_eq!(session.scene.label(id).unwrap().text, "Den");
    }
}
