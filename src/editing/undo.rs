// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Linear undo history.
//!
//! Every committing action appends one `UndoEntry`. Undo pops the newest
//! entry and reverts it against the scene by entity id. There is no redo,
//! and clearing the canvas empties the log.

use crate::model::{
    Entity, EntityId, EntityKind, FreehandPath, Placement, Room, Scene, TextLabel, Wall,
};
use crate::settings;

/// An entity removed by a delete, with the index it occupied
#[derive(Debug, Clone)]
pub struct Removed {
    pub index: usize,
    pub entity: Entity,
}

/// One revertible action
#[derive(Debug, Clone)]
pub enum UndoEntry {
    AddRoom(Room),
    AddWall(Wall),
    AddStroke(FreehandPath),
    AddLabel(TextLabel),
    AddPlacement(Placement),
    /// A label's text or position changed; holds the label as it was
    UpdateLabel { previous: TextLabel },
    /// Entities removed together, in removal order
    Delete(Vec<Removed>),
}

impl UndoEntry {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            UndoEntry::AddRoom(_) => "add room",
            UndoEntry::AddWall(_) => "add wall",
            UndoEntry::AddStroke(_) => "add stroke",
            UndoEntry::AddLabel(_) => "add label",
            UndoEntry::AddPlacement(_) => "add placement",
            UndoEntry::UpdateLabel { .. } => "update label",
            UndoEntry::Delete(_) => "delete",
        }
    }

    /// Revert this entry against the scene
    fn revert(self, scene: &mut Scene) {
        let added = |kind: EntityKind, id: EntityId, scene: &mut Scene| {
            if scene.remove(kind, id).is_none() {
                tracing::warn!("undo: {:?} {} already gone", kind, id);
            }
        };

        match self {
            UndoEntry::AddRoom(room) => added(EntityKind::Room, room.id, scene),
            UndoEntry::AddWall(wall) => added(EntityKind::Wall, wall.id, scene),
            UndoEntry::AddStroke(path) => added(EntityKind::Path, path.id, scene),
            UndoEntry::AddLabel(label) => added(EntityKind::Label, label.id, scene),
            UndoEntry::AddPlacement(p) => added(EntityKind::Placement, p.id, scene),
            UndoEntry::UpdateLabel { previous } => match scene.label_mut(previous.id) {
                Some(label) => *label = previous,
                None => tracing::warn!("undo: label {} already gone", previous.id),
            },
            UndoEntry::Delete(removed) => {
                // Reinsert in reverse so earlier indices are still valid
                for Removed { index, entity } in removed.into_iter().rev() {
                    scene.insert_at(index, entity);
                }
            }
        }
    }
}

/// Append-only history with single-step rollback
#[derive(Debug, Clone)]
pub struct UndoLog {
    entries: Vec<UndoEntry>,
    max_len: usize,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::with_capacity(settings::interaction::MAX_UNDO)
    }

    /// Log that keeps at most `max_len` entries
    pub fn with_capacity(max_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_len: max_len.max(1),
        }
    }

    pub fn push(&mut self, entry: UndoEntry) {
        tracing::debug!("undo log: push {}", entry.name());
        self.entries.push(entry);
        if self.entries.len() > self.max_len {
            let overflow = self.entries.len() - self.max_len;
            self.entries.drain(..overflow);
        }
    }

    /// Revert the newest entry; returns what was undone
    pub fn undo(&mut self, scene: &mut Scene) -> Option<&'static str> {
        let entry = self.entries.pop()?;
        let name = entry.name();
        entry.revert(scene);
        Some(name)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use kurbo::Point;

    fn room() -> Room {
        Room::new(
            vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 4.0)],
            "Room 1",
            theme::room::palette_color(0),
        )
    }

    fn room_ids(scene: &Scene) -> Vec<EntityId> {
        scene.rooms.iter().map(|r| r.id).collect()
    }

    #[test]
    fn undo_add_removes_entity() {
        let mut scene = Scene::new();
        let mut log = UndoLog::new();
        let first = room();
        scene.push(Entity::Room(first.clone()));
        log.push(UndoEntry::AddRoom(first));
        let before = room_ids(&scene);

        let second = room();
        scene.push(Entity::Room(second.clone()));
        log.push(UndoEntry::AddRoom(second));

        assert_eq!(log.undo(&mut scene), Some("add room"));
        assert_eq!(room_ids(&scene), before);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn undo_delete_restores_positions() {
        let mut scene = Scene::new();
        let rooms: Vec<Room> = (0..4).map(|_| room()).collect();
        let ids: Vec<EntityId> = rooms.iter().map(|r| r.id).collect();
        for r in rooms {
            scene.push(Entity::Room(r));
        }

        let mut removed = Vec::new();
        for id in [ids[1], ids[3]] {
            let (index, entity) = scene.remove(EntityKind::Room, id).unwrap();
            removed.push(Removed { index, entity });
        }
        let mut log = UndoLog::new();
        log.push(UndoEntry::Delete(removed));
        assert_eq!(scene.rooms.len(), 2);

        log.undo(&mut scene);
        assert_eq!(room_ids(&scene), ids);
    }

    #[test]
    fn undo_update_label_restores_previous() {
        let mut scene = Scene::new();
        let label = TextLabel::new(Point::new(1.0, 1.0), "Hall");
        let id = label.id;
        scene.push(Entity::Label(label.clone()));

        let mut log = UndoLog::new();
        log.push(UndoEntry::UpdateLabel { previous: label });
        let edited = scene.label_mut(id).unwrap();
        edited.text = "Hallway".to_string();
        edited.position = Point::new(5.0, 5.0);

        log.undo(&mut scene);
        let restored = scene.label(id).unwrap();
        assert_eq!(restored.text, "Hall");
        assert_eq!(restored.position, Point::new(1.0, 1.0));
    }

    #[test]
    fn undo_on_empty_log() {
        let mut scene = Scene::new();
        let mut log = UndoLog::new();
        assert!(!log.can_undo());
        assert_eq!(log.undo(&mut scene), None);
    }

    #[test]
    fn log_drops_oldest_past_capacity() {
        let mut scene = Scene::new();
        let mut log = UndoLog::with_capacity(2);
        let rooms: Vec<Room> = (0..3).map(|_| room()).collect();
        for r in &rooms {
            scene.push(Entity::Room(r.clone()));
            log.push(UndoEntry::AddRoom(r.clone()));
        }
        assert_eq!(log.len(), 2);
        log.undo(&mut scene);
        log.undo(&mut scene);
        assert_eq!(log.undo(&mut scene), None);
        // The oldest room can no longer be undone
        assert_eq!(room_ids(&scene), vec![rooms[0].id]);
    }
}
