// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection, deletion and placement on committed entities

use super::{EditSession, Hit};
use crate::editing::undo::{Removed, UndoEntry};
use crate::model::{
    Entity, EntityId, EntityKind, PayloadError, Placement, PlacementPayload, TextLabel,
};
use kurbo::{Point, Vec2};

impl EditSession {
    /// Flip the selection state of a room
    pub fn toggle_room_selection(&mut self, id: EntityId) -> bool {
        let Some(room) = self.scene.room_mut(id) else {
            return false;
        };
        room.selected = !room.selected;
        tracing::debug!("{} {}", room.label, if room.selected { "selected" } else { "deselected" });
        self.mark_scene_changed();
        true
    }

    /// Clear the room selection
    pub fn deselect_all(&mut self) -> bool {
        if self.scene.selected_rooms().is_empty() {
            return false;
        }
        tracing::debug!("Cleared room selection");
        self.scene.deselect_all();
        self.mark_scene_changed();
        true
    }

    /// Delete every selected room as one undoable action
    ///
    /// Returns the number of rooms removed.
    pub fn delete_selected(&mut self) -> usize {
        let removed: Vec<Removed> = self
            .scene
            .selected_rooms()
            .into_iter()
            .filter_map(|id| self.scene.remove(EntityKind::Room, id))
            .map(|(index, entity)| Removed { index, entity })
            .collect();

        let count = removed.len();
        if count > 0 {
            tracing::info!("Deleted {} selected room(s)", count);
            self.record(UndoEntry::Delete(removed));
        }
        count
    }

    /// Delete a single entity as one undoable action
    pub fn erase(&mut self, hit: Hit) -> bool {
        let Some((index, entity)) = self.scene.remove(hit.kind, hit.id) else {
            return false;
        };
        tracing::info!("Erased {:?} {}", hit.kind, hit.id);
        self.record(UndoEntry::Delete(vec![Removed { index, entity }]));
        true
    }

    /// Move a label by a grid-space delta without recording history
    ///
    /// Drags call this repeatedly and record one `UpdateLabel` at the end
    /// through `finish_label_move`.
    pub fn move_label(&mut self, id: EntityId, delta: Vec2) -> bool {
        let Some(label) = self.scene.label_mut(id) else {
            return false;
        };
        label.position += delta;
        self.mark_scene_changed();
        true
    }

    /// Record a finished label move, given the label as it was before
    pub fn finish_label_move(&mut self, previous: TextLabel) {
        let Some(label) = self.scene.label(previous.id) else {
            return;
        };
        if label.position == previous.position {
            return;
        }
        tracing::info!("Moved label {} to {:?}", label.id, label.position);
        self.record(UndoEntry::UpdateLabel { previous });
    }

    /// Commit a placement dropped at a screen point
    pub fn drop_placement(
        &mut self,
        payload: &PlacementPayload,
        screen_pos: Point,
    ) -> Result<EntityId, PayloadError> {
        let grid_pos = self.viewport.to_grid(screen_pos);
        let placement = Placement::from_payload(payload, grid_pos)?;
        let id = placement.id;
        tracing::info!("Placed {} {} at {:?}", placement.kind, id, grid_pos);
        self.scene.push(Entity::Placement(placement.clone()));
        self.record(UndoEntry::AddPlacement(placement));
        Ok(id)
    }
}
