// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! The committed scene: every room, wall, stroke, label and placement.
//!
//! Collection order is draw order. Earlier entries are drawn first, so the
//! hit tester walks rooms front to back by iterating in storage order and
//! taking the first match.

use super::{EntityId, FreehandPath, Placement, Room, TextLabel, Wall};
use kurbo::Rect;

/// Which collection an entity lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Room,
    Wall,
    Path,
    Label,
    Placement,
}

/// An owned snapshot of any committed entity
#[derive(Debug, Clone)]
pub enum Entity {
    Room(Room),
    Wall(Wall),
    Path(FreehandPath),
    Label(TextLabel),
    Placement(Placement),
}

impl Entity {
    pub fn id(&self) -> EntityId {
        match self {
            Entity::Room(room) => room.id,
            Entity::Wall(wall) => wall.id,
            Entity::Path(path) => path.id,
            Entity::Label(label) => label.id,
            Entity::Placement(placement) => placement.id,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Room(_) => EntityKind::Room,
            Entity::Wall(_) => EntityKind::Wall,
            Entity::Path(_) => EntityKind::Path,
            Entity::Label(_) => EntityKind::Label,
            Entity::Placement(_) => EntityKind::Placement,
        }
    }
}

/// All committed entities, grouped by kind
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub rooms: Vec<Room>,
    pub walls: Vec<Wall>,
    pub paths: Vec<FreehandPath>,
    pub labels: Vec<TextLabel>,
    pub placements: Vec<Placement>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }

    pub fn entity_count(&self) -> usize {
        self.rooms.len()
            + self.walls.len()
            + self.paths.len()
            + self.labels.len()
            + self.placements.len()
    }

    pub fn clear(&mut self) {
        self.rooms.clear();
        self.walls.clear();
        self.paths.clear();
        self.labels.clear();
        self.placements.clear();
    }

    /// Append an entity at the top of its collection
    pub fn push(&mut self, entity: Entity) {
        match entity {
            Entity::Room(room) => self.rooms.push(room),
            Entity::Wall(wall) => self.walls.push(wall),
            Entity::Path(path) => self.paths.push(path),
            Entity::Label(label) => self.labels.push(label),
            Entity::Placement(placement) => self.placements.push(placement),
        }
    }

    /// Insert an entity at a given position, clamped to the collection length
    ///
    /// Used by undo to put deleted entities back at their old z-order.
    pub fn insert_at(&mut self, index: usize, entity: Entity) {
        fn insert<T>(items: &mut Vec<T>, index: usize, item: T) {
            let index = index.min(items.len());
            items.insert(index, item);
        }

        match entity {
            Entity::Room(room) => insert(&mut self.rooms, index, room),
            Entity::Wall(wall) => insert(&mut self.walls, index, wall),
            Entity::Path(path) => insert(&mut self.paths, index, path),
            Entity::Label(label) => insert(&mut self.labels, index, label),
            Entity::Placement(p) => insert(&mut self.placements, index, p),
        }
    }

    /// Remove an entity by identity, returning its index and snapshot
    pub fn remove(&mut self, kind: EntityKind, id: EntityId) -> Option<(usize, Entity)> {
        fn take<T>(
            items: &mut Vec<T>,
            id: EntityId,
            id_of: impl Fn(&T) -> EntityId,
        ) -> Option<(usize, T)> {
            let index = items.iter().position(|item| id_of(item) == id)?;
            Some((index, items.remove(index)))
        }

        match kind {
            EntityKind::Room => {
                take(&mut self.rooms, id, |r| r.id).map(|(i, r)| (i, Entity::Room(r)))
            }
            EntityKind::Wall => {
                take(&mut self.walls, id, |w| w.id).map(|(i, w)| (i, Entity::Wall(w)))
            }
            EntityKind::Path => {
                take(&mut self.paths, id, |p| p.id).map(|(i, p)| (i, Entity::Path(p)))
            }
            EntityKind::Label => {
                take(&mut self.labels, id, |l| l.id).map(|(i, l)| (i, Entity::Label(l)))
            }
            EntityKind::Placement => {
                take(&mut self.placements, id, |p| p.id).map(|(i, p)| (i, Entity::Placement(p)))
            }
        }
    }

    pub fn contains(&self, kind: EntityKind, id: EntityId) -> bool {
        match kind {
            EntityKind::Room => self.rooms.iter().any(|r| r.id == id),
            EntityKind::Wall => self.walls.iter().any(|w| w.id == id),
            EntityKind::Path => self.paths.iter().any(|p| p.id == id),
            EntityKind::Label => self.labels.iter().any(|l| l.id == id),
            EntityKind::Placement => self.placements.iter().any(|p| p.id == id),
        }
    }

    pub fn room_mut(&mut self, id: EntityId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    pub fn label(&self, id: EntityId) -> Option<&TextLabel> {
        self.labels.iter().find(|l| l.id == id)
    }

    pub fn label_mut(&mut self, id: EntityId) -> Option<&mut TextLabel> {
        self.labels.iter_mut().find(|l| l.id == id)
    }

    /// Ids of every selected room, in draw order
    pub fn selected_rooms(&self) -> Vec<EntityId> {
        self.rooms.iter().filter(|r| r.selected).map(|r| r.id).collect()
    }

    pub fn deselect_all(&mut self) {
        for room in &mut self.rooms {
            room.selected = false;
        }
    }

    /// Tight grid-space bounds of all committed geometry
    ///
    /// Labels contribute their estimated text box, which depends on the
    /// pixel size of a grid unit.
    pub fn content_bounds(&self, cell_size: f64) -> Option<Rect> {
        let rooms = self.rooms.iter().filter_map(Room::bounds);
        let walls = self.walls.iter().map(Wall::bounds);
        let paths = self.paths.iter().filter_map(FreehandPath::bounds);
        let labels = self.labels.iter().map(|l| l.text_box(cell_size));
        let placements = self.placements.iter().map(Placement::bounds);

        rooms
            .chain(walls)
            .chain(paths)
            .chain(labels)
            .chain(placements)
            .reduce(|acc, r| acc.union(r))
    }
}
