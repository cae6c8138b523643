// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing for EditSession

use super::EditSession;
use crate::geometry;
use crate::model::{EntityId, EntityKind};
use kurbo::Point;

/// The entity under a screen point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub kind: EntityKind,
    pub id: EntityId,
}

impl Hit {
    fn new(kind: EntityKind, id: EntityId) -> Self {
        Self { kind, id }
    }
}

impl EditSession {
    /// Find the entity under a screen point
    ///
    /// Kinds are tried in a fixed priority: labels, placements, rooms,
    /// walls, then freehand paths. Within a kind the first match in storage
    /// order wins. Pick radii are in screen pixels, so they feel the same at
    /// every zoom level.
    pub fn hit_test(&self, screen_pos: Point) -> Option<Hit> {
        let hit = self
            .hit_label(screen_pos)
            .or_else(|| self.hit_placement(screen_pos))
            .or_else(|| self.hit_room(screen_pos))
            .or_else(|| self.hit_wall(screen_pos))
            .or_else(|| self.hit_path(screen_pos));

        match hit {
            Some(hit) => {
                tracing::debug!("[hit_test] {:?} {} at {:?}", hit.kind, hit.id, screen_pos)
            }
            None => tracing::debug!("[hit_test] nothing at {:?}", screen_pos),
        }
        hit
    }

    /// Hit test restricted to labels
    pub fn hit_label(&self, screen_pos: Point) -> Option<Hit> {
        let radius = self.config.interaction.label_hit_radius;
        let grid_pos = self.viewport.to_grid(screen_pos);
        let cell_size = self.viewport.cell_size;

        self.scene
            .labels
            .iter()
            .find(|label| {
                let anchor = self.viewport.to_screen(label.position);
                (anchor - screen_pos).hypot() <= radius
                    || label.text_box(cell_size).contains(grid_pos)
            })
            .map(|label| Hit::new(EntityKind::Label, label.id))
    }

    fn hit_placement(&self, screen_pos: Point) -> Option<Hit> {
        let grid_pos = self.viewport.to_grid(screen_pos);
        self.scene
            .placements
            .iter()
            .find(|p| p.contains(grid_pos))
            .map(|p| Hit::new(EntityKind::Placement, p.id))
    }

    fn hit_room(&self, screen_pos: Point) -> Option<Hit> {
        let grid_pos = self.viewport.to_grid(screen_pos);
        self.scene
            .rooms
            .iter()
            .find(|room| room.contains(grid_pos))
            .map(|room| Hit::new(EntityKind::Room, room.id))
    }

    fn hit_wall(&self, screen_pos: Point) -> Option<Hit> {
        let radius = self.config.interaction.path_hit_radius;
        self.scene
            .walls
            .iter()
            .find(|wall| {
                let a = self.viewport.to_screen(wall.start);
                let b = self.viewport.to_screen(wall.end);
                geometry::distance_to_segment(screen_pos, a, b) < radius
            })
            .map(|wall| Hit::new(EntityKind::Wall, wall.id))
    }

    fn hit_path(&self, screen_pos: Point) -> Option<Hit> {
        let radius = self.config.interaction.path_hit_radius;
        self.scene
            .paths
            .iter()
            .find(|path| {
                let screen: Vec<Point> =
                    path.points.iter().map(|&p| self.viewport.to_screen(p)).collect();
                geometry::distance_to_polyline(screen_pos, &screen).is_some_and(|d| d < radius)
            })
            .map(|path| Hit::new(EntityKind::Path, path.id))
    }
}
