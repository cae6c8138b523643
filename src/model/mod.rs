// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene data model

pub mod entities;
pub mod entity_id;
pub mod placement;
pub mod scene;

pub use entities::{FreehandPath, Room, TextLabel, Wall};
pub use entity_id::EntityId;
pub use placement::{PayloadError, Placement, PlacementPayload, PlacementShape};
pub use scene::{Entity, EntityKind, Scene};
