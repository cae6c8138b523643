// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! The single in-progress entity, if any.
//!
//! Each tool builds its entity inside one variant of `Draft`. Because the
//! session holds exactly one `Draft`, at most one construction can be in
//! flight, and replacing it (switching tools, Escape) drops the old one.

use crate::model::EntityId;
use kurbo::Point;

/// An entity under construction, all points in grid space
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Draft {
    #[default]
    None,
    /// Room polygon being clicked out
    Room { points: Vec<Point>, closed: bool },
    /// Wall with its first endpoint placed
    Wall { start: Point },
    /// Freehand stroke being dragged
    Stroke { points: Vec<Point> },
    /// Label text being typed; `editing` points at the label being re-edited
    Text {
        position: Point,
        text: String,
        editing: Option<EntityId>,
    },
}

impl Draft {
    pub fn is_none(&self) -> bool {
        matches!(self, Draft::None)
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Draft::None => "none",
            Draft::Room { .. } => "room",
            Draft::Wall { .. } => "wall",
            Draft::Stroke { .. } => "stroke",
            Draft::Text { .. } => "text",
        }
    }

    /// Vertices of a room draft
    pub fn room_points(&self) -> Option<&[Point]> {
        match self {
            Draft::Room { points, .. } => Some(points),
            _ => None,
        }
    }

    pub fn is_closed_room(&self) -> bool {
        matches!(self, Draft::Room { closed: true, .. })
    }

    /// Take the draft out, leaving `None` behind
    pub fn take(&mut self) -> Draft {
        std::mem::take(self)
    }
}
