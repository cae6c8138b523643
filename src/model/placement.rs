// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Furniture placements dropped onto the canvas from an external palette.
//!
//! The palette hands over an arbitrary `{kind, width, height, color, shape}`
//! record. The canvas turns it into a `Placement` centred on the drop point,
//! with the size kept in grid units (feet).

use super::EntityId;
use crate::theme;
use kurbo::{Ellipse, Point, Rect, Shape, Size};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;
use thiserror::Error;

/// Errors produced while decoding a placement payload
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed placement payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid placement size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("invalid placement color {0:?}")]
    InvalidColor(String),
}

/// Outline used to draw and hit test a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementShape {
    #[default]
    Rect,
    Ellipse,
}

/// The record delivered by a palette drag-and-drop
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlacementPayload {
    /// Free-form kind, e.g. "bed" or "sofa"
    pub kind: String,
    /// Width in grid units
    pub width: f64,
    /// Height in grid units
    pub height: f64,
    /// CSS-style color string; falls back to the theme default
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub shape: PlacementShape,
}

impl PlacementPayload {
    /// Decode a payload from its JSON form
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        let payload: Self = serde_json::from_str(json)?;
        payload.validate()?;
        Ok(payload)
    }

    /// Reject sizes that cannot be drawn
    pub fn validate(&self) -> Result<(), PayloadError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(PayloadError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Resolve the color string
    pub fn resolved_color(&self) -> Result<Color, PayloadError> {
        match &self.color {
            None => Ok(theme::entity::PLACEMENT_FILL),
            Some(text) => parse_color(text)
                .map(|c| c.to_alpha_color::<Srgb>())
                .map_err(|_| PayloadError::InvalidColor(text.clone())),
        }
    }
}

/// A furniture item dropped onto the plan
#[derive(Debug, Clone)]
pub struct Placement {
    pub id: EntityId,
    pub kind: String,
    /// Centre in grid space
    pub position: Point,
    /// Footprint in grid units
    pub size: Size,
    pub color: Color,
    pub shape: PlacementShape,
}

impl Placement {
    /// Instantiate a payload centred on a grid position
    pub fn from_payload(payload: &PlacementPayload, position: Point) -> Result<Self, PayloadError> {
        payload.validate()?;
        Ok(Self {
            id: EntityId::allocate(),
            kind: payload.kind.clone(),
            position,
            size: Size::new(payload.width, payload.height),
            color: payload.resolved_color()?,
            shape: payload.shape,
        })
    }

    /// Footprint rectangle in grid space
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, self.size)
    }

    /// Whether a grid point falls inside the footprint
    pub fn contains(&self, grid_pos: Point) -> bool {
        match self.shape {
            PlacementShape::Rect => self.bounds().contains(grid_pos),
            PlacementShape::Ellipse => Ellipse::from_rect(self.bounds()).contains(grid_pos),
        }
    }
}
