// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Floorsketch: a grid-based floor plan sketching core
//!
//! The crate is windowing-agnostic. A host feeds pointer, touch and key
//! events into a [`Canvas`], draws the [`DisplayList`] it returns, and
//! listens for changes through a [`CanvasObserver`].

pub mod canvas;
pub mod config;
pub mod editing;
pub mod export;
pub mod geometry;
pub mod model;
pub mod render;
pub mod script;
pub mod settings;
pub mod theme;
pub mod tools;

pub use canvas::{Canvas, CanvasCommand, CanvasObserver, Key, PanCapability, PanDirection};
pub use config::CanvasConfig;
pub use export::{ExportError, ExportedImage};
pub use model::Scene;
pub use render::DisplayList;
pub use script::GestureScript;
pub use tools::ToolId;

/// Initialize the tracing subscriber
///
/// Controlled by `RUST_LOG`; defaults to `floorsketch=info`.
pub fn init_logging() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "floorsketch=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
