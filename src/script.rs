// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Recorded input sessions
//!
//! A gesture script is a JSON list of canvas events. The host binary replays
//! one into a fresh canvas and exports the result, which makes a whole
//! drawing session reproducible without a window.
//!
//! ```json
//! {
//!   "canvas": [1024, 768],
//!   "events": [
//!     { "type": "tool", "tool": "room" },
//!     { "type": "click", "x": 100, "y": 100 },
//!     { "type": "key", "key": "enter" }
//!   ]
//! }
//! ```

use crate::canvas::{Canvas, CanvasCommand, Key};
use crate::editing::Modifiers;
use crate::model::PlacementPayload;
use crate::tools::ToolId;
use anyhow::{Context, Result};
use kurbo::{Point, Size};
use serde::Deserialize;
use std::path::Path;

/// Virtual time between consecutive events, in milliseconds
///
/// Larger than the double-click window, so only events with an explicit
/// `at_ms` can form a double-click.
const EVENT_INTERVAL_MS: u64 = 600;

fn default_canvas() -> [f64; 2] {
    [1024.0, 768.0]
}

fn default_drag_steps() -> u32 {
    8
}

/// A recorded session
#[derive(Debug, Clone, Deserialize)]
pub struct GestureScript {
    /// Canvas size in screen pixels
    #[serde(default = "default_canvas")]
    pub canvas: [f64; 2],
    pub events: Vec<ScriptEvent>,
}

/// One input event, positions in screen pixels
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Resize {
        width: f64,
        height: f64,
    },
    Tool {
        tool: ToolId,
    },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        at_ms: Option<u64>,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    PointerLeave,
    /// Press and release at one point
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        at_ms: Option<u64>,
    },
    /// Press, move in even steps, release
    Drag {
        from: [f64; 2],
        to: [f64; 2],
        #[serde(default = "default_drag_steps")]
        steps: u32,
    },
    TouchStart {
        id: u64,
        x: f64,
        y: f64,
    },
    TouchMove {
        id: u64,
        x: f64,
        y: f64,
    },
    TouchEnd {
        id: u64,
        x: f64,
        y: f64,
    },
    Wheel {
        delta_y: f64,
    },
    Key {
        key: Key,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
    },
    Text {
        text: String,
    },
    Command {
        command: CanvasCommand,
    },
    DropPlacement {
        x: f64,
        y: f64,
        payload: PlacementPayload,
    },
}

impl GestureScript {
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("invalid gesture script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read gesture script {}", path.display()))?;
        let script = Self::from_json(&source)
            .with_context(|| format!("failed to parse gesture script {}", path.display()))?;
        tracing::info!("Loaded {} events from {}", script.events.len(), path.display());
        Ok(script)
    }

    /// Feed every event into `canvas`
    ///
    /// Stops at the first placement the canvas rejects.
    pub fn replay(&self, canvas: &mut Canvas) -> Result<()> {
        canvas.resize(Size::new(self.canvas[0], self.canvas[1]));
        let mut clock = 0;

        for (index, event) in self.events.iter().enumerate() {
            clock += EVENT_INTERVAL_MS;
            tracing::debug!("Replaying event {}: {:?}", index, event);
            match event {
                ScriptEvent::Resize { width, height } => canvas.resize(Size::new(*width, *height)),
                ScriptEvent::Tool { tool } => canvas.set_tool(*tool),
                ScriptEvent::PointerDown { x, y, at_ms } => {
                    clock = at_ms.unwrap_or(clock);
                    canvas.pointer_down(Point::new(*x, *y), clock);
                }
                ScriptEvent::PointerMove { x, y } => canvas.pointer_move(Point::new(*x, *y)),
                ScriptEvent::PointerUp { x, y } => canvas.pointer_up(Point::new(*x, *y)),
                ScriptEvent::PointerLeave => canvas.pointer_leave(),
                ScriptEvent::Click { x, y, at_ms } => {
                    clock = at_ms.unwrap_or(clock);
                    canvas.pointer_down(Point::new(*x, *y), clock);
                    canvas.pointer_up(Point::new(*x, *y));
                }
                ScriptEvent::Drag { from, to, steps } => {
                    let from = Point::new(from[0], from[1]);
                    let to = Point::new(to[0], to[1]);
                    canvas.pointer_down(from, clock);
                    let steps = (*steps).max(1);
                    for i in 1..=steps {
                        canvas.pointer_move(from.lerp(to, i as f64 / steps as f64));
                    }
                    canvas.pointer_up(to);
                }
                ScriptEvent::TouchStart { id, x, y } => {
                    canvas.touch_start(*id, Point::new(*x, *y), clock)
                }
                ScriptEvent::TouchMove { id, x, y } => canvas.touch_move(*id, Point::new(*x, *y)),
                ScriptEvent::TouchEnd { id, x, y } => canvas.touch_end(*id, Point::new(*x, *y)),
                ScriptEvent::Wheel { delta_y } => canvas.scroll_zoom(*delta_y),
                ScriptEvent::Key { key, ctrl, shift } => {
                    let mods = Modifiers {
                        ctrl: *ctrl,
                        shift: *shift,
                        ..Modifiers::default()
                    };
                    canvas.key_down(key.clone(), mods);
                }
                ScriptEvent::Text { text } => {
                    canvas.text_input(text);
                }
                ScriptEvent::Command { command } => {
                    canvas.execute(*command);
                }
                ScriptEvent::DropPlacement { x, y, payload } => {
                    canvas
                        .drop_placement(payload, Point::new(*x, *y))
                        .with_context(|| format!("event {index}: placement rejected"))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;

    fn replay(json: &str) -> Canvas {
        let script = GestureScript::from_json(json).unwrap();
        let mut canvas = Canvas::new(CanvasConfig::default());
        script.replay(&mut canvas).unwrap();
        canvas
    }

    #[test]
    fn parses_every_event_kind() {
        let script = GestureScript::from_json(
            r##"{
                "events": [
                    { "type": "resize", "width": 600, "height": 400 },
                    { "type": "tool", "tool": "freehand" },
                    { "type": "pointer_down", "x": 1, "y": 2, "at_ms": 5 },
                    { "type": "pointer_move", "x": 1, "y": 2 },
                    { "type": "pointer_up", "x": 1, "y": 2 },
                    { "type": "pointer_leave" },
                    { "type": "click", "x": 1, "y": 2 },
                    { "type": "drag", "from": [0, 0], "to": [10, 10] },
                    { "type": "touch_start", "id": 1, "x": 1, "y": 2 },
                    { "type": "touch_move", "id": 1, "x": 1, "y": 2 },
                    { "type": "touch_end", "id": 1, "x": 1, "y": 2 },
                    { "type": "wheel", "delta_y": -3 },
                    { "type": "key", "key": "enter" },
                    { "type": "key", "key": { "character": "z" }, "ctrl": true },
                    { "type": "text", "text": "Bath" },
                    { "type": "command", "command": { "pan": "up" } },
                    { "type": "command", "command": "export" },
                    { "type": "drop_placement", "x": 5, "y": 5,
                      "payload": { "kind": "bed", "width": 6, "height": 7, "color": "#a0c4ff" } }
                ]
            }"##,
        )
        .unwrap();
        assert_eq!(script.canvas, [1024.0, 768.0]);
        assert_eq!(script.events.len(), 18);
        assert!(matches!(script.events[7], ScriptEvent::Drag { steps: 8, .. }));
    }

    #[test]
    fn unknown_event_is_an_error() {
        let err = GestureScript::from_json(r#"{ "events": [ { "type": "teleport" } ] }"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("invalid gesture script"));
    }

    #[test]
    fn replays_a_room() {
        let canvas = replay(
            r#"{
                "events": [
                    { "type": "tool", "tool": "room" },
                    { "type": "click", "x": 40, "y": 40 },
                    { "type": "click", "x": 240, "y": 40 },
                    { "type": "click", "x": 240, "y": 160 },
                    { "type": "click", "x": 40, "y": 160 },
                    { "type": "click", "x": 45, "y": 42 },
                    { "type": "key", "key": "enter" }
                ]
            }"#,
        );
        let rooms = &canvas.scene().rooms;
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].points.len(), 4);
        assert_eq!(rooms[0].area, 60.0);
        assert_eq!(rooms[0].label, "Room 1");
    }

    #[test]
    fn replays_label_drag_and_double_click_edit() {
        let canvas = replay(
            r#"{
                "events": [
                    { "type": "tool", "tool": "label" },
                    { "type": "click", "x": 100, "y": 100 },
                    { "type": "text", "text": "Closet" },
                    { "type": "key", "key": "enter" },
                    { "type": "tool", "tool": "select" },
                    { "type": "drag", "from": [100, 100], "to": [200, 100], "steps": 4 },
                    { "type": "click", "x": 200, "y": 100, "at_ms": 100000 },
                    { "type": "click", "x": 200, "y": 100, "at_ms": 100200 },
                    { "type": "key", "key": "backspace" },
                    { "type": "text", "text": "s" },
                    { "type": "key", "key": "enter" }
                ]
            }"#,
        );
        let labels = &canvas.scene().labels;
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "Closes");
        assert_eq!(labels[0].position, Point::new(10.0, 5.0));
        // add, move, rename
        assert_eq!(canvas.session.undo.len(), 3);
    }

    #[test]
    fn rejected_placement_stops_replay() {
        let script = GestureScript::from_json(
            r#"{
                "events": [
                    { "type": "drop_placement", "x": 5, "y": 5,
                      "payload": { "kind": "rug", "width": 0, "height": 3 } },
                    { "type": "tool", "tool": "wall" }
                ]
            }"#,
        )
        .unwrap();
        let mut canvas = Canvas::default();
        let err = script.replay(&mut canvas).unwrap_err();
        assert!(format!("{err:#}").contains("event 0"));
        assert_eq!(canvas.tool_id(), ToolId::Select);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = GestureScript::load(Path::new("/nonexistent/plan.json")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read gesture script"));
    }
}
