// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard event handlers for Canvas

use super::{Canvas, CanvasCommand, PanDirection};
use crate::editing::{Draft, Modifiers};
use crate::tools::ToolId;
use serde::Deserialize;

/// A key press, reduced to what the canvas reacts to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// A printable character, as the host's keyboard layout produced it
    Character(String),
}

/// Ctrl on Linux and Windows, Cmd on macOS
fn is_command(mods: Modifiers) -> bool {
    mods.ctrl || mods.meta
}

impl Canvas {
    /// Handle a key press; returns whether the canvas used it
    pub fn key_down(&mut self, key: Key, mods: Modifiers) -> bool {
        let handled = self.handle_text_keys(&key, mods)
            || self.handle_command_shortcuts(&key, mods)
            || self.handle_draft_keys(&key)
            || self.handle_arrow_keys(&key)
            || self.handle_tool_switching(&key, mods);
        self.after_event();
        handled
    }

    /// Committed text from the host's input method
    pub fn text_input(&mut self, text: &str) -> bool {
        let handled = self.session.insert_text(text);
        self.after_event();
        handled
    }

    /// While a label is being typed, keys edit the text
    fn handle_text_keys(&mut self, key: &Key, mods: Modifiers) -> bool {
        if !self.session.is_typing() {
            return false;
        }
        match key {
            Key::Enter => {
                self.session.submit_text();
            }
            Key::Escape => {
                self.session.cancel_draft();
            }
            Key::Backspace => {
                self.session.delete_text_backward();
            }
            // Swallowed so typing never deletes selected rooms
            Key::Delete => {}
            Key::Character(c) if !is_command(mods) => {
                self.session.insert_text(c);
            }
            _ => return false,
        }
        true
    }

    fn handle_command_shortcuts(&mut self, key: &Key, mods: Modifiers) -> bool {
        if !is_command(mods) {
            return false;
        }
        let command = match key {
            Key::Character(c) if c.eq_ignore_ascii_case("z") => CanvasCommand::Undo,
            Key::Character(c) if c == "+" || c == "=" => CanvasCommand::ZoomIn,
            Key::Character(c) if c == "-" || c == "_" => CanvasCommand::ZoomOut,
            Key::Character(c) if c == "0" => CanvasCommand::ResetView,
            Key::Character(c) if c.eq_ignore_ascii_case("e") => CanvasCommand::Export,
            _ => return false,
        };
        self.execute(command);
        true
    }

    fn handle_draft_keys(&mut self, key: &Key) -> bool {
        match key {
            Key::Enter => self.session.confirm_room().is_some(),
            Key::Escape => {
                let dragging = self.mouse.is_down();
                if dragging {
                    self.cancel_gesture();
                }
                self.session.cancel_draft() || dragging
            }
            Key::Backspace if matches!(self.session.draft, Draft::Room { .. }) => {
                self.session.remove_last_vertex()
            }
            Key::Backspace | Key::Delete => self.session.delete_selected() > 0,
            _ => false,
        }
    }

    fn handle_arrow_keys(&mut self, key: &Key) -> bool {
        let direction = match key {
            Key::ArrowLeft => PanDirection::Left,
            Key::ArrowRight => PanDirection::Right,
            Key::ArrowUp => PanDirection::Up,
            Key::ArrowDown => PanDirection::Down,
            _ => return false,
        };
        self.pan(direction)
    }

    fn handle_tool_switching(&mut self, key: &Key, mods: Modifiers) -> bool {
        if is_command(mods) || mods.shift {
            return false;
        }
        let Key::Character(c) = key else {
            return false;
        };
        let tool_id = match c.to_ascii_lowercase().as_str() {
            "v" => ToolId::Select,
            "e" => ToolId::Erase,
            "r" => ToolId::Room,
            "w" => ToolId::Wall,
            "f" => ToolId::Freehand,
            "t" => ToolId::Label,
            "h" => ToolId::Pan,
            _ => return false,
        };
        self.set_tool(tool_id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use kurbo::Point;

    fn press(canvas: &mut Canvas, key: Key) -> bool {
        canvas.key_down(key, Modifiers::default())
    }

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Modifiers::default()
        }
    }

    fn draw_room(canvas: &mut Canvas) {
        canvas.set_tool(ToolId::Room);
        click(canvas, 20.0, 20.0, 0);
        click(canvas, 120.0, 20.0, 1000);
        click(canvas, 120.0, 120.0, 2000);
        click(canvas, 20.0, 120.0, 3000);
    }

    #[test]
    fn enter_confirms_room_and_backspace_removes_vertex() {
        let (mut canvas, _) = canvas();
        draw_room(&mut canvas);
        assert!(press(&mut canvas, Key::Backspace));
        assert_eq!(canvas.session.draft.room_points().map(<[_]>::len), Some(3));
        assert!(press(&mut canvas, Key::Enter));
        assert_eq!(canvas.scene().rooms.len(), 1);
        assert_eq!(canvas.scene().rooms[0].area, 12.5);
        // Nothing left to confirm
        assert!(!press(&mut canvas, Key::Enter));
    }

    #[test]
    fn escape_discards_draft() {
        let (mut canvas, _) = canvas();
        draw_room(&mut canvas);
        assert!(press(&mut canvas, Key::Escape));
        assert!(canvas.session.draft.is_none());
        assert!(!press(&mut canvas, Key::Escape));
    }

    #[test]
    fn typing_goes_to_label_not_shortcuts() {
        let (mut canvas, _) = canvas();
        canvas.set_tool(ToolId::Label);
        click(&mut canvas, 100.0, 100.0, 0);
        for c in ["W", "e", "t"] {
            press(&mut canvas, Key::Character(c.to_string()));
        }
        canvas.text_input(" bar");
        press(&mut canvas, Key::Backspace);
        assert_eq!(canvas.tool_id(), ToolId::Label);
        press(&mut canvas, Key::Enter);
        assert_eq!(canvas.scene().labels[0].text, "Wet ba");
    }

    #[test]
    fn delete_removes_selected_rooms_once() {
        let (mut canvas, log) = canvas();
        draw_room(&mut canvas);
        press(&mut canvas, Key::Enter);
        canvas.set_tool(ToolId::Select);
        click(&mut canvas, 60.0, 60.0, 10_000);
        assert_eq!(canvas.scene().selected_rooms().len(), 1);

        assert!(press(&mut canvas, Key::Delete));
        assert!(canvas.scene().rooms.is_empty());
        assert!(!press(&mut canvas, Key::Delete));

        assert!(canvas.key_down(Key::Character("z".into()), ctrl()));
        assert_eq!(canvas.scene().rooms.len(), 1);
        assert_eq!(log.borrow().entity_counts.last(), Some(&1));
    }

    #[test]
    fn tool_shortcuts() {
        let (mut canvas, _) = canvas();
        press(&mut canvas, Key::Character("w".into()));
        assert_eq!(canvas.tool_id(), ToolId::Wall);
        press(&mut canvas, Key::Character("F".into()));
        assert_eq!(canvas.tool_id(), ToolId::Freehand);
        // Command-modified letters are not tool shortcuts
        canvas.key_down(Key::Character("r".into()), ctrl());
        assert_eq!(canvas.tool_id(), ToolId::Freehand);
    }

    #[test]
    fn zoom_and_arrow_shortcuts() {
        let (mut canvas, _) = canvas();
        canvas.key_down(Key::Character("=".into()), ctrl());
        assert_eq!(canvas.session.viewport.zoom_percent, 125.0);
        canvas.key_down(Key::Character("0".into()), ctrl());
        assert_eq!(canvas.session.viewport.zoom_percent, 100.0);

        press(&mut canvas, Key::ArrowRight);
        assert_eq!(canvas.session.viewport.to_screen(Point::ZERO), Point::new(-100.0, 0.0));
    }
}
