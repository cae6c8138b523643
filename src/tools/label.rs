// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Label tool
//!
//! A click starts a new text draft at the pointer. Any text already being
//! typed is committed first, so clicking elsewhere never loses work.
//! Typing goes through the canvas keyboard handler.

use crate::editing::{EditSession, MouseDelegate, MouseEvent};
use crate::tools::{Tool, ToolId};

#[derive(Debug, Clone, Copy, Default)]
pub struct LabelTool;

impl Tool for LabelTool {
    fn id(&self) -> ToolId {
        ToolId::Label
    }
}

impl MouseDelegate for LabelTool {
    type Data = EditSession;

    fn left_click(&mut self, event: MouseEvent, session: &mut EditSession) {
        if session.is_typing() {
            session.submit_text();
        }
        session.begin_text(event.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{Draft, MouseButton};
    use kurbo::Point;

    fn at(x: f64, y: f64) -> MouseEvent {
        MouseEvent::new(Point::new(x, y), Some(MouseButton::Left))
    }

    #[test]
    fn click_starts_text_draft() {
        let mut session = EditSession::default();
        let mut tool = LabelTool;
        tool.left_click(at(60.0, 40.0), &mut session);
        match &session.draft {
            Draft::Text { position, text, editing } => {
                assert_eq!(*position, Point::new(3.0, 2.0));
                assert!(text.is_empty());
                assert!(editing.is_none());
            }
            other => panic!("expected text draft, got {other:?}"),
        }
    }

    #[test]
    fn second_click_commits_first_label() {
        let mut session = EditSession::default();
        let mut tool = LabelTool;
        tool.left_click(at(60.0, 40.0), &mut session);
        session.insert_text("Pantry");
        tool.left_click(at(200.0, 200.0), &mut session);

        assert_eq!(session.scene.labels.len(), 1);
        assert_eq!(session.scene.labels[0].text, "Pantry");
        assert!(session.is_typing());
    }

    #[test]
    fn empty_text_is_discarded_on_next_click() {
        let mut session = EditSession::default();
        let mut tool = LabelTool;
        tool.left_click(at(60.0, 40.0), &mut session);
        session.insert_text("   ");
        tool.left_click(at(200.0, 200.0), &mut session);
        assert!(session.scene.labels.is_empty());
        assert!(!session.undo.can_undo());
    }
}
