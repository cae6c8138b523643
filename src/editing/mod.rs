// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod draft;
pub mod mouse;
pub mod session;
pub mod undo;
pub mod viewport;

pub use draft::Draft;
pub use mouse::{Drag, Modifiers, Mouse, MouseButton, MouseDelegate, MouseEvent};
pub use session::{EditSession, Hit};
pub use undo::{Removed, UndoEntry, UndoLog};
pub use viewport::ViewPort;
