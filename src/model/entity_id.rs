// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Process-wide identity for committed plan entities.
//!
//! Undo entries, hit results and label edits all point at entities by id
//! rather than by index, because deletes and undo reinsertion shift indices
//! around. Ids are handed out once and never recycled, so a stale id simply
//! matches nothing.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a room, wall, stroke, label or placement
///
/// Non-zero, so `Option<EntityId>` (a label draft's `editing` target) costs
/// no extra space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(NonZeroU64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Hand out a fresh id; later ids compare greater
    pub fn allocate() -> Self {
        let raw = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and would take centuries to wrap
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MAX))
    }

    pub fn raw(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
