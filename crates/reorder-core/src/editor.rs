//! Position Editor
//!
//! State behind the "move to number" modal: a clamped value with step
//! buttons and a slider. Once confirmed it is applying, and further
//! confirms and edits are ignored.

use crate::item::{Item, ItemId};
use crate::position::{clamp_position, parse_position};

/// A confirmed, not yet applied, single-item move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub item_id: ItemId,
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionEditor {
    item_id: ItemId,
    item_name: String,
    current: usize,
    value: usize,
    max: usize,
    /// Confirmed; waiting for the delayed apply
    applying: bool,
}

impl PositionEditor {
    /// Open for `item` in a list of `len` items
    pub fn open(item: &Item, len: usize) -> Self {
        let max = len.max(1);
        Self {
            item_id: item.id,
            item_name: item.name.clone(),
            current: item.position,
            value: clamp_position(item.position as i64, max),
            max,
            applying: false,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Position when the editor was opened
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn value(&self) -> usize {
        self.value
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn is_applying(&self) -> bool {
        self.applying
    }

    /// Free-text or slider input
    pub fn set_value(&mut self, raw: &str) {
        if self.is_applying() {
            return;
        }
        self.value = clamp_position(parse_position(raw), self.max);
    }

    pub fn increment(&mut self) {
        if !self.is_applying() {
            self.value = (self.value + 1).min(self.max);
        }
    }

    pub fn decrement(&mut self) {
        if !self.is_applying() {
            self.value = self.value.saturating_sub(1).max(1);
        }
    }

    /// Middle label of the slider scale
    pub fn midpoint(&self) -> usize {
        self.max.div_ceil(2)
    }

    /// How much of the slider track is filled, 0..=100
    pub fn fill_percent(&self) -> f64 {
        self.value as f64 / self.max as f64 * 100.0
    }

    /// Start applying. None if a confirm is already in flight.
    pub fn confirm(&mut self) -> Option<PendingMove> {
        if self.is_applying() {
            return None;
        }
        self.applying = true;
        Some(PendingMove {
            item_id: self.item_id,
            target: self.value,
        })
    }
}
