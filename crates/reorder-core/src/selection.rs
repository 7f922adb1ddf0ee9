//! Selection Mode
//!
//! Normal: single-item editing, dragging allowed.
//! Selecting: clicks toggle membership, dragging disabled.

use std::collections::BTreeSet;

use crate::item::ItemId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Normal,
    Selecting(BTreeSet<ItemId>),
}

impl Selection {
    pub fn is_selecting(&self) -> bool {
        matches!(self, Selection::Selecting(_))
    }

    pub fn drag_enabled(&self) -> bool {
        !self.is_selecting()
    }

    /// Long-press on an item. Enters Selecting seeded with `id`;
    /// while already Selecting it just adds `id`.
    pub fn begin(&mut self, id: ItemId) {
        match self {
            Selection::Normal => *self = Selection::Selecting(BTreeSet::from([id])),
            Selection::Selecting(ids) => {
                ids.insert(id);
            }
        }
    }

    /// Flip membership of `id`. Returns false in Normal mode.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self {
            Selection::Normal => false,
            Selection::Selecting(ids) => {
                if !ids.remove(&id) {
                    ids.insert(id);
                }
                true
            }
        }
    }

    pub fn contains(&self, id: ItemId) -> bool {
        match self {
            Selection::Normal => false,
            Selection::Selecting(ids) => ids.contains(&id),
        }
    }

    pub fn ids(&self) -> Option<&BTreeSet<ItemId>> {
        match self {
            Selection::Normal => None,
            Selection::Selecting(ids) => Some(ids),
        }
    }

    pub fn count(&self) -> usize {
        self.ids().map_or(0, BTreeSet::len)
    }

    /// Drop ids for which `exists` is false (after undo/redo)
    pub fn retain_existing(&mut self, exists: impl Fn(ItemId) -> bool) {
        if let Selection::Selecting(ids) = self {
            ids.retain(|id| exists(*id));
        }
    }

    /// Back to Normal, returning what was selected
    pub fn finish(&mut self) -> BTreeSet<ItemId> {
        match std::mem::take(self) {
            Selection::Normal => BTreeSet::new(),
            Selection::Selecting(ids) => ids,
        }
    }
}
