//! Reorder Engine
//!
//! Owns the ordered list and its undo/redo history. Every mutation builds a
//! new list, renumbers it, and swaps it in whole.

use std::collections::BTreeSet;

use crate::error::{ReorderError, ReorderResult};
use crate::history::History;
use crate::item::{load_items, normalize, renumber, Item, ItemId, PositionUpdate};
use crate::position::clamp_position;
use crate::sink::PositionSink;

/// Undo entries kept unless configured otherwise
pub const DEFAULT_HISTORY_LIMIT: usize = 200;

/// What a mutating call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The list changed and the prior list was recorded
    Applied,
    /// Nothing changed; no history entry
    Unchanged,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

#[derive(Debug, Clone)]
pub struct ReorderEngine {
    items: Vec<Item>,
    history: History<Vec<Item>>,
}

impl Default for ReorderEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ReorderEngine {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_history_limit(items, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(items: Vec<Item>, limit: usize) -> Self {
        Self {
            items: normalize(items),
            history: History::new(limit),
        }
    }

    /// Build from a JSON item array; anything else yields an empty list.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => Self::new(load_items(value)),
            Err(e) => {
                log::warn!("[LOAD] invalid JSON ({}); starting with an empty list", e);
                Self::default()
            }
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.get(id).map(|item| item.position)
    }

    pub fn positions(&self) -> Vec<PositionUpdate> {
        self.items.iter().map(PositionUpdate::from).collect()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    fn index_of(&self, id: ItemId) -> ReorderResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ReorderError::NotFound(id))
    }

    /// Fails only when the set is non-empty and none of its ids are present
    fn check_any_present(&self, ids: &BTreeSet<ItemId>) -> ReorderResult<()> {
        match ids.iter().next() {
            Some(&first) if !ids.iter().any(|id| self.contains(*id)) => {
                Err(ReorderError::NotFound(first))
            }
            _ => Ok(()),
        }
    }

    /// Swap in `next` after renumbering, recording the current list.
    /// A result equal to the current list is dropped.
    fn commit(&mut self, mut next: Vec<Item>, op: &str) -> Outcome {
        renumber(&mut next);
        if next == self.items {
            log::debug!("[REORDER] {}: no change", op);
            return Outcome::Unchanged;
        }
        let before = std::mem::replace(&mut self.items, next);
        self.history.record(before);
        log::debug!(
            "[REORDER] {}: applied, {} items, undo depth {}",
            op,
            self.items.len(),
            self.history.undo_depth()
        );
        Outcome::Applied
    }

    // ========================
    // Mutations
    // ========================

    /// Move `active_id` into the slot currently held by `over_id`
    pub fn move_by_drag(&mut self, active_id: ItemId, over_id: ItemId) -> ReorderResult<Outcome> {
        if active_id == over_id {
            return Ok(Outcome::Unchanged);
        }
        let from = self.index_of(active_id)?;
        let to = self.index_of(over_id)?;

        let mut next = self.items.clone();
        let moved = next.remove(from);
        next.insert(to, moved);
        Ok(self.commit(next, "move_by_drag"))
    }

    /// Move one item to a 1-based position, clamped into `[1, len]`
    pub fn move_to_position(&mut self, item_id: ItemId, target: i64) -> ReorderResult<Outcome> {
        let from = self.index_of(item_id)?;
        let to = clamp_position(target, self.items.len()) - 1;

        let mut next = self.items.clone();
        let moved = next.remove(from);
        next.insert(to, moved);
        Ok(self.commit(next, "move_to_position"))
    }

    /// Pull the selected items out (keeping their order) and splice them back
    /// into the remainder at `target - 1`, clamped into `[0, remainder.len()]`.
    pub fn move_group_to_position(
        &mut self,
        ids: &BTreeSet<ItemId>,
        target: i64,
    ) -> ReorderResult<Outcome> {
        self.check_any_present(ids)?;
        let (selected, mut remainder): (Vec<Item>, Vec<Item>) = self
            .items
            .iter()
            .cloned()
            .partition(|item| ids.contains(&item.id));
        if selected.is_empty() {
            return Ok(Outcome::Unchanged);
        }

        let at = clamp_position(target, remainder.len() + 1) - 1;
        remainder.splice(at..at, selected);
        Ok(self.commit(remainder, "move_group_to_position"))
    }

    /// Remove every listed item
    pub fn delete_selected(&mut self, ids: &BTreeSet<ItemId>) -> ReorderResult<Outcome> {
        self.check_any_present(ids)?;
        let next: Vec<Item> = self
            .items
            .iter()
            .filter(|item| !ids.contains(&item.id))
            .cloned()
            .collect();
        Ok(self.commit(next, "delete_selected"))
    }

    pub fn undo(&mut self) -> Outcome {
        if !self.history.can_undo() {
            return Outcome::Unchanged;
        }
        match self.history.undo(self.items.clone()) {
            Some(previous) => {
                self.items = previous;
                log::debug!("[REORDER] undo: redo depth {}", self.history.redo_depth());
                Outcome::Applied
            }
            None => Outcome::Unchanged,
        }
    }

    pub fn redo(&mut self) -> Outcome {
        if !self.history.can_redo() {
            return Outcome::Unchanged;
        }
        match self.history.redo(self.items.clone()) {
            Some(next) => {
                self.items = next;
                log::debug!("[REORDER] redo: undo depth {}", self.history.undo_depth());
                Outcome::Applied
            }
            None => Outcome::Unchanged,
        }
    }

    /// Hand current positions to `sink` and make this the new baseline:
    /// nothing before a save can be undone.
    pub fn save<S: PositionSink + ?Sized>(&mut self, sink: &mut S) -> Vec<PositionUpdate> {
        let positions = self.positions();
        sink.save_positions(&positions);
        self.history.clear();
        log::info!("[SAVE] committed {} positions", positions.len());
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    fn abc() -> ReorderEngine {
        ReorderEngine::new(vec![
            Item::new(1, "A", 1),
            Item::new(2, "B", 2),
            Item::new(3, "C", 3),
        ])
    }

    fn abcd() -> ReorderEngine {
        ReorderEngine::new(vec![
            Item::new(1, "A", 1),
            Item::new(2, "B", 2),
            Item::new(3, "C", 3),
            Item::new(4, "D", 4),
        ])
    }

    fn names(engine: &ReorderEngine) -> Vec<&str> {
        engine.items().iter().map(|i| i.name.as_str()).collect()
    }

    fn assert_dense(engine: &ReorderEngine) {
        for (idx, item) in engine.items().iter().enumerate() {
            assert_eq!(item.position, idx + 1, "item {} out of place", item.id);
        }
    }

    fn ids(list: &[ItemId]) -> BTreeSet<ItemId> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_move_by_drag_down() {
        let mut engine = abcd();
        let outcome = engine.move_by_drag(1, 3).unwrap();
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(names(&engine), vec!["B", "C", "A", "D"]);
        assert_dense(&engine);
        assert!(engine.can_undo());
    }

    #[test]
    fn test_move_by_drag_up() {
        let mut engine = abcd();
        engine.move_by_drag(4, 2).unwrap();
        assert_eq!(names(&engine), vec!["A", "D", "B", "C"]);
        assert_dense(&engine);
    }

    #[test]
    fn test_move_by_drag_onto_self_is_noop() {
        let mut engine = abc();
        assert_eq!(engine.move_by_drag(2, 2).unwrap(), Outcome::Unchanged);
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_move_by_drag_unknown_id() {
        let mut engine = abc();
        assert_eq!(engine.move_by_drag(9, 1), Err(ReorderError::NotFound(9)));
        assert_eq!(engine.move_by_drag(1, 9), Err(ReorderError::NotFound(9)));
        assert_eq!(names(&engine), vec!["A", "B", "C"]);
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_move_to_position_front() {
        let mut engine = abc();
        engine.move_to_position(3, 1).unwrap();
        assert_eq!(names(&engine), vec!["C", "A", "B"]);
        assert_dense(&engine);
    }

    #[test]
    fn test_move_to_position_clamps() {
        let mut engine = abc();
        engine.move_to_position(1, 42).unwrap();
        assert_eq!(engine.position_of(1), Some(3));

        engine.move_to_position(1, -5).unwrap();
        assert_eq!(engine.position_of(1), Some(1));
    }

    #[test]
    fn test_move_to_current_position_pushes_no_history() {
        let mut engine = abc();
        assert_eq!(engine.move_to_position(2, 2).unwrap(), Outcome::Unchanged);
        assert_eq!(names(&engine), vec!["A", "B", "C"]);
        assert_eq!(engine.undo_depth(), 0);
    }

    #[test]
    fn test_move_to_position_unknown_id() {
        let mut engine = abc();
        assert!(engine.move_to_position(99, 1).is_err());
        assert_eq!(names(&engine), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_move_group_keeps_relative_order() {
        let mut engine = abcd();
        engine.move_group_to_position(&ids(&[2, 4]), 2).unwrap();
        assert_eq!(names(&engine), vec!["A", "B", "D", "C"]);
        assert_dense(&engine);
    }

    #[test]
    fn test_move_group_clamps_insertion_index() {
        let mut engine = abcd();
        engine.move_group_to_position(&ids(&[1, 3]), 100).unwrap();
        assert_eq!(names(&engine), vec!["B", "D", "A", "C"]);

        engine.move_group_to_position(&ids(&[3, 4]), 0).unwrap();
        assert_eq!(names(&engine), vec!["D", "C", "B", "A"]);
    }

    #[test]
    fn test_move_group_extreme_targets() {
        let mut engine = abcd();
        let far_below = crate::position::parse_position("-1e30");
        assert_eq!(far_below, i64::MIN);
        engine.move_group_to_position(&ids(&[4]), far_below).unwrap();
        assert_eq!(names(&engine), vec!["D", "A", "B", "C"]);

        engine.move_group_to_position(&ids(&[4]), i64::MAX).unwrap();
        assert_eq!(names(&engine), vec!["A", "B", "C", "D"]);

        engine.move_group_to_position(&ids(&[2, 3]), i64::MIN).unwrap();
        assert_eq!(names(&engine), vec!["B", "C", "A", "D"]);
        assert_dense(&engine);
    }

    #[test]
    fn test_move_group_ignores_missing_members() {
        let mut engine = abc();
        engine.move_group_to_position(&ids(&[3, 77]), 1).unwrap();
        assert_eq!(names(&engine), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_move_group_noop_and_errors() {
        let mut engine = abc();
        assert_eq!(engine.move_group_to_position(&BTreeSet::new(), 1).unwrap(), Outcome::Unchanged);
        assert_eq!(engine.move_group_to_position(&ids(&[1, 2]), 1).unwrap(), Outcome::Unchanged);
        assert_eq!(
            engine.move_group_to_position(&ids(&[8, 9]), 1),
            Err(ReorderError::NotFound(8))
        );
        assert!(!engine.can_undo());
    }

    #[test]
    fn test_delete_selected() {
        let mut engine = abc();
        engine.delete_selected(&ids(&[1])).unwrap();
        assert_eq!(names(&engine), vec!["B", "C"]);
        assert_dense(&engine);
        assert!(engine.get(1).is_none());
    }

    #[test]
    fn test_delete_everything() {
        let mut engine = abc();
        engine.delete_selected(&ids(&[1, 2, 3])).unwrap();
        assert!(engine.is_empty());
        engine.undo();
        assert_eq!(engine.len(), 3);
    }

    #[test]
    fn test_undo_restores_exact_prior_list() {
        let mut engine = abcd();
        let before = engine.items().to_vec();
        engine.move_by_drag(1, 4).unwrap();
        let after = engine.items().to_vec();

        assert_eq!(engine.undo(), Outcome::Applied);
        assert_eq!(engine.items(), before.as_slice());
        assert_eq!(engine.redo(), Outcome::Applied);
        assert_eq!(engine.items(), after.as_slice());
    }

    #[test]
    fn test_undo_redo_on_empty_history() {
        let mut engine = abc();
        assert_eq!(engine.undo(), Outcome::Unchanged);
        assert_eq!(engine.redo(), Outcome::Unchanged);
    }

    #[test]
    fn test_new_mutation_clears_redo() {
        let mut engine = abc();
        engine.move_to_position(3, 1).unwrap();
        engine.undo();
        assert!(engine.can_redo());
        engine.move_to_position(2, 3).unwrap();
        assert!(!engine.can_redo());
    }

    #[test]
    fn test_save_commits_and_clears_history() {
        let mut engine = abc();
        engine.move_to_position(3, 1).unwrap();
        engine.move_to_position(1, 3).unwrap();
        engine.undo();

        let mut sink = RecordingSink::default();
        let saved = engine.save(&mut sink);

        assert_eq!(sink.saved.len(), 1);
        assert_eq!(sink.saved[0], saved);
        assert_eq!(saved[0], PositionUpdate { id: 3, position: 1 });
        assert!(!engine.can_undo());
        assert!(!engine.can_redo());
        assert_eq!(engine.undo(), Outcome::Unchanged);
    }

    #[test]
    fn test_history_limit() {
        let mut engine = ReorderEngine::with_history_limit(abc().items().to_vec(), 2);
        engine.move_to_position(1, 3).unwrap();
        engine.move_to_position(2, 3).unwrap();
        engine.move_to_position(3, 3).unwrap();
        assert_eq!(engine.undo_depth(), 2);
    }

    #[test]
    fn test_from_json() {
        let engine = ReorderEngine::from_json(r#"[{"id":5,"name":"X","position":9}]"#);
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.position_of(5), Some(1));

        assert!(ReorderEngine::from_json("{not json").is_empty());
        assert!(ReorderEngine::from_json(r#"{"id":5}"#).is_empty());
    }
}
