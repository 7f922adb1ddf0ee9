//! Snapshot History
//!
//! Linear undo/redo over full copies of the state.

use std::collections::VecDeque;

/// Undo and redo stacks of snapshots
#[derive(Debug, Clone)]
pub struct History<T: Clone> {
    undo: VecDeque<T>,
    redo: Vec<T>,
    /// Maximum undo entries kept; oldest are dropped first
    limit: usize,
}

impl<T: Clone> History<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record the state that existed before a mutation. Clears redo.
    pub fn record(&mut self, before: T) {
        self.redo.clear();
        self.undo.push_back(before);
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
    }

    /// Swap `current` for the most recent undo entry
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Swap `current` for the most recent redo entry
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    /// Drop both stacks
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
